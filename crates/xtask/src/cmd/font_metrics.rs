//! Generator for the embedded Liberation glyph table in `narwhal-metrics`.

use crate::XtaskError;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

type Row = (char, u16, Option<[i16; 4]>);

/// `(static name, file name)` for every face the embedded table carries.
const FACES: &[(&str, &str)] = &[
    ("LIBERATION_SANS_REGULAR", "LiberationSans-Regular.ttf"),
    ("LIBERATION_SANS_BOLD", "LiberationSans-Bold.ttf"),
    ("LIBERATION_SANS_ITALIC", "LiberationSans-Italic.ttf"),
    ("LIBERATION_MONO_REGULAR", "LiberationMono-Regular.ttf"),
];

struct FaceRows {
    name: &'static str,
    file: &'static str,
    units_per_em: u16,
    notdef: (u16, [i16; 4]),
    rows: Vec<Row>,
}

pub(crate) fn gen_font_metrics(args: Vec<String>) -> Result<(), XtaskError> {
    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    let mut fonts_dir: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--fonts" => {
                i += 1;
                fonts_dir = args.get(i).map(PathBuf::from);
            }
            "--out" => {
                i += 1;
                out_path = args.get(i).map(PathBuf::from);
            }
            _ => return Err(XtaskError::Usage),
        }
        i += 1;
    }

    let Some(fonts_dir) = fonts_dir else {
        return Err(XtaskError::Usage);
    };
    let out_path = out_path.unwrap_or_else(|| {
        workspace_root
            .join("crates")
            .join("narwhal-metrics")
            .join("src")
            .join("generated")
            .join("liberation_metrics.rs")
    });

    let faces = FACES
        .iter()
        .map(|&(name, file)| read_face(&fonts_dir.join(file), name, file))
        .collect::<Result<Vec<_>, _>>()?;

    let units_per_em = faces[0].units_per_em;
    if faces.iter().any(|f| f.units_per_em != units_per_em) {
        let listed = faces
            .iter()
            .map(|f| format!("{}={}", f.file, f.units_per_em))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(XtaskError::MixedUnitsPerEm(listed));
    }

    let out = render(&faces, units_per_em);
    fs::write(&out_path, out).map_err(|source| XtaskError::WriteFile {
        path: out_path.display().to_string(),
        source,
    })?;
    println!("wrote {}", out_path.display());
    Ok(())
}

fn read_face(path: &Path, name: &'static str, file: &'static str) -> Result<FaceRows, XtaskError> {
    let bytes = fs::read(path).map_err(|source| XtaskError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let face = ttf_parser::Face::parse(&bytes, 0).map_err(|err| XtaskError::ParseFont {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let ink = |gid| {
        face.glyph_bounding_box(gid)
            .map(|r| [r.x_min, r.y_min, r.x_max, r.y_max])
    };
    let advance = |gid| face.glyph_hor_advance(gid).unwrap_or(0);

    let notdef_id = ttf_parser::GlyphId(0);
    let notdef = (advance(notdef_id), ink(notdef_id).unwrap_or([0; 4]));

    let mut rows = Vec::new();
    for ch in ' '..='~' {
        let gid = face.glyph_index(ch).ok_or_else(|| XtaskError::MissingGlyph {
            path: path.display().to_string(),
            ch,
        })?;
        rows.push((ch, advance(gid), ink(gid)));
    }

    Ok(FaceRows {
        name,
        file,
        units_per_em: face.units_per_em(),
        notdef,
        rows,
    })
}

fn render(faces: &[FaceRows], units_per_em: u16) -> String {
    let mut out = String::new();
    let files = faces.iter().map(|f| f.file).collect::<Vec<_>>().join(", ");
    let _ = writeln!(
        &mut out,
        "// Embedded glyph metrics for the Liberation font families."
    );
    let _ = writeln!(&mut out, "//");
    let _ = writeln!(
        &mut out,
        "// Generated by `cargo run -p xtask -- gen-font-metrics` from: {files}."
    );
    let _ = writeln!(
        &mut out,
        "// Advances are `hmtx` widths and ink bounds are `glyf` outline boxes, both in font units."
    );
    let _ = writeln!(
        &mut out,
        "// Whole strings recorded from the text backend are listed in `recorded_runs.rs`."
    );
    let _ = writeln!(&mut out, "//");
    let _ = writeln!(
        &mut out,
        "// Each row is `(character, advance, ink bounds [x_min, y_min, x_max, y_max])`; whitespace has"
    );
    let _ = writeln!(&mut out, "// no ink.");
    let _ = writeln!(&mut out);
    let _ = writeln!(
        &mut out,
        "pub(crate) const UNITS_PER_EM: u16 = {units_per_em};"
    );
    let _ = writeln!(&mut out);
    let _ = writeln!(
        &mut out,
        "/// `.notdef` box drawn for characters missing from a face: `(advance, ink bounds)`."
    );
    for (name, face) in [("NOTDEF", &faces[0]), ("MONO_NOTDEF", &faces[faces.len() - 1])] {
        let (advance, [x0, y0, x1, y1]) = face.notdef;
        let _ = writeln!(
            &mut out,
            "pub(crate) const {name}: (u16, [i16; 4]) = ({advance}, [{x0}, {y0}, {x1}, {y1}]);"
        );
    }

    for face in faces {
        let _ = writeln!(&mut out);
        let _ = writeln!(
            &mut out,
            "pub(crate) static {}: &[(char, u16, Option<[i16; 4]>)] = &[",
            face.name
        );
        for &(ch, advance, ink) in &face.rows {
            let ink = match ink {
                Some([x0, y0, x1, y1]) => format!("Some([{x0}, {y0}, {x1}, {y1}])"),
                None => "None".to_string(),
            };
            let _ = writeln!(&mut out, "    ({ch:?}, {advance}, {ink}),");
        }
        let _ = writeln!(&mut out, "];");
    }
    out
}
