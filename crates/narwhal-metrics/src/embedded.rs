use crate::font::{FontId, FontStyle};
use crate::generated::liberation_metrics as lib;
use crate::generated::recorded_runs;
use crate::table::{FontMetrics, FontTable, GlyphMetrics, GlyphSample, InkBounds, RecordedRun};
use std::sync::{Arc, OnceLock};

type Row = (char, u16, Option<[i16; 4]>);
type Run = (&'static str, f64, [f64; 4]);

fn glyph(advance: u16, ink: Option<[i16; 4]>) -> GlyphMetrics {
    GlyphMetrics {
        advance: f64::from(advance),
        ink: ink.map(InkBounds::from_units),
    }
}

fn face(
    family: &str,
    style: FontStyle,
    notdef: (u16, [i16; 4]),
    rows: &[Row],
    runs: &[Run],
) -> FontMetrics {
    FontMetrics {
        family: family.to_string(),
        style,
        units_per_em: f64::from(lib::UNITS_PER_EM),
        notdef: glyph(notdef.0, Some(notdef.1)),
        samples: rows
            .iter()
            .map(|&(ch, advance, ink)| GlyphSample {
                ch,
                metrics: glyph(advance, ink),
            })
            .collect(),
        runs: runs
            .iter()
            .map(|&(text, size, [x, y, w, h])| RecordedRun {
                text: text.to_string(),
                size,
                origin: [x, y],
                extent: [w, h],
            })
            .collect(),
    }
}

fn builtin_fonts() -> Vec<FontMetrics> {
    vec![
        face(
            "Liberation Sans",
            FontStyle::Regular,
            lib::NOTDEF,
            lib::LIBERATION_SANS_REGULAR,
            recorded_runs::LIBERATION_SANS_REGULAR,
        ),
        face(
            "Liberation Sans",
            FontStyle::Bold,
            lib::NOTDEF,
            lib::LIBERATION_SANS_BOLD,
            &[],
        ),
        face(
            "Liberation Sans",
            FontStyle::Italic,
            lib::NOTDEF,
            lib::LIBERATION_SANS_ITALIC,
            &[],
        ),
        // Listed without samples: present in the catalog, not measurable.
        face("Liberation Sans", FontStyle::BoldItalic, lib::NOTDEF, &[], &[]),
        face(
            "Liberation Mono",
            FontStyle::Regular,
            lib::MONO_NOTDEF,
            lib::LIBERATION_MONO_REGULAR,
            &[],
        ),
    ]
}

impl FontTable {
    /// The embedded Liberation table, built once per process.
    pub fn builtin() -> Arc<FontTable> {
        static BUILTIN: OnceLock<Arc<FontTable>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let mut table = FontTable::default();
                for metrics in builtin_fonts() {
                    if let Ok(font) = FontId::new(metrics.family.as_str(), metrics.style) {
                        table.push_face(font, metrics);
                    }
                }
                table.finish();
                Arc::new(table)
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_sorted_measurable_fonts() {
        let table = FontTable::builtin();
        let names = table
            .measurable_fonts()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Liberation Mono",
                "Liberation Sans",
                "Liberation Sans:style=Bold",
                "Liberation Sans:style=Italic",
            ]
        );
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn builtin_covers_printable_ascii() {
        for rows in [
            lib::LIBERATION_SANS_REGULAR,
            lib::LIBERATION_SANS_BOLD,
            lib::LIBERATION_SANS_ITALIC,
            lib::LIBERATION_MONO_REGULAR,
        ] {
            for ch in ' '..='~' {
                assert!(
                    rows.iter().any(|&(sampled, _, _)| sampled == ch),
                    "missing sample for {ch:?}"
                );
            }
        }
    }

    #[test]
    fn mono_advances_are_uniform() {
        assert!(
            lib::LIBERATION_MONO_REGULAR
                .iter()
                .all(|&(_, advance, _)| advance == lib::MONO_NOTDEF.0)
        );
    }
}
