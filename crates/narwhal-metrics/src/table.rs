//! Font-metrics tables.
//!
//! A table is a list of faces, each carrying a family name, a style index, the em size of its
//! font units, a set of glyph samples and, optionally, whole strings recorded from the text
//! backend. Only faces with at least one glyph sample are measurable;
//! the sorted set of measurable fonts is computed once when the table is built and never
//! changes afterwards, so a table can be shared freely behind an `Arc`.

use crate::error::{Error, Result};
use crate::font::{FontId, FontStyle};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkBounds {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl InkBounds {
    pub fn from_units([x_min, y_min, x_max, y_max]: [i16; 4]) -> Self {
        Self {
            x_min: f64::from(x_min),
            y_min: f64::from(y_min),
            x_max: f64::from(x_max),
            y_max: f64::from(y_max),
        }
    }

    /// Grows `self` to also cover `other` shifted right by `dx`.
    pub(crate) fn include_shifted(&mut self, other: &InkBounds, dx: f64) {
        self.x_min = self.x_min.min(other.x_min + dx);
        self.y_min = self.y_min.min(other.y_min);
        self.x_max = self.x_max.max(other.x_max + dx);
        self.y_max = self.y_max.max(other.y_max);
    }
}

/// Advance and ink box of one glyph, in font units. Whitespace glyphs have no ink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetrics {
    pub advance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink: Option<InkBounds>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphSample {
    pub ch: char,
    #[serde(flatten)]
    pub metrics: GlyphMetrics,
}

/// Ink of a whole string as the text backend draws it at `size` with unit spacing, in output
/// units. Takes precedence over the glyph walk for an exact text match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedRun {
    pub text: String,
    pub size: f64,
    pub origin: [f64; 2],
    pub extent: [f64; 2],
}

/// One face as it appears in a serialized table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    pub family: String,
    pub style: FontStyle,
    pub units_per_em: f64,
    /// Drawn for characters the face has no sample for.
    pub notdef: GlyphMetrics,
    #[serde(default)]
    pub samples: Vec<GlyphSample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<RecordedRun>,
}

impl FontMetrics {
    pub fn font_id(&self) -> Result<FontId> {
        FontId::new(self.family.as_str(), self.style)
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Face {
    pub(crate) units_per_em: f64,
    notdef: GlyphMetrics,
    glyphs: FxHashMap<char, GlyphMetrics>,
    runs: FxHashMap<String, RecordedRun>,
}

impl Face {
    pub(crate) fn glyph(&self, ch: char) -> &GlyphMetrics {
        self.glyphs.get(&ch).unwrap_or(&self.notdef)
    }

    pub(crate) fn run(&self, text: &str) -> Option<&RecordedRun> {
        self.runs.get(text)
    }

    fn sample_count(&self) -> usize {
        self.glyphs.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FontTable {
    faces: FxHashMap<FontId, Face>,
    measurable: Vec<FontId>,
}

impl FontTable {
    /// Builds a table from face records, rejecting duplicate faces and non-positive em sizes.
    pub fn from_fonts(fonts: impl IntoIterator<Item = FontMetrics>) -> Result<Self> {
        let mut table = Self::default();
        for metrics in fonts {
            let font = metrics.font_id()?;
            if !(metrics.units_per_em.is_finite() && metrics.units_per_em > 0.0) {
                return Err(Error::InvalidParameter {
                    name: "units_per_em",
                    value: metrics.units_per_em,
                    expected: "a positive number",
                });
            }
            if let Some(run) = metrics
                .runs
                .iter()
                .find(|run| !(run.size.is_finite() && run.size > 0.0))
            {
                return Err(Error::InvalidParameter {
                    name: "run size",
                    value: run.size,
                    expected: "a positive number",
                });
            }
            if table.faces.contains_key(&font) {
                return Err(Error::DuplicateFont {
                    font: font.to_string(),
                });
            }
            table.push_face(font, metrics);
        }
        table.finish();
        Ok(table)
    }

    /// Parses a JSON array of [`FontMetrics`] records.
    pub fn from_json(json: &str) -> Result<Self> {
        let fonts: Vec<FontMetrics> = serde_json::from_str(json)?;
        Self::from_fonts(fonts)
    }

    pub(crate) fn push_face(&mut self, font: FontId, metrics: FontMetrics) {
        let glyphs = metrics
            .samples
            .into_iter()
            .map(|s| (s.ch, s.metrics))
            .collect::<FxHashMap<_, _>>();
        let runs = metrics
            .runs
            .into_iter()
            .map(|run| (run.text.clone(), run))
            .collect::<FxHashMap<_, _>>();
        self.faces.insert(
            font,
            Face {
                units_per_em: metrics.units_per_em,
                notdef: metrics.notdef,
                glyphs,
                runs,
            },
        );
    }

    pub(crate) fn finish(&mut self) {
        let mut measurable = self
            .faces
            .iter()
            .filter(|(_, face)| face.sample_count() > 0)
            .map(|(font, _)| font.clone())
            .collect::<Vec<_>>();
        measurable.sort();
        tracing::debug!(
            faces = self.faces.len(),
            measurable = measurable.len(),
            "font table built"
        );
        self.measurable = measurable;
    }

    /// All faces listed in the table, measurable or not.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Sorted list of fonts that have at least one glyph sample.
    pub fn measurable_fonts(&self) -> &[FontId] {
        &self.measurable
    }

    pub fn is_measurable(&self, font: &FontId) -> bool {
        self.measurable.binary_search(font).is_ok()
    }

    pub(crate) fn face(&self, font: &FontId) -> Result<&Face> {
        if !self.is_measurable(font) {
            return Err(Error::UnknownFont {
                font: font.to_string(),
            });
        }
        self.faces.get(font).ok_or_else(|| Error::UnknownFont {
            font: font.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"[
        {
            "family": "Test Sans",
            "style": 0,
            "unitsPerEm": 1000,
            "notdef": { "advance": 500, "ink": { "xMin": 50, "yMin": 0, "xMax": 450, "yMax": 700 } },
            "samples": [
                { "ch": "a", "advance": 500, "ink": { "xMin": 40, "yMin": -10, "xMax": 460, "yMax": 510 } },
                { "ch": " ", "advance": 250 }
            ]
        },
        {
            "family": "Test Sans",
            "style": 1,
            "unitsPerEm": 1000,
            "notdef": { "advance": 500 }
        }
    ]"#;

    #[test]
    fn only_faces_with_samples_are_measurable() {
        let table = FontTable::from_json(TABLE).unwrap();
        assert_eq!(table.len(), 2);
        let regular = FontId::parse("Test Sans").unwrap();
        let bold = FontId::parse("Test Sans:style=Bold").unwrap();
        assert!(table.is_measurable(&regular));
        assert!(!table.is_measurable(&bold));
        assert_eq!(table.measurable_fonts(), &[regular]);
    }

    #[test]
    fn missing_glyph_falls_back_to_notdef() {
        let table = FontTable::from_json(TABLE).unwrap();
        let face = table.face(&FontId::parse("Test Sans").unwrap()).unwrap();
        assert_eq!(face.glyph('a').advance, 500.0);
        assert_eq!(face.glyph(' ').ink, None);
        assert_eq!(face.glyph('z').ink.map(|ink| ink.y_max), Some(700.0));
    }

    #[test]
    fn duplicate_faces_are_rejected() {
        let face = FontMetrics {
            family: "Dup".to_string(),
            style: FontStyle::Regular,
            units_per_em: 1000.0,
            notdef: GlyphMetrics {
                advance: 500.0,
                ink: None,
            },
            samples: Vec::new(),
            runs: Vec::new(),
        };
        let err = FontTable::from_fonts([face.clone(), face]).unwrap_err();
        assert!(matches!(err, Error::DuplicateFont { ref font } if font == "Dup"));
    }

    #[test]
    fn non_positive_em_is_rejected() {
        let face = FontMetrics {
            family: "Flat".to_string(),
            style: FontStyle::Regular,
            units_per_em: 0.0,
            notdef: GlyphMetrics {
                advance: 0.0,
                ink: None,
            },
            samples: Vec::new(),
            runs: Vec::new(),
        };
        assert!(matches!(
            FontTable::from_fonts([face]),
            Err(Error::InvalidParameter {
                name: "units_per_em",
                ..
            })
        ));
    }

    #[test]
    fn recorded_runs_are_keyed_by_exact_text() {
        let json = r#"[{
            "family": "Run Sans",
            "style": 0,
            "unitsPerEm": 1000,
            "notdef": { "advance": 500 },
            "samples": [{ "ch": "a", "advance": 500 }],
            "runs": [{ "text": "ab", "size": 10, "origin": [0.5, -1], "extent": [7, 9] }]
        }]"#;
        let table = FontTable::from_json(json).unwrap();
        let face = table.face(&FontId::parse("Run Sans").unwrap()).unwrap();
        assert_eq!(face.run("ab").map(|run| run.extent), Some([7.0, 9.0]));
        assert!(face.run("a").is_none());
        assert!(face.run("ab ").is_none());

        let bad = json.replace(r#""size": 10"#, r#""size": 0"#);
        assert!(matches!(
            FontTable::from_json(&bad),
            Err(Error::InvalidParameter {
                name: "run size",
                ..
            })
        ));
    }

    #[test]
    fn style_index_out_of_range_fails_to_parse() {
        let json = r#"[{ "family": "X", "style": 7, "unitsPerEm": 1000, "notdef": { "advance": 1 } }]"#;
        assert!(matches!(FontTable::from_json(json), Err(Error::Json(_))));
    }
}
