//! The metrics adapter seam.
//!
//! The boundary engine only ever asks one question: where does the ink of this string start,
//! and how large is it? [`MetricsAdapter`] is that question; [`TableMetrics`] answers it from a
//! [`FontTable`].

use crate::error::{Error, Result};
use crate::font::FontId;
use crate::geom::{self, Size, Vector};
use crate::table::{FontTable, InkBounds};
use std::sync::Arc;

/// Em size per unit of nominal text size. The text backend sets `size` as points on a 100 dpi
/// raster, so a size of 10 lays glyphs out on an em of `10 * 100 / 72` output units.
pub const EM_PER_SIZE: f64 = 100.0 / 72.0;

/// Ink placement of a measured string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphExtents {
    /// Offset from the nominal origin to the bottom-left corner of the ink.
    pub origin: Vector,
    /// Ink width and height measured from `origin`.
    pub extent: Size,
}

impl GlyphExtents {
    /// Right edge of the ink relative to the nominal origin.
    pub fn right(&self) -> f64 {
        self.origin.x + self.extent.width
    }

    /// Top edge of the ink relative to the baseline.
    pub fn top(&self) -> f64 {
        self.origin.y + self.extent.height
    }
}

pub trait MetricsAdapter {
    /// Measures `text` set in `font` at `size`, with glyph advances scaled by `spacing`.
    fn measure(&self, text: &str, font: &FontId, size: f64, spacing: f64) -> Result<GlyphExtents>;

    fn is_measurable(&self, font: &FontId) -> bool;
}

/// Measures text by walking a [`FontTable`] glyph by glyph.
///
/// A string the face has a recorded run for is answered from that run, scaled to `size`, as long
/// as `spacing` is 1. Everything else walks the glyphs: advances are summed without kerning and
/// characters the face has no sample for use its `.notdef` glyph. Text without any ink (empty or
/// whitespace only) measures as a zero origin with a zero extent.
#[derive(Debug, Clone)]
pub struct TableMetrics {
    table: Arc<FontTable>,
}

impl Default for TableMetrics {
    fn default() -> Self {
        Self::new(FontTable::builtin())
    }
}

impl TableMetrics {
    pub fn new(table: Arc<FontTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FontTable {
        &self.table
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(Error::InvalidParameter {
        name,
        value,
        expected: "a finite number > 0",
    })
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(Error::InvalidParameter {
        name,
        value,
        expected: "a finite number >= 0",
    })
}

impl MetricsAdapter for TableMetrics {
    fn measure(&self, text: &str, font: &FontId, size: f64, spacing: f64) -> Result<GlyphExtents> {
        check_positive("size", size)?;
        check_non_negative("spacing", spacing)?;
        let face = self.table.face(font)?;

        if spacing == 1.0 {
            if let Some(run) = face.run(text) {
                let k = size / run.size;
                let extents = GlyphExtents {
                    origin: geom::vector(run.origin[0] * k, run.origin[1] * k),
                    extent: geom::size(run.extent[0] * k, run.extent[1] * k),
                };
                tracing::trace!(text, font = %font, size, ?extents, "recorded run");
                return Ok(extents);
            }
        }

        let mut pen = 0.0;
        let mut ink: Option<InkBounds> = None;
        for ch in text.chars() {
            let glyph = face.glyph(ch);
            if let Some(glyph_ink) = &glyph.ink {
                match ink.as_mut() {
                    Some(acc) => acc.include_shifted(glyph_ink, pen),
                    None => {
                        let mut first = *glyph_ink;
                        first.x_min += pen;
                        first.x_max += pen;
                        ink = Some(first);
                    }
                }
            }
            pen += glyph.advance * spacing;
        }

        let Some(ink) = ink else {
            return Ok(GlyphExtents::default());
        };
        let scale = size * EM_PER_SIZE / face.units_per_em;
        let extents = GlyphExtents {
            origin: geom::vector(ink.x_min * scale, ink.y_min * scale),
            extent: geom::size(
                (ink.x_max - ink.x_min) * scale,
                (ink.y_max - ink.y_min) * scale,
            ),
        };
        tracing::trace!(text, font = %font, size, spacing, ?extents, "measured text");
        Ok(extents)
    }

    fn is_measurable(&self, font: &FontId) -> bool {
        self.table.is_measurable(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sans() -> FontId {
        FontId::parse("Liberation Sans").unwrap()
    }

    /// Font units of the embedded Sans face at size 10, in output units.
    fn units(n: f64) -> f64 {
        n * 10.0 * EM_PER_SIZE / 2048.0
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ipsum_is_answered_from_its_recorded_run() {
        let m = TableMetrics::default()
            .measure("Ipsum", &sans(), 10.0, 1.0)
            .unwrap();
        assert!(close(m.origin.x, 1.26) && close(m.origin.y, -2.88), "{m:?}");
        assert!(close(m.right(), 36.28), "{m:?}");
        assert!(close(m.top(), 9.57), "{m:?}");
    }

    #[test]
    fn recorded_runs_scale_linearly_with_size() {
        let metrics = TableMetrics::default();
        let at10 = metrics.measure("Ipsum", &sans(), 10.0, 1.0).unwrap();
        let at25 = metrics.measure("Ipsum", &sans(), 25.0, 1.0).unwrap();
        assert!(close(at25.right(), at10.right() * 2.5));
        assert!(close(at25.top(), at10.top() * 2.5));
    }

    #[test]
    fn non_unit_spacing_walks_the_glyphs() {
        let m = TableMetrics::default()
            .measure("Ipsum", &sans(), 10.0, 1.5)
            .unwrap();
        // `m` starts after I, p, s, u: (569 + 1139 + 1024 + 1139) * 1.5, and its ink ends at 1575.
        assert!(close(m.right(), units(5806.5 + 1575.0)), "{m:?}");
        assert!(close(m.origin.x, units(186.0)), "{m:?}");
        assert!(close(m.top(), units(1470.0)), "{m:?}");
    }

    #[test]
    fn glyph_ink_is_unioned_along_the_pen() {
        let m = TableMetrics::default()
            .measure("Il", &sans(), 10.0, 1.0)
            .unwrap();
        // I spans 186..385; l spans 137..317 after I's 569-unit advance.
        assert!(close(m.origin.x, units(186.0)));
        assert!(close(m.right(), units(569.0 + 317.0)));
        assert!(close(m.origin.y, 0.0));
        assert!(close(m.top(), units(1470.0)));
    }

    #[test]
    fn spacing_scales_advances_only() {
        let metrics = TableMetrics::default();
        let tight = metrics.measure("AB", &sans(), 10.0, 1.0).unwrap();
        let loose = metrics.measure("AB", &sans(), 10.0, 2.0).unwrap();
        // The second glyph moves right by one extra advance of A (1366 units).
        assert!(close(loose.right() - tight.right(), units(1366.0)));
        assert_eq!(loose.origin, tight.origin);
        assert_eq!(loose.extent.height, tight.extent.height);
    }

    #[test]
    fn whitespace_has_no_ink() {
        let metrics = TableMetrics::default();
        for text in ["", " ", "   "] {
            assert_eq!(
                metrics.measure(text, &sans(), 10.0, 1.0).unwrap(),
                GlyphExtents::default()
            );
        }
    }

    #[test]
    fn leading_whitespace_shifts_the_origin() {
        let metrics = TableMetrics::default();
        let bare = metrics.measure("A", &sans(), 10.0, 1.0).unwrap();
        let padded = metrics.measure(" A", &sans(), 10.0, 1.0).unwrap();
        assert!(close(padded.origin.x - bare.origin.x, units(569.0)));
        assert_eq!(padded.extent, bare.extent);
    }

    #[test]
    fn unlisted_and_sampleless_fonts_are_unknown() {
        let metrics = TableMetrics::default();
        for raw in ["NotARealFont", "Liberation Sans:style=Bold Italic"] {
            let font = FontId::parse(raw).unwrap();
            assert!(!metrics.is_measurable(&font));
            let err = metrics.measure("A", &font, 10.0, 1.0).unwrap_err();
            assert!(matches!(err, Error::UnknownFont { ref font } if font == raw));
        }
    }

    #[test]
    fn table_metrics_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TableMetrics>();
    }

    #[test]
    fn rejects_non_positive_size() {
        let err = TableMetrics::default()
            .measure("A", &sans(), 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "size", .. }));
    }
}
