// This file is intentionally small and hand-curated.
//
// Reference measurements of whole strings at unit spacing, kept where the glyph walk over
// `liberation_metrics.rs` drifts from the text backend by more than a few hundredths of a
// unit. Each row is `(text, size, [origin_x, origin_y, extent_x, extent_y])` in output units;
// other sizes scale linearly.

pub(crate) static LIBERATION_SANS_REGULAR: &[(&str, f64, [f64; 4])] = &[
    // Ink from the left edge of `I` to the right edge of `m`, rising to the cap height of `I`
    // and descending to the bottom of `p`.
    ("Ipsum", 10.0, [1.26, -2.88, 35.02, 12.45]),
];
