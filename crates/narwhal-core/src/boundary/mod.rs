//! Line, block and section boundaries.
//!
//! A line's box is read straight off its measured ink: the ink's far corner (origin plus
//! extent) gives width and depth, the style's thickness gives height, and padding is added on
//! every axis. Blocks and sections stack their parts with [`stack_boxes`].
//!
//! Each public function validates its own inputs; none of them trusts a caller to have done so.

use crate::error::{Error, Result, check_non_negative};
use crate::geom::{BoundingBox, stack_boxes};
use crate::style::TextStyle;
use narwhal_metrics::{GlyphExtents, MetricsAdapter};
use serde::{Deserialize, Serialize};

/// Ordered lines sharing one style. The first line is the top of the block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub lines: Vec<String>,
}

impl Block {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `text` on newlines. A string without newlines is a one-line block.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split('\n'))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A block set at its own font size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub block: Block,
    pub size: f64,
}

impl Section {
    pub fn new(block: Block, size: f64) -> Self {
        Self { block, size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBoundary {
    pub total: BoundingBox,
    /// Each section's own box, in input order.
    pub sections: Vec<BoundingBox>,
}

fn box_from_extents(extents: &GlyphExtents, style: &TextStyle) -> BoundingBox {
    let width = (extents.extent.width + extents.origin.x).max(0.0);
    let depth = (extents.extent.height + extents.origin.y).max(0.0);
    BoundingBox::new(
        width + style.pad,
        depth + style.pad,
        style.height + style.pad,
    )
}

fn check_style(metrics: &dyn MetricsAdapter, style: &TextStyle) -> Result<()> {
    style.validate()?;
    if !metrics.is_measurable(&style.font) {
        return Err(Error::unknown_font(&style.font));
    }
    Ok(())
}

fn measure_line(
    metrics: &dyn MetricsAdapter,
    text: &str,
    style: &TextStyle,
) -> Result<BoundingBox> {
    let extents = metrics.measure(text, &style.font, style.size, style.spacing)?;
    Ok(box_from_extents(&extents, style))
}

pub fn line_boundary(
    metrics: &dyn MetricsAdapter,
    text: &str,
    style: &TextStyle,
) -> Result<BoundingBox> {
    check_style(metrics, style)?;
    let b = measure_line(metrics, text, style)?;
    tracing::debug!(text, font = %style.font, size = style.size, ?b, "line boundary");
    Ok(b)
}

/// Boxes of every line in `lines`, each measured independently.
pub fn line_boundaries<S: AsRef<str>>(
    metrics: &dyn MetricsAdapter,
    lines: &[S],
    style: &TextStyle,
) -> Result<Vec<BoundingBox>> {
    check_style(metrics, style)?;
    if lines.is_empty() {
        return Err(Error::EmptyInput { what: "lines" });
    }
    lines
        .iter()
        .map(|line| measure_line(metrics, line.as_ref(), style))
        .collect()
}

pub fn block_boundary<S: AsRef<str>>(
    metrics: &dyn MetricsAdapter,
    lines: &[S],
    style: &TextStyle,
    line_spacing: f64,
) -> Result<BoundingBox> {
    check_non_negative("line_spacing", line_spacing)?;
    let boxes = line_boundaries(metrics, lines, style)?;
    let b = stack_boxes(&boxes, line_spacing)?;
    tracing::debug!(lines = boxes.len(), line_spacing, ?b, "block boundary");
    Ok(b)
}

/// Boundary of a multi-size block. `style.size` is ignored; every section brings its own.
pub fn section_boundary(
    metrics: &dyn MetricsAdapter,
    sections: &[Section],
    style: &TextStyle,
    line_spacing: f64,
) -> Result<SectionBoundary> {
    check_non_negative("line_spacing", line_spacing)?;
    if sections.is_empty() {
        return Err(Error::EmptyInput { what: "sections" });
    }
    let per_section = sections
        .iter()
        .map(|section| {
            block_boundary(
                metrics,
                &section.block.lines,
                &style.with_size(section.size),
                line_spacing,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    let total = stack_boxes(&per_section, line_spacing)?;
    tracing::debug!(sections = per_section.len(), line_spacing, ?total, "section boundary");
    Ok(SectionBoundary {
        total,
        sections: per_section,
    })
}
