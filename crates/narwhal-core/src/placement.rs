//! Placement of lines and sections within their block.
//!
//! A placement splits into a stack-wide shift and per-element offsets. The offsets are running
//! prefix depths and only depend on the elements before them; the shift aligns the stack
//! horizontally and centers it vertically.
//!
//! The vertical shift uses the first element's own half-depth as the reference row:
//! `total.depth / 2 - first.depth / 2`. Elements are assumed to be rendered centered on their
//! own origin, so the first element's top meets the top of the block. Later elements that are
//! taller or shorter than the first are off by half the difference; this is the established
//! convention and boxes/anchors elsewhere are computed against it.

use crate::boundary::{Section, line_boundaries};
use crate::error::{Error, Result, check_non_negative};
use crate::geom::{BoundingBox, Vec3, prefix_depths, stack_boxes, vec3};
use crate::style::{HorizontalAlign, TextStyle};
use narwhal_metrics::MetricsAdapter;

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub total: BoundingBox,
    pub shift: Vec3,
    /// `(0, -prefix_depth(i), 0)` for element `i`.
    pub offsets: Vec<Vec3>,
}

impl Placement {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Final translation of element `i`.
    pub fn position(&self, i: usize) -> Option<Vec3> {
        self.offsets.get(i).map(|offset| self.shift + *offset)
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.offsets.iter().map(|offset| self.shift + *offset).collect()
    }
}

pub fn place_elements(
    boxes: &[BoundingBox],
    align: HorizontalAlign,
    spacing: f64,
) -> Result<Placement> {
    check_non_negative("spacing", spacing)?;
    let Some(first) = boxes.first() else {
        return Err(Error::EmptyInput { what: "elements" });
    };
    let total = stack_boxes(boxes, spacing)?;
    let shift = vec3(
        align.x_shift(total.width),
        total.depth / 2.0 - first.depth / 2.0,
        0.0,
    );
    let offsets = prefix_depths(boxes, spacing)
        .into_iter()
        .map(|prefix| vec3(0.0, -prefix, 0.0))
        .collect::<Vec<_>>();
    tracing::trace!(elements = boxes.len(), %align, ?shift, "placed elements");
    Ok(Placement {
        total,
        shift,
        offsets,
    })
}

/// Line boxes of a block together with their placement.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub lines: Vec<BoundingBox>,
    pub placement: Placement,
}

impl BlockLayout {
    pub fn bounds(&self) -> BoundingBox {
        self.placement.total
    }
}

pub fn place_block<S: AsRef<str>>(
    metrics: &dyn MetricsAdapter,
    lines: &[S],
    style: &TextStyle,
    line_spacing: f64,
    align: HorizontalAlign,
) -> Result<BlockLayout> {
    check_non_negative("line_spacing", line_spacing)?;
    let boxes = line_boundaries(metrics, lines, style)?;
    let placement = place_elements(&boxes, align, line_spacing)?;
    Ok(BlockLayout {
        lines: boxes,
        placement,
    })
}

/// Per-section line layouts plus the placement of the sections themselves.
///
/// Lines inside a section keep X at their own alignment edge; only the outer placement shifts
/// along X, against the widest section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub sections: Vec<BlockLayout>,
    pub placement: Placement,
}

impl SectionLayout {
    pub fn bounds(&self) -> BoundingBox {
        self.placement.total
    }
}

pub fn place_sections(
    metrics: &dyn MetricsAdapter,
    sections: &[Section],
    style: &TextStyle,
    line_spacing: f64,
    align: HorizontalAlign,
) -> Result<SectionLayout> {
    check_non_negative("line_spacing", line_spacing)?;
    if sections.is_empty() {
        return Err(Error::EmptyInput { what: "sections" });
    }
    let inner = sections
        .iter()
        .map(|section| {
            place_block(
                metrics,
                &section.block.lines,
                &style.with_size(section.size),
                line_spacing,
                HorizontalAlign::Center,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    let boxes = inner.iter().map(BlockLayout::bounds).collect::<Vec<_>>();
    let placement = place_elements(&boxes, align, line_spacing)?;
    Ok(SectionLayout {
        sections: inner,
        placement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{Block, block_boundary, section_boundary};
    use narwhal_metrics::{FontId, TableMetrics};

    fn boxes() -> Vec<BoundingBox> {
        vec![
            BoundingBox::new(20.0, 4.0, 1.0),
            BoundingBox::new(10.0, 6.0, 1.0),
            BoundingBox::new(16.0, 2.0, 1.0),
        ]
    }

    fn sans() -> TextStyle {
        TextStyle::new(FontId::parse("Liberation Sans").unwrap())
    }

    #[test]
    fn first_row_anchors_the_vertical_shift() {
        let p = place_elements(&boxes(), HorizontalAlign::Center, 1.0).unwrap();
        // total depth 4 + 6 + 2 + 2 * 1 = 14; first row half-depth 2.
        assert_eq!(p.total, BoundingBox::new(20.0, 14.0, 1.0));
        assert_eq!(p.shift, vec3(0.0, 5.0, 0.0));
        assert_eq!(
            p.positions(),
            vec![vec3(0.0, 5.0, 0.0), vec3(0.0, 0.0, 0.0), vec3(0.0, -7.0, 0.0)]
        );
    }

    #[test]
    fn alignment_only_moves_x() {
        let left = place_elements(&boxes(), HorizontalAlign::Left, 1.0).unwrap();
        let center = place_elements(&boxes(), HorizontalAlign::Center, 1.0).unwrap();
        let right = place_elements(&boxes(), HorizontalAlign::Right, 1.0).unwrap();
        assert_eq!(left.shift.x, -10.0);
        assert_eq!(center.shift.x, 0.0);
        assert_eq!(right.shift.x, 10.0);
        for p in [&left, &right] {
            assert_eq!(p.total, center.total);
            assert_eq!(p.offsets, center.offsets);
            assert_eq!(p.shift.y, center.shift.y);
        }
    }

    #[test]
    fn offsets_are_stable_when_elements_are_appended() {
        let all = place_elements(&boxes(), HorizontalAlign::Left, 0.5).unwrap();
        for k in 1..boxes().len() {
            let prefix = place_elements(&boxes()[..k], HorizontalAlign::Left, 0.5).unwrap();
            assert_eq!(prefix.offsets[..], all.offsets[..k]);
        }
    }

    #[test]
    fn single_element_sits_on_the_origin_vertically() {
        let p = place_elements(&boxes()[..1], HorizontalAlign::Center, 0.5).unwrap();
        assert_eq!(p.positions(), vec![vec3(0.0, 0.0, 0.0)]);
    }

    #[test]
    fn empty_stack_and_negative_spacing_are_rejected() {
        assert!(matches!(
            place_elements(&[], HorizontalAlign::Left, 0.5),
            Err(Error::EmptyInput { what: "elements" })
        ));
        assert!(matches!(
            place_elements(&boxes(), HorizontalAlign::Left, -1.0),
            Err(Error::InvalidParameter { name: "spacing", .. })
        ));
    }

    #[test]
    fn block_layout_total_matches_block_boundary() {
        let metrics = TableMetrics::default();
        let lines = ["Lorem ipsum", "dolor", "sit amet"];
        let layout =
            place_block(&metrics, &lines, &sans(), 0.5, HorizontalAlign::Right).unwrap();
        assert_eq!(
            layout.bounds(),
            block_boundary(&metrics, &lines, &sans(), 0.5).unwrap()
        );
        assert_eq!(layout.lines.len(), 3);
        assert_eq!(layout.placement.shift.x, layout.bounds().width / 2.0);
    }

    #[test]
    fn section_layout_total_matches_section_boundary() {
        let metrics = TableMetrics::default();
        let sections = vec![
            Section::new(Block::new(["Title"]), 20.0),
            Section::new(Block::new(["body line one", "body line two"]), 10.0),
        ];
        let layout =
            place_sections(&metrics, &sections, &sans(), 0.5, HorizontalAlign::Left).unwrap();
        let direct = section_boundary(&metrics, &sections, &sans(), 0.5).unwrap();
        assert_eq!(layout.bounds(), direct.total);
        let inner = layout.sections.iter().map(BlockLayout::bounds).collect::<Vec<_>>();
        assert_eq!(inner, direct.sections);
        for section in &layout.sections {
            assert_eq!(section.placement.shift.x, 0.0);
        }
    }
}
