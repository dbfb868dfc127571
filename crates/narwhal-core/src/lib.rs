#![forbid(unsafe_code)]

//! Bounding boxes and attachment anchors for 3D text.
//!
//! Every box here comes from externally supplied glyph metrics (see `narwhal-metrics`), never
//! from rendered geometry. Boxes compose with the max-sum-max rule so that a block built from
//! lines, or a multi-size block built from sections, reports exactly the totals its parts add
//! up to. Everything in this crate is a pure function over value types.

pub mod anchor;
pub mod boundary;
pub mod config;
pub mod error;
pub mod geom;
pub mod placement;
pub mod style;

pub use anchor::{Anchor, BACK, FWD, anchors_from_boundary, find_anchor};
pub use boundary::{
    Block, Section, SectionBoundary, block_boundary, line_boundaries, line_boundary,
    section_boundary,
};
pub use config::TextOptions;
pub use error::{Error, Result};
pub use geom::{BoundingBox, Vec3, reduce_max_sum_max, stack_boxes};
pub use placement::{
    BlockLayout, Placement, SectionLayout, place_block, place_elements, place_sections,
};
pub use style::{HorizontalAlign, TextStyle, WritingDirection};

pub use narwhal_metrics::{FontId, FontStyle, FontTable, MetricsAdapter, TableMetrics};
