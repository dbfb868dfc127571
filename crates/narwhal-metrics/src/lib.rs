#![forbid(unsafe_code)]

//! Table-driven glyph metrics for `narwhal`.
//!
//! Text is never rasterized or shaped here. A [`FontTable`] holds per-glyph advances and ink
//! bounds for a fixed set of faces, and [`TableMetrics`] turns a string into the
//! origin/extent pair that the boundary engine in `narwhal-core` consumes.

pub mod adapter;
pub mod error;
pub mod font;
pub mod geom;
pub mod table;

mod embedded;
mod generated;

pub use adapter::{EM_PER_SIZE, GlyphExtents, MetricsAdapter, TableMetrics};
pub use error::{Error, Result};
pub use font::{FontId, FontStyle};
pub use table::{FontMetrics, FontTable, GlyphMetrics, GlyphSample, InkBounds, RecordedRun};
