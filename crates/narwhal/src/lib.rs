#![forbid(unsafe_code)]

//! `narwhal` computes attachable 3D bounding geometry for typeset text.
//!
//! Boxes come from glyph metrics tables rather than rendered geometry, so two blocks computed
//! independently join edge-to-edge exactly. This crate re-exports the boundary engine
//! (`narwhal-core`) and the metrics tables (`narwhal-metrics`), and adds the hand-off to a
//! geometry backend and attachment framework in [`attach`].

pub use narwhal_core::*;

pub mod metrics {
    pub use narwhal_metrics::{
        EM_PER_SIZE, FontMetrics, FontTable, GlyphExtents, GlyphMetrics, GlyphSample, InkBounds,
        RecordedRun,
    };
}

pub mod attach;

pub use attach::{
    Attachable, GeometryBackend, TextRequest, attach_block, attach_sections, attach_text,
};
