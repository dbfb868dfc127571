//! Hand-off to a solid-geometry backend and an attachment framework.
//!
//! The backend renders each line at its local origin; this module translates the lines to their
//! placed positions, unions them with any host geometry, and returns the assembly together
//! with the box and anchors the attachment framework positions it by.

use narwhal_core::{
    Anchor, Block, BlockLayout, BoundingBox, FontId, HorizontalAlign, MetricsAdapter, Result, Section,
    TextOptions, TextStyle, Vec3, WritingDirection, anchors_from_boundary, find_anchor,
    place_block, place_sections,
};

/// Everything a backend needs to render one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRequest<'a> {
    pub text: &'a str,
    pub font: &'a FontId,
    pub size: f64,
    pub height: f64,
    pub spacing: f64,
    pub halign: HorizontalAlign,
    pub direction: WritingDirection,
    pub language: &'a str,
    pub script: &'a str,
}

pub trait GeometryBackend {
    type Solid;

    /// Renders one line centered on its origin along Y and Z, with X on the `halign` edge.
    fn text(&self, request: &TextRequest<'_>) -> Self::Solid;

    fn translate(&self, solid: Self::Solid, offset: Vec3) -> Self::Solid;

    fn union(&self, parts: Vec<Self::Solid>) -> Self::Solid;

    /// Translucent outline of `bounds`, centered on the origin.
    fn wireframe(&self, bounds: BoundingBox) -> Self::Solid;
}

/// An assembled text solid ready for the attachment framework.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachable<S> {
    pub solid: S,
    pub bounds: BoundingBox,
    pub anchors: [Anchor; 6],
}

impl<S> Attachable<S> {
    pub fn anchor(&self, name: &str) -> Option<&Anchor> {
        find_anchor(&self.anchors, name)
    }

    /// Box size as `(x, y, z)`.
    pub fn size(&self) -> Vec3 {
        self.bounds.to_vector()
    }
}

fn request<'a>(text: &'a str, style: &'a TextStyle, options: &'a TextOptions) -> TextRequest<'a> {
    TextRequest {
        text,
        font: &style.font,
        size: style.size,
        height: style.height,
        spacing: style.spacing,
        halign: options.halign,
        direction: options.direction,
        language: &options.language,
        script: &options.script,
    }
}

fn render_lines<B: GeometryBackend, S: AsRef<str>>(
    backend: &B,
    lines: &[S],
    layout: &BlockLayout,
    style: &TextStyle,
    options: &TextOptions,
) -> Vec<B::Solid> {
    lines
        .iter()
        .zip(layout.placement.positions())
        .map(|(line, at)| {
            let solid = backend.text(&request(line.as_ref(), style, options));
            backend.translate(solid, at)
        })
        .collect()
}

fn assemble<B: GeometryBackend>(
    backend: &B,
    mut parts: Vec<B::Solid>,
    children: Vec<B::Solid>,
    bounds: BoundingBox,
    options: &TextOptions,
) -> Attachable<B::Solid> {
    parts.extend(children);
    if options.debug_bounding {
        parts.push(backend.wireframe(bounds));
    }
    tracing::debug!(?bounds, debug = options.debug_bounding, "assembled text");
    Attachable {
        solid: backend.union(parts),
        bounds,
        anchors: anchors_from_boundary(bounds),
    }
}

/// Renders `text`, one line per `\n`-separated segment.
pub fn attach_text<B: GeometryBackend>(
    metrics: &dyn MetricsAdapter,
    backend: &B,
    text: &str,
    options: &TextOptions,
    children: Vec<B::Solid>,
) -> Result<Attachable<B::Solid>> {
    let block = Block::from_text(text);
    attach_block(metrics, backend, &block.lines, options, children)
}

/// Renders lines stacked top to bottom in one style.
pub fn attach_block<B: GeometryBackend, S: AsRef<str>>(
    metrics: &dyn MetricsAdapter,
    backend: &B,
    lines: &[S],
    options: &TextOptions,
    children: Vec<B::Solid>,
) -> Result<Attachable<B::Solid>> {
    let style = options.style()?;
    let layout = place_block(metrics, lines, &style, options.line_spacing, options.halign)?;
    let parts = render_lines(backend, lines, &layout, &style, options);
    Ok(assemble(backend, parts, children, layout.bounds(), options))
}

/// Renders sections of differing sizes stacked top to bottom. `options.size` is ignored.
pub fn attach_sections<B: GeometryBackend>(
    metrics: &dyn MetricsAdapter,
    backend: &B,
    sections: &[Section],
    options: &TextOptions,
    children: Vec<B::Solid>,
) -> Result<Attachable<B::Solid>> {
    let style = options.style()?;
    let layout = place_sections(metrics, sections, &style, options.line_spacing, options.halign)?;
    let parts = sections
        .iter()
        .zip(&layout.sections)
        .zip(layout.placement.positions())
        .map(|((section, inner), at)| {
            let section_style = style.with_size(section.size);
            let lines = render_lines(backend, &section.block.lines, inner, &section_style, options);
            backend.translate(backend.union(lines), at)
        })
        .collect::<Vec<_>>();
    Ok(assemble(backend, parts, children, layout.bounds(), options))
}
