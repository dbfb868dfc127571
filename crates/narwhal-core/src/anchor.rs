//! Named attachment frames on a text box.
//!
//! Six anchors sit on the front and back faces of the box, at its left edge, center and right
//! edge. Front anchors face `FWD` with no spin; back anchors face `BACK` and are spun half a
//! turn so that text attached there reads the right way up from behind.

use crate::geom::{BoundingBox, Vec3, vec3};

pub const FWD: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const BACK: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub name: &'static str,
    /// Position relative to the box center.
    pub offset: Vec3,
    pub facing: Vec3,
    /// Spin about `facing`, in degrees.
    pub spin: f64,
}

pub const ANCHOR_NAMES: [&str; 6] = [
    "text-left-back",
    "text-left-fwd",
    "text-center-back",
    "text-center-fwd",
    "text-right-back",
    "text-right-fwd",
];

pub fn anchors_from_boundary(b: BoundingBox) -> [Anchor; 6] {
    let (w, d) = (b.width / 2.0, b.depth / 2.0);
    let back = |name, x| Anchor {
        name,
        offset: vec3(x, d, 0.0),
        facing: BACK,
        spin: 180.0,
    };
    let fwd = |name, x| Anchor {
        name,
        offset: vec3(x, -d, 0.0),
        facing: FWD,
        spin: 0.0,
    };
    [
        back(ANCHOR_NAMES[0], -w),
        fwd(ANCHOR_NAMES[1], -w),
        back(ANCHOR_NAMES[2], 0.0),
        fwd(ANCHOR_NAMES[3], 0.0),
        back(ANCHOR_NAMES[4], w),
        fwd(ANCHOR_NAMES[5], w),
    ]
}

pub fn find_anchor<'a>(anchors: &'a [Anchor], name: &str) -> Option<&'a Anchor> {
    anchors.iter().find(|a| a.name == name)
}
