use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Vec3 = euclid::Vector3D<f64, Unit>;

pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    euclid::vec3(x, y, z)
}

/// Axis-aligned extent of a text element, centered on its local origin.
///
/// `width` runs along X, `depth` along Y (the direction lines stack in) and `height` along Z
/// (extrusion thickness).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Places `other` after `self` in the same lane: widest width, summed depth, thickest height.
    pub fn stack(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            depth: self.depth + other.depth,
            height: self.height.max(other.height),
        }
    }

    pub fn with_extra_depth(self, extra: f64) -> Self {
        Self {
            depth: self.depth + extra,
            ..self
        }
    }

    pub fn to_vector(self) -> Vec3 {
        vec3(self.width, self.depth, self.height)
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.depth > 0.0 && self.height > 0.0
    }
}

/// Max-sum-max reduction: `(max width, sum depth, max height)`.
pub fn reduce_max_sum_max(boxes: &[BoundingBox]) -> Result<BoundingBox> {
    boxes
        .iter()
        .copied()
        .reduce(BoundingBox::stack)
        .ok_or(Error::EmptyInput { what: "boxes" })
}

/// Reduces `boxes` and adds `spacing` between each consecutive pair.
pub fn stack_boxes(boxes: &[BoundingBox], spacing: f64) -> Result<BoundingBox> {
    let total = reduce_max_sum_max(boxes)?;
    let gaps = (boxes.len() - 1) as f64;
    Ok(total.with_extra_depth(spacing * gaps))
}

/// Depth consumed before each element: `sum(depth[0..i]) + spacing * i`.
///
/// Entry `i` only looks at elements before it, so appending boxes never changes earlier
/// entries.
pub fn prefix_depths(boxes: &[BoundingBox], spacing: f64) -> Vec<f64> {
    boxes
        .iter()
        .enumerate()
        .scan(0.0, |consumed, (i, b)| {
            let prefix = *consumed + spacing * i as f64;
            *consumed += b.depth;
            Some(prefix)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<BoundingBox> {
        vec![
            BoundingBox::new(10.0, 2.0, 1.0),
            BoundingBox::new(4.0, 3.5, 2.0),
            BoundingBox::new(7.5, 1.25, 0.5),
        ]
    }

    #[test]
    fn reduce_takes_max_width_sum_depth_max_height() {
        let b = reduce_max_sum_max(&boxes()).unwrap();
        assert_eq!(b, BoundingBox::new(10.0, 6.75, 2.0));
    }

    #[test]
    fn reduce_is_order_independent() {
        let mut reversed = boxes();
        reversed.reverse();
        assert_eq!(
            reduce_max_sum_max(&reversed).unwrap(),
            reduce_max_sum_max(&boxes()).unwrap()
        );
    }

    #[test]
    fn reduce_rejects_empty_input() {
        assert!(matches!(
            reduce_max_sum_max(&[]),
            Err(Error::EmptyInput { what: "boxes" })
        ));
    }

    #[test]
    fn stack_adds_spacing_between_elements_only() {
        let single = stack_boxes(&boxes()[..1], 0.5).unwrap();
        assert_eq!(single, boxes()[0]);
        let all = stack_boxes(&boxes(), 0.5).unwrap();
        assert_eq!(all.depth, 6.75 + 1.0);
    }

    #[test]
    fn prefix_depths_are_stable_under_append() {
        let all = prefix_depths(&boxes(), 0.5);
        assert_eq!(all, vec![0.0, 2.5, 6.5]);
        assert_eq!(prefix_depths(&boxes()[..2], 0.5), all[..2]);
    }
}
