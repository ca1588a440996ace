//! Bounding volumes for converted meshes

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Box spanning `origin - extent` to `origin + extent`.
    #[inline]
    pub fn from_origin_extent(origin: Vec3, extent: Vec3) -> Self {
        Self {
            min: origin - extent,
            max: origin + extent,
        }
    }
}

/// Bounding sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}
