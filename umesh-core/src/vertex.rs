//! Per-vertex record types

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// One 2D texture coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MeshUv {
    pub u: f32,
    pub v: f32,
}

impl MeshUv {
    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// RGBA8 vertex color, carried verbatim from the source color stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Unified vertex record: the merged form of the source engine's separately
/// stored position and attribute streams.
///
/// Only the first UV channel lives on the vertex; additional channels go to
/// the owning LOD's side table (see [`IntermediateLod`](crate::IntermediateLod)).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnifiedVertex {
    /// Position; w is a fixed 1.0 sentinel.
    pub position: Vec4,
    /// Decoded unit normal.
    pub normal: Vec3,
    /// Decoded unit tangent.
    pub tangent: Vec3,
    /// First UV channel.
    pub uv: MeshUv,
}
