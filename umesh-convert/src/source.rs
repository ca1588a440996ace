//! Read-only view of a source engine static mesh
//!
//! These types mirror the object graph an asset deserializer hands to
//! [`convert`](crate::convert): separately stored per-attribute streams,
//! dual-width index storage, and positional material references. The
//! converter never mutates them, so one `SourceMesh` may be shared across
//! concurrent conversions.

use glam::Vec3;
use umesh_core::{Color, MaterialRef, MeshUv, PackedNormal};

/// Source mesh bounds as stored in the asset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SourceBounds {
    pub origin: Vec3,
    pub box_extent: Vec3,
    pub sphere_radius: f32,
}

/// A deserialized source static mesh.
#[derive(Debug, Clone, Default)]
pub struct SourceMesh {
    pub bounds: SourceBounds,
    /// LODs ordered finest to coarsest. Must be non-empty.
    pub lods: Vec<SourceLod>,
    /// Materials referenced positionally by section `material_index`.
    pub materials: Vec<MaterialRef>,
}

/// One source level of detail with its separately stored streams.
///
/// The deserializer guarantees the attribute stream length matches the
/// position stream length; the converter does not re-validate that.
#[derive(Debug, Clone, Default)]
pub struct SourceLod {
    /// Vertex positions; the length defines the LOD's vertex count.
    pub positions: Vec<Vec3>,
    pub vertex_buffer: SourceVertexBuffer,
    /// RGBA8 colors; empty when the asset carries none.
    pub colors: Vec<Color>,
    pub sections: Vec<SourceSection>,
    pub indices: SourceIndexBuffer,
}

/// Per-vertex attribute stream: packed tangent basis plus UV channels.
#[derive(Debug, Clone, Default)]
pub struct SourceVertexBuffer {
    /// UV channels per vertex, as recorded in the asset header.
    pub num_tex_coords: usize,
    pub attrs: Vec<SourceVertexAttr>,
}

/// Attributes for a single vertex.
#[derive(Debug, Clone, Default)]
pub struct SourceVertexAttr {
    pub normal: PackedNormal,
    pub tangent: PackedNormal,
    /// One entry per UV channel.
    pub uv: Vec<MeshUv>,
}

/// Triangle run referencing one material by position.
///
/// `material_index` is signed: engines use -1 for "no material", and any
/// out-of-range value resolves to an unbound section rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceSection {
    pub material_index: i32,
    pub first_index: u32,
    pub num_triangles: u32,
}

/// Dual-width index storage. A well-formed asset populates at most one arm.
#[derive(Debug, Clone, Default)]
pub struct SourceIndexBuffer {
    pub indices16: Vec<u16>,
    pub indices32: Vec<u32>,
}
