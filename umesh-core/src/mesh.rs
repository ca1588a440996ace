//! Intermediate mesh model
//!
//! Engine-agnostic output of static-mesh conversion: bounds plus an ordered
//! list of LODs, each holding unified vertices, resolved sections, and
//! triangle indices at whichever width the source stored natively.
//!
//! LODs are built through [`LodBuilder`] so no half-initialized LOD is ever
//! observable: storage is allocated fully sized up front, every slot is
//! filled, and only then does `finish` seal the value.

use crate::bounds::{BoundingBox, BoundingSphere};
use crate::vertex::{Color, MeshUv, UnifiedVertex};

/// Maximum number of UV channels a LOD may carry.
pub const MAX_MESH_UV_SETS: usize = 8;

/// Cheap engine-agnostic material handle, referenced by sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRef {
    pub name: String,
}

impl MaterialRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A contiguous run of triangles sharing one material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSection {
    /// Resolved material, or `None` when the source index was out of range.
    pub material: Option<MaterialRef>,
    /// Offset of the section's first index in the LOD index buffer.
    pub first_index: u32,
    pub num_triangles: u32,
}

/// Triangle indices at whichever width the source stored natively.
///
/// Conversion performs no promotion or demotion; consumers must accept
/// either arm. An empty LOD normalizes to an empty 16-bit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexBuffer {
    pub fn len(&self) -> usize {
        match self {
            Self::U16(indices) => indices.len(),
            Self::U32(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IndexBuffer {
    fn default() -> Self {
        Self::U16(Vec::new())
    }
}

/// One converted level of detail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntermediateLod {
    pub num_verts: usize,
    /// UV channels per vertex, at most [`MAX_MESH_UV_SETS`].
    pub num_tex_coords: usize,
    pub has_normals: bool,
    pub has_tangents: bool,
    pub verts: Vec<UnifiedVertex>,
    /// UV channels beyond the first, indexed `[channel - 1][vertex]`.
    /// Both dimensions are sized once, at allocation time.
    pub extra_uv: Vec<Vec<MeshUv>>,
    /// Per-vertex colors; `None` when the source LOD carried no color
    /// stream. When present the length equals `num_verts`, never partial.
    pub vertex_colors: Option<Vec<Color>>,
    /// Sections in source order with untouched index ranges.
    pub sections: Vec<MeshSection>,
    pub indices: IndexBuffer,
}

impl IntermediateLod {
    /// UV pair for `channel` at `vertex`: channel 0 reads the vertex
    /// record, higher channels read the side table.
    pub fn uv(&self, channel: usize, vertex: usize) -> Option<MeshUv> {
        if channel == 0 {
            self.verts.get(vertex).map(|v| v.uv)
        } else {
            self.extra_uv
                .get(channel - 1)
                .and_then(|row| row.get(vertex))
                .copied()
        }
    }
}

/// Converted mesh: bounds plus the kept LODs, finest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntermediateMesh {
    pub bounding_sphere: BoundingSphere,
    pub bounding_box: BoundingBox,
    pub lods: Vec<IntermediateLod>,
}

/// Two-phase LOD construction: allocate fully-sized default storage, fill
/// every slot, then [`finish`](Self::finish).
///
/// The vertex array, the extra-UV side table, and (when enabled) the color
/// array are all sized exactly at construction; filling never reallocates.
#[derive(Debug)]
pub struct LodBuilder {
    num_verts: usize,
    num_tex_coords: usize,
    verts: Vec<UnifiedVertex>,
    extra_uv: Vec<Vec<MeshUv>>,
    vertex_colors: Option<Vec<Color>>,
}

impl LodBuilder {
    /// Allocate storage for `num_verts` vertices with `num_tex_coords` UV
    /// channels. The side table gets one row per channel beyond the first.
    pub fn new(num_verts: usize, num_tex_coords: usize) -> Self {
        let side_channels = num_tex_coords.saturating_sub(1);
        Self {
            num_verts,
            num_tex_coords,
            verts: vec![UnifiedVertex::default(); num_verts],
            extra_uv: vec![vec![MeshUv::default(); num_verts]; side_channels],
            vertex_colors: None,
        }
    }

    /// Enable the per-vertex color array. All-or-nothing per LOD: decided
    /// once before filling starts, sized to the full vertex count.
    pub fn with_vertex_colors(mut self) -> Self {
        self.vertex_colors = Some(vec![Color::default(); self.num_verts]);
        self
    }

    pub fn set_vertex(&mut self, index: usize, vertex: UnifiedVertex) {
        self.verts[index] = vertex;
    }

    /// Write a UV pair for `channel` (>= 1) into the side table.
    pub fn set_extra_uv(&mut self, channel: usize, index: usize, uv: MeshUv) {
        self.extra_uv[channel - 1][index] = uv;
    }

    /// Write a vertex color. No-op unless colors were enabled.
    pub fn set_vertex_color(&mut self, index: usize, color: Color) {
        if let Some(colors) = &mut self.vertex_colors {
            colors[index] = color;
        }
    }

    /// Attach sections and indices and seal the LOD.
    pub fn finish(self, sections: Vec<MeshSection>, indices: IndexBuffer) -> IntermediateLod {
        IntermediateLod {
            num_verts: self.num_verts,
            num_tex_coords: self.num_tex_coords,
            // Static meshes always carry both a normal and a tangent.
            has_normals: true,
            has_tangents: true,
            verts: self.verts,
            extra_uv: self.extra_uv,
            vertex_colors: self.vertex_colors,
            sections,
            indices,
        }
    }
}
