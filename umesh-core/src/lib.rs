//! Engine-agnostic intermediate mesh model
//!
//! Shared between:
//! - `umesh-convert` (static-mesh conversion)
//! - downstream exporters and viewers consuming converted meshes
//!
//! # Modules
//!
//! - [`packing`] - Fixed-point packed-direction encoding (normals/tangents)
//! - [`bounds`] - Bounding box and sphere types
//! - [`vertex`] - Unified vertex record, UV and color types
//! - [`mesh`] - Intermediate mesh/LOD model and the two-phase LOD builder

pub mod bounds;
pub mod mesh;
pub mod packing;
pub mod vertex;

// Re-export commonly used items
pub use bounds::{BoundingBox, BoundingSphere};
pub use mesh::{
    IndexBuffer, IntermediateLod, IntermediateMesh, LodBuilder, MaterialRef, MeshSection,
    MAX_MESH_UV_SETS,
};
pub use packing::PackedNormal;
pub use vertex::{Color, MeshUv, UnifiedVertex};
