//! Converter error types

use thiserror::Error;
use umesh_core::MAX_MESH_UV_SETS;

/// Fatal conversion failure.
///
/// Conversion is atomic: on error no intermediate mesh is produced, not
/// even for LODs already processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// A LOD declares more UV channels than the converter supports.
    #[error("static mesh LOD {lod} has too many UV sets ({count}, max {MAX_MESH_UV_SETS})")]
    TooManyUvSets { lod: usize, count: usize },
}
