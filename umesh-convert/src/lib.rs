//! Static mesh converter
//!
//! Converts a source engine's internal static-mesh representation
//! (per-attribute vertex streams, packed tangent bases, dual-width index
//! buffers, positional material references) into the flattened
//! [`IntermediateMesh`](umesh_core::IntermediateMesh) model from
//! `umesh-core`, applying the engine's LOD-stripping and validation
//! conventions along the way.
//!
//! # Modules
//!
//! - [`source`] - Read-only source mesh model handed in by a deserializer
//! - [`static_mesh`] - The conversion pipeline
//! - [`observer`] - Injectable observability hooks
//! - [`error`] - Typed conversion errors

pub mod error;
pub mod observer;
pub mod source;
pub mod static_mesh;

pub use error::ConvertError;
pub use observer::{ConvertObserver, NullObserver, TracingObserver};
pub use source::{
    SourceBounds, SourceIndexBuffer, SourceLod, SourceMesh, SourceSection, SourceVertexAttr,
    SourceVertexBuffer,
};
pub use static_mesh::{convert, convert_with_observer};
