//! Static mesh conversion pipeline
//!
//! Flattens a deserialized source static mesh into an engine-agnostic
//! [`IntermediateMesh`] in one synchronous pass:
//!
//! 1. Bounds conversion
//! 2. LOD selection (interior placeholder LODs are stripped)
//! 3. Section-to-material resolution
//! 4. Vertex assembly (stream merge + packed normal/tangent decode)
//! 5. Index normalization (native width preserved)
//!
//! The pass is fail-atomic: a validation error aborts the whole mesh with
//! no partial output.

use glam::Vec3;
use umesh_core::{
    BoundingBox, BoundingSphere, IndexBuffer, IntermediateLod, IntermediateMesh, LodBuilder,
    MaterialRef, MeshSection, UnifiedVertex, MAX_MESH_UV_SETS,
};

use crate::error::ConvertError;
use crate::observer::{ConvertObserver, TracingObserver};
use crate::source::{SourceBounds, SourceIndexBuffer, SourceLod, SourceMesh};

/// Convert a source static mesh, reporting events through the default
/// tracing-backed observer.
pub fn convert(mesh: &SourceMesh) -> Result<IntermediateMesh, ConvertError> {
    convert_with_observer(mesh, &TracingObserver)
}

/// Convert a source static mesh with an injected observer.
pub fn convert_with_observer(
    mesh: &SourceMesh,
    observer: &dyn ConvertObserver,
) -> Result<IntermediateMesh, ConvertError> {
    let (bounding_sphere, bounding_box) = convert_bounds(&mesh.bounds);

    let lod_count = mesh.lods.len();
    let mut lods = Vec::with_capacity(lod_count);
    for (lod_index, src) in mesh.lods.iter().enumerate() {
        let num_tex_coords = src.vertex_buffer.num_tex_coords;
        let num_verts = src.positions.len();

        // Interior placeholder with no geometry data at all: some packagers
        // leave these behind after LOD stripping. The final LOD is never
        // skipped so at least one LOD survives.
        if num_verts == 0 && num_tex_coords == 0 && lod_index < lod_count - 1 {
            observer.lod_stripped(lod_index);
            continue;
        }

        if num_tex_coords > MAX_MESH_UV_SETS {
            let error = ConvertError::TooManyUvSets {
                lod: lod_index,
                count: num_tex_coords,
            };
            observer.validation_failed(&error);
            return Err(error);
        }

        lods.push(convert_lod(src, &mesh.materials, num_verts, num_tex_coords));
    }

    Ok(IntermediateMesh {
        bounding_sphere,
        bounding_box,
        lods,
    })
}

/// Convert source bounds.
///
/// The previous engine generation stored sphere radii twice as large as the
/// mesh itself; the halving is unverified for the current one. Both the
/// halving and the zero sphere center are kept as-is for compatibility.
fn convert_bounds(bounds: &SourceBounds) -> (BoundingSphere, BoundingBox) {
    let sphere = BoundingSphere {
        center: Vec3::ZERO,
        radius: bounds.sphere_radius / 2.0,
    };
    let bbox = BoundingBox::from_origin_extent(bounds.origin, bounds.box_extent);
    (sphere, bbox)
}

fn convert_lod(
    src: &SourceLod,
    materials: &[MaterialRef],
    num_verts: usize,
    num_tex_coords: usize,
) -> IntermediateLod {
    // Sections keep their source order and index ranges untouched; an
    // out-of-range material index becomes an unbound section, not an error.
    let sections = src
        .sections
        .iter()
        .map(|section| MeshSection {
            material: usize::try_from(section.material_index)
                .ok()
                .and_then(|index| materials.get(index))
                .cloned(),
            first_index: section.first_index,
            num_triangles: section.num_triangles,
        })
        .collect();

    // Color presence is decided once per LOD, before the vertex loop.
    let has_colors = !src.colors.is_empty();
    let mut builder = LodBuilder::new(num_verts, num_tex_coords);
    if has_colors {
        builder = builder.with_vertex_colors();
    }

    for i in 0..num_verts {
        let attr = &src.vertex_buffer.attrs[i];

        builder.set_vertex(
            i,
            UnifiedVertex {
                position: src.positions[i].extend(1.0),
                normal: attr.normal.decode(),
                tangent: attr.tangent.decode(),
                uv: attr.uv.first().copied().unwrap_or_default(),
            },
        );
        for channel in 1..num_tex_coords {
            builder.set_extra_uv(channel, i, attr.uv[channel]);
        }
        if has_colors {
            builder.set_vertex_color(i, src.colors[i]);
        }
    }

    builder.finish(sections, normalize_indices(&src.indices))
}

/// Wrap the LOD's native index storage, preserving its width.
///
/// A populated 32-bit arm wins; an empty LOD normalizes to empty 16-bit
/// indices.
fn normalize_indices(src: &SourceIndexBuffer) -> IndexBuffer {
    if !src.indices32.is_empty() {
        IndexBuffer::U32(src.indices32.clone())
    } else {
        IndexBuffer::U16(src.indices16.clone())
    }
}
