//! Integration tests for umesh-convert
//!
//! Builds source meshes in memory, runs the full conversion, and verifies
//! the intermediate mesh against the converter's contract.

use std::cell::{Cell, RefCell};

use glam::Vec3;
use umesh_convert::{
    convert, convert_with_observer, ConvertError, ConvertObserver, SourceBounds,
    SourceIndexBuffer, SourceLod, SourceMesh, SourceSection, SourceVertexAttr, SourceVertexBuffer,
};
use umesh_core::{Color, IndexBuffer, MaterialRef, MeshUv, PackedNormal};

/// Source LOD with `num_verts` vertices and `num_tex_coords` UV channels.
///
/// Channel `c` of vertex `i` gets UV `(i + 10 * c, 0.5)` so every (channel,
/// vertex) cell is distinguishable. Indices are a 16-bit identity sequence.
fn make_lod(num_verts: usize, num_tex_coords: usize) -> SourceLod {
    let attrs = (0..num_verts)
        .map(|i| SourceVertexAttr {
            normal: PackedNormal::encode(Vec3::Z),
            tangent: PackedNormal::encode(Vec3::X),
            uv: (0..num_tex_coords)
                .map(|c| MeshUv::new(i as f32 + 10.0 * c as f32, 0.5))
                .collect(),
        })
        .collect();

    let sections = if num_verts == 0 {
        Vec::new()
    } else {
        vec![SourceSection {
            material_index: 0,
            first_index: 0,
            num_triangles: num_verts as u32 / 3,
        }]
    };

    SourceLod {
        positions: (0..num_verts)
            .map(|i| Vec3::new(i as f32, 2.0 * i as f32, -1.0))
            .collect(),
        vertex_buffer: SourceVertexBuffer {
            num_tex_coords,
            attrs,
        },
        colors: Vec::new(),
        sections,
        indices: SourceIndexBuffer {
            indices16: (0..num_verts as u16).collect(),
            indices32: Vec::new(),
        },
    }
}

fn make_mesh(lods: Vec<SourceLod>) -> SourceMesh {
    SourceMesh {
        bounds: SourceBounds {
            origin: Vec3::new(1.0, 2.0, 3.0),
            box_extent: Vec3::new(4.0, 5.0, 6.0),
            sphere_radius: 10.0,
        },
        lods,
        materials: vec![MaterialRef::new("mat_a"), MaterialRef::new("mat_b")],
    }
}

#[test]
fn test_interior_stripped_lod_is_omitted() {
    // 3 LODs, the middle one a geometry-less placeholder
    let mesh = make_mesh(vec![make_lod(6, 1), make_lod(0, 0), make_lod(3, 1)]);
    let out = convert(&mesh).expect("conversion should succeed");

    assert_eq!(out.lods.len(), 2, "placeholder LOD must be omitted");
    assert_eq!(out.lods[0].num_verts, 6);
    assert_eq!(out.lods[1].num_verts, 3);
}

#[test]
fn test_final_empty_lod_is_kept() {
    // The coarsest LOD is never stripped, even with no geometry
    let mesh = make_mesh(vec![make_lod(100, 2), make_lod(0, 0)]);
    let out = convert(&mesh).expect("conversion should succeed");

    assert_eq!(out.lods.len(), 2);
    let last = &out.lods[1];
    assert_eq!(last.num_verts, 0);
    assert!(last.verts.is_empty());
    assert!(last.sections.is_empty());
    assert!(last.indices.is_empty());
}

#[test]
fn test_too_many_uv_sets_fails_atomically() {
    // Second LOD exceeds the UV-set limit; the valid first LOD must not leak
    let mesh = make_mesh(vec![make_lod(3, 1), make_lod(3, 9)]);
    let err = convert(&mesh).expect_err("conversion should fail");
    assert_eq!(err, ConvertError::TooManyUvSets { lod: 1, count: 9 });
}

#[test]
fn test_vertex_count_and_positions_preserved() {
    let mesh = make_mesh(vec![make_lod(7, 1)]);
    let out = convert(&mesh).expect("conversion should succeed");

    let lod = &out.lods[0];
    assert_eq!(lod.verts.len(), 7);
    for (i, vertex) in lod.verts.iter().enumerate() {
        assert_eq!(vertex.position.x, i as f32);
        assert_eq!(vertex.position.y, 2.0 * i as f32);
        assert_eq!(vertex.position.z, -1.0);
        assert_eq!(vertex.position.w, 1.0, "w sentinel");
    }
}

#[test]
fn test_primary_uv_unchanged() {
    let mesh = make_mesh(vec![make_lod(5, 3)]);
    let out = convert(&mesh).expect("conversion should succeed");

    for (i, vertex) in out.lods[0].verts.iter().enumerate() {
        assert_eq!(vertex.uv, MeshUv::new(i as f32, 0.5));
    }
}

#[test]
fn test_extra_uv_channels_land_in_side_table() {
    let mesh = make_mesh(vec![make_lod(5, 3)]);
    let out = convert(&mesh).expect("conversion should succeed");

    let lod = &out.lods[0];
    assert_eq!(lod.num_tex_coords, 3);
    assert_eq!(lod.extra_uv.len(), 2);
    for channel in 1..3 {
        for i in 0..5 {
            let expected = MeshUv::new(i as f32 + 10.0 * channel as f32, 0.5);
            assert_eq!(lod.extra_uv[channel - 1][i], expected);
            assert_eq!(lod.uv(channel, i), Some(expected));
        }
    }
}

#[test]
fn test_normals_and_tangents_decoded() {
    let mesh = make_mesh(vec![make_lod(3, 1)]);
    let out = convert(&mesh).expect("conversion should succeed");

    let lod = &out.lods[0];
    assert!(lod.has_normals);
    assert!(lod.has_tangents);
    let step = 1.0 / 127.5;
    for vertex in &lod.verts {
        assert!((vertex.normal - Vec3::Z).abs().max_element() <= step);
        assert!((vertex.tangent - Vec3::X).abs().max_element() <= step);
    }
}

#[test]
fn test_vertex_colors_absent_without_source_stream() {
    let mesh = make_mesh(vec![make_lod(4, 1)]);
    let out = convert(&mesh).expect("conversion should succeed");
    assert!(out.lods[0].vertex_colors.is_none());
}

#[test]
fn test_vertex_colors_copied_verbatim() {
    let mut lod = make_lod(4, 1);
    lod.colors = (0..4).map(|i| Color::new(i, 2 * i, 3 * i, 255)).collect();
    let out = convert(&make_mesh(vec![lod])).expect("conversion should succeed");

    let colors = out.lods[0]
        .vertex_colors
        .as_ref()
        .expect("color stream present in source");
    assert_eq!(colors.len(), 4);
    for (i, color) in colors.iter().enumerate() {
        let i = i as u8;
        assert_eq!(*color, Color::new(i, 2 * i, 3 * i, 255));
    }
}

#[test]
fn test_index_width_preserved() {
    let mut wide = make_lod(3, 1);
    wide.indices = SourceIndexBuffer {
        indices16: Vec::new(),
        indices32: vec![0, 1, 2],
    };
    let mesh = make_mesh(vec![make_lod(3, 1), wide]);
    let out = convert(&mesh).expect("conversion should succeed");

    assert_eq!(out.lods[0].indices, IndexBuffer::U16(vec![0, 1, 2]));
    assert_eq!(out.lods[1].indices, IndexBuffer::U32(vec![0, 1, 2]));
}

#[test]
fn test_bounds_conversion() {
    let mesh = make_mesh(vec![make_lod(3, 1)]);
    let out = convert(&mesh).expect("conversion should succeed");

    assert_eq!(out.bounding_box.min, Vec3::new(-3.0, -3.0, -3.0));
    assert_eq!(out.bounding_box.max, Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(out.bounding_sphere.center, Vec3::ZERO);
    assert_eq!(out.bounding_sphere.radius, 5.0);
}

#[test]
fn test_section_material_resolution() {
    let mut lod = make_lod(9, 1);
    lod.sections = vec![
        SourceSection {
            material_index: 1,
            first_index: 0,
            num_triangles: 1,
        },
        SourceSection {
            material_index: 5,
            first_index: 3,
            num_triangles: 1,
        },
        SourceSection {
            material_index: -1,
            first_index: 6,
            num_triangles: 1,
        },
    ];
    let out = convert(&make_mesh(vec![lod])).expect("conversion should succeed");

    let sections = &out.lods[0].sections;
    assert_eq!(sections.len(), 3, "source order and count preserved");
    assert_eq!(sections[0].material, Some(MaterialRef::new("mat_b")));
    assert_eq!(sections[1].material, None, "out-of-range index is unbound");
    assert_eq!(sections[2].material, None, "negative index is unbound");
    assert_eq!(sections[1].first_index, 3);
    assert_eq!(sections[2].num_triangles, 1);
}

/// Observer counting stripped-LOD and validation events.
#[derive(Default)]
struct CountingObserver {
    stripped: RefCell<Vec<usize>>,
    failures: Cell<usize>,
}

impl ConvertObserver for CountingObserver {
    fn lod_stripped(&self, lod_index: usize) {
        self.stripped.borrow_mut().push(lod_index);
    }

    fn validation_failed(&self, _error: &ConvertError) {
        self.failures.set(self.failures.get() + 1);
    }
}

#[test]
fn test_observer_sees_stripped_lods() {
    let mesh = make_mesh(vec![make_lod(3, 1), make_lod(0, 0), make_lod(0, 0), make_lod(3, 1)]);
    let observer = CountingObserver::default();
    let out = convert_with_observer(&mesh, &observer).expect("conversion should succeed");

    assert_eq!(out.lods.len(), 2);
    assert_eq!(*observer.stripped.borrow(), vec![1, 2]);
    assert_eq!(observer.failures.get(), 0);
}

#[test]
fn test_observer_sees_validation_failure() {
    let mesh = make_mesh(vec![make_lod(3, 9)]);
    let observer = CountingObserver::default();
    convert_with_observer(&mesh, &observer).expect_err("conversion should fail");

    assert_eq!(observer.failures.get(), 1);
    assert!(observer.stripped.borrow().is_empty());
}
