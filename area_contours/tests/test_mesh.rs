mod test_utils;

use area_contours::{
    area::{Area, CommitOp},
    core::math::ipt,
    mesh::{EarcutTessellator, MeshBuffers, MeshOptions, Tessellator, UvLayer},
    region::Region,
    RegionError,
};
use test_utils::{framed_rect, rect};

/// Sum of triangle areas projected on the ground plane (x, z).
fn mesh_area(mesh: &MeshBuffers) -> f64 {
    mesh.indices
        .chunks(3)
        .map(|t| {
            let a = mesh.vertices[t[0] as usize];
            let b = mesh.vertices[t[1] as usize];
            let c = mesh.vertices[t[2] as usize];
            let cross = (b[0] - a[0]) as f64 * (c[2] - a[2]) as f64
                - (b[2] - a[2]) as f64 * (c[0] - a[0]) as f64;
            cross.abs() / 2.0
        })
        .sum()
}

#[test]
fn square_is_two_triangles() {
    let mesh = EarcutTessellator
        .tessellate(&rect(0, 0, 10, 10), &MeshOptions::new())
        .unwrap();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.uvs.len(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!((mesh_area(&mesh) - 100.0).abs() < 1e-6);
}

#[test]
fn holes_are_left_open() {
    let r = framed_rect((0, 0, 30, 30), (10, 10, 20, 20));
    let mesh = EarcutTessellator.tessellate(&r, &MeshOptions::new()).unwrap();
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.triangle_count(), 8);
    assert!((mesh_area(&mesh) - 800.0).abs() < 1e-6);
}

#[test]
fn boundary_sets_share_one_buffer() {
    let mut r = rect(0, 0, 10, 10);
    r.append(rect(20, 0, 30, 10));
    let mesh = EarcutTessellator.tessellate(&r, &MeshOptions::new()).unwrap();
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.triangle_count(), 4);
    assert!(mesh.indices[6..].iter().all(|&i| i >= 4));
}

#[test]
fn world_scale_height_and_uvs() {
    let opts = MeshOptions {
        height: 0.5,
        world_scale: 0.1,
        uv: UvLayer {
            size: 10.0,
            offset_x: 0.25,
            offset_y: 0.0,
            layer: 2.0,
        },
    };
    let mesh = EarcutTessellator.tessellate(&rect(0, 0, 10, 20), &opts).unwrap();
    let far = mesh
        .vertices
        .iter()
        .position(|v| v[0] == 1.0 && v[2] == 2.0)
        .unwrap();
    assert_eq!(mesh.vertices[far][1], 0.5);
    assert_eq!(mesh.uvs[far], [1.25, 2.0, 2.0]);
}

#[test]
fn zero_uv_size_is_rejected() {
    let opts = MeshOptions {
        uv: UvLayer::new(0.0),
        ..MeshOptions::new()
    };
    assert!(matches!(
        EarcutTessellator.tessellate(&rect(0, 0, 10, 10), &opts),
        Err(RegionError::InvalidArgument(_))
    ));
}

#[test]
fn empty_region_gives_empty_mesh() {
    let mesh = EarcutTessellator
        .tessellate(&Region::empty(), &MeshOptions::new())
        .unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn area_snapshot_fill_and_outline() {
    let mut area = Area::new(100);
    let empty = area
        .render_snapshot(&EarcutTessellator, 10, &MeshOptions::new())
        .unwrap();
    assert!(empty.fill.is_empty());
    assert!(empty.outline.is_empty());

    area.commit_loop(
        &[ipt(0, 0), ipt(1000, 0), ipt(1000, 1000), ipt(0, 1000)],
        CommitOp::Union,
    )
    .unwrap();
    let meshes = area
        .render_snapshot(&EarcutTessellator, 10, &MeshOptions::new())
        .unwrap();

    assert_eq!(meshes.fill.triangle_count(), 2);
    // world scale is 1 / precision
    assert!((mesh_area(&meshes.fill) - 100.0).abs() < 1e-4);
    assert_eq!(meshes.outline.vertices.len(), 8);
    assert_eq!(meshes.outline.triangle_count(), 8);
    // 10 grid unit strip around a 1000 square, in world units
    assert!((mesh_area(&meshes.outline) - 3.96).abs() < 1e-4);
}
