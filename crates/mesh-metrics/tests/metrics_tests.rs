//! Area, volume and edge statistics on small closed and open meshes.

use approx::assert_relative_eq;
use challenge_types::{MeshGeometry, Triangle};
use mesh_metrics::*;
use proptest::prelude::*;

/// Axis-aligned box with outward winding, 12 triangles.
fn make_box(origin: [f32; 3], size: [f32; 3]) -> MeshGeometry {
    let [ox, oy, oz] = origin;
    let [sx, sy, sz] = size;
    let p = [
        [ox, oy, oz],
        [ox + sx, oy, oz],
        [ox + sx, oy + sy, oz],
        [ox, oy + sy, oz],
        [ox, oy, oz + sz],
        [ox + sx, oy, oz + sz],
        [ox + sx, oy + sy, oz + sz],
        [ox, oy + sy, oz + sz],
    ];
    let faces: [[usize; 3]; 12] = [
        [0, 2, 1], [0, 3, 2], // bottom
        [4, 5, 6], [4, 6, 7], // top
        [0, 1, 5], [0, 5, 4], // front
        [2, 3, 7], [2, 7, 6], // back
        [0, 4, 7], [0, 7, 3], // left
        [1, 2, 6], [1, 6, 5], // right
    ];
    faces
        .iter()
        .map(|f| Triangle::from_vertices(p[f[0]], p[f[1]], p[f[2]]))
        .collect()
}

fn unit_cube() -> MeshGeometry {
    make_box([0.0; 3], [1.0; 3])
}

#[test]
fn unit_cube_area_and_volume() {
    let metrics = evaluate(&unit_cube());
    assert_relative_eq!(metrics.surface_area, 6.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.volume, 1.0, epsilon = 1e-12);
    assert_relative_eq!(signed_volume(&unit_cube()), 1.0, epsilon = 1e-12);
}

#[test]
fn evaluate_matches_separate_passes() {
    let mesh = make_box([1.5, -2.0, 3.0], [4.0, 5.0, 6.0]);
    let metrics = evaluate(&mesh);
    assert_relative_eq!(metrics.surface_area, surface_area(&mesh), epsilon = 1e-9);
    assert_relative_eq!(metrics.volume, volume(&mesh), epsilon = 1e-9);
    assert_relative_eq!(metrics.surface_area, 2.0 * (20.0 + 24.0 + 30.0), epsilon = 1e-6);
    assert_relative_eq!(metrics.volume, 120.0, epsilon = 1e-6);
}

#[test]
fn reversed_winding_flips_sign_not_volume() {
    let flipped: MeshGeometry = unit_cube()
        .iter()
        .map(|t| Triangle::from_vertices(t.vertices[0], t.vertices[2], t.vertices[1]))
        .collect();
    assert_relative_eq!(signed_volume(&flipped), -1.0, epsilon = 1e-12);
    assert_relative_eq!(volume(&flipped), 1.0, epsilon = 1e-12);
}

#[test]
fn closed_box_volume_does_not_depend_on_position() {
    let near = evaluate(&make_box([0.0; 3], [2.0, 3.0, 4.0]));
    let far = evaluate(&make_box([100.0, -50.0, 25.0], [2.0, 3.0, 4.0]));
    assert_relative_eq!(near.volume, far.volume, max_relative = 1e-6);
    assert_relative_eq!(near.surface_area, far.surface_area, max_relative = 1e-6);
}

#[test]
fn cube_is_watertight() {
    let edges = count_edges(&unit_cube());
    // 12 cube edges + 6 face diagonals
    assert_eq!(edges.total, 18);
    assert_eq!(edges.boundary, 0);
    assert!(edges.is_watertight());
}

#[test]
fn open_box_has_boundary_edges() {
    let mut mesh = unit_cube();
    mesh.triangles.truncate(10); // drop the right face
    let edges = count_edges(&mesh);
    assert_eq!(edges.boundary, 4);
    assert!(!edges.is_watertight());
}

#[test]
fn bounding_box_of_offset_box() {
    let mesh = make_box([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
    let (min, max) = bounding_box(&mesh).unwrap();
    assert_eq!(min, [1.0, 2.0, 3.0]);
    assert_eq!(max, [5.0, 7.0, 9.0]);
}

fn arb_triangle() -> impl Strategy<Value = Triangle> {
    proptest::array::uniform9(-100.0f32..100.0).prop_map(|c| {
        Triangle::from_vertices([c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]])
    })
}

proptest! {
    #[test]
    fn metrics_ignore_triangle_order(
        triangles in proptest::collection::vec(arb_triangle(), 1..60),
        rotate_by in 0usize..60,
    ) {
        let original = MeshGeometry::new(triangles.clone());
        let mut shuffled = triangles;
        let n = shuffled.len();
        shuffled.rotate_left(rotate_by % n);
        shuffled.reverse();
        let shuffled = MeshGeometry::new(shuffled);

        let a = evaluate(&original);
        let b = evaluate(&shuffled);
        let area_tol = 1e-9 * a.surface_area.max(1.0);
        prop_assert!((a.surface_area - b.surface_area).abs() <= area_tol);
        let vol_scale: f64 = original.iter().map(|t| signed_tetra_volume(t).abs()).sum();
        prop_assert!((a.volume - b.volume).abs() <= 1e-9 * vol_scale.max(1.0));
    }

    #[test]
    fn degenerate_triangles_change_nothing(
        triangles in proptest::collection::vec(arb_triangle(), 0..30),
        (x, y, z) in (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0),
    ) {
        let base = evaluate(&MeshGeometry::new(triangles.clone()));
        let mut padded = triangles;
        padded.push(Triangle::from_vertices([x, y, z], [x, y, z], [x, y, z]));
        let with_degenerate = evaluate(&MeshGeometry::new(padded));
        prop_assert_eq!(base, with_degenerate);
    }

    #[test]
    fn metrics_are_non_negative(triangles in proptest::collection::vec(arb_triangle(), 0..30)) {
        let metrics = evaluate(&MeshGeometry::new(triangles));
        prop_assert!(metrics.surface_area >= 0.0);
        prop_assert!(metrics.volume >= 0.0);
    }
}
