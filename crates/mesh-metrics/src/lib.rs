//! Geometric quantities of a triangle soup: surface area, enclosed volume,
//! bounds and edge usage.
//!
//! All sums are a single pass over the triangles, accumulated in f64, and do
//! not depend on triangle order.

use std::collections::HashMap;

use challenge_types::{EdgeCounts, GeometryMetrics, MeshGeometry, Triangle};
use tracing::{debug, instrument};

/// Compute surface area and volume in one pass.
#[instrument(skip(mesh), fields(triangles = mesh.len()))]
pub fn evaluate(mesh: &MeshGeometry) -> GeometryMetrics {
    let mut area = 0.0f64;
    let mut signed = 0.0f64;
    for tri in mesh {
        area += triangle_area(tri);
        signed += signed_tetra_volume(tri);
    }
    let metrics = GeometryMetrics {
        surface_area: area,
        volume: signed.abs(),
    };
    debug!(
        surface_area = metrics.surface_area,
        volume = metrics.volume,
        "evaluated mesh geometry"
    );
    metrics
}

/// Total surface area: Σ ½‖(v1−v0)×(v2−v0)‖.
pub fn surface_area(mesh: &MeshGeometry) -> f64 {
    mesh.iter().map(triangle_area).sum()
}

/// Signed volume of the tetrahedral decomposition about the origin.
///
/// For a closed, consistently wound mesh this is ± the enclosed volume; the
/// sign follows the winding. For open meshes the value is not meaningful.
pub fn signed_volume(mesh: &MeshGeometry) -> f64 {
    mesh.iter().map(signed_tetra_volume).sum()
}

/// Enclosed volume, `|signed_volume|`.
pub fn volume(mesh: &MeshGeometry) -> f64 {
    signed_volume(mesh).abs()
}

/// Area of one triangle. Zero for degenerate triangles.
pub fn triangle_area(tri: &Triangle) -> f64 {
    let [v0, v1, v2] = tri.vertices_f64();
    let a = sub(v1, v0);
    let b = sub(v2, v0);
    let c = cross(a, b);
    (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt() / 2.0
}

/// Signed volume of the tetrahedron (origin, v0, v1, v2): v0·(v1×v2) / 6.
pub fn signed_tetra_volume(tri: &Triangle) -> f64 {
    let [v0, v1, v2] = tri.vertices_f64();
    dot(v0, cross(v1, v2)) / 6.0
}

/// Axis-aligned bounding box of all vertices. Returns (min, max), or `None`
/// for an empty mesh.
pub fn bounding_box(mesh: &MeshGeometry) -> Option<([f32; 3], [f32; 3])> {
    if mesh.is_empty() {
        return None;
    }
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for v in mesh.iter().flat_map(|t| t.vertices.iter()) {
        for i in 0..3 {
            min[i] = min[i].min(v[i]);
            max[i] = max[i].max(v[i]);
        }
    }
    Some((min, max))
}

/// Count undirected edges and boundary edges.
///
/// STL stores every triangle with its own copy of each vertex, so vertices
/// are welded by exact bit pattern first. A boundary edge is used by exactly
/// one triangle; a watertight mesh has none. Degenerate edges (both ends the
/// same welded vertex) are skipped.
pub fn count_edges(mesh: &MeshGeometry) -> EdgeCounts {
    let mut vertex_ids: HashMap<[u32; 3], u32> = HashMap::new();
    let mut edge_counts: HashMap<(u32, u32), usize> = HashMap::new();

    for tri in mesh {
        let ids = tri.vertices.map(|v| {
            // -0.0 and 0.0 are the same point.
            let key = v.map(|c| if c == 0.0 { 0 } else { c.to_bits() });
            let next = vertex_ids.len() as u32;
            *vertex_ids.entry(key).or_insert(next)
        });
        for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
            if a == b {
                continue;
            }
            *edge_counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }

    EdgeCounts {
        total: edge_counts.len(),
        boundary: edge_counts.values().filter(|&&c| c == 1).count(),
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
