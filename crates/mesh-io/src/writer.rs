use challenge_types::{MeshGeometry, Triangle};

use crate::reader::{HEADER_LEN, PREAMBLE_LEN, RECORD_LEN};

/// Encode a mesh as binary STL.
///
/// Layout:
/// - 80 bytes: header (`name`, truncated and zero-padded)
/// - 4 bytes: u32 LE triangle count
/// - Per triangle (50 bytes): normal (3 × f32 LE), 3 vertices (3 × 3 × f32 LE),
///   attribute byte count (0u16)
///
/// A triangle whose stored normal is all zeros gets one computed from its
/// winding; degenerate triangles keep the zero normal.
pub fn write_binary_stl(mesh: &MeshGeometry, name: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PREAMBLE_LEN + mesh.len() * RECORD_LEN);

    let header = name.as_bytes();
    buf.extend_from_slice(&header[..header.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&(mesh.len() as u32).to_le_bytes());

    for tri in mesh {
        let normal = if tri.normal == [0.0; 3] {
            face_normal(tri)
        } else {
            tri.normal
        };
        for c in &normal {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in &tri.vertices {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}

/// Unit normal from the cross product of the triangle's edges.
fn face_normal(tri: &Triangle) -> [f32; 3] {
    let [v0, v1, v2] = tri.vertices;
    let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
    let nx = e1[1] * e2[2] - e1[2] * e2[1];
    let ny = e1[2] * e2[0] - e1[0] * e2[2];
    let nz = e1[0] * e2[1] - e1[1] * e2[0];
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_is_preamble_only() {
        let stl = write_binary_stl(&MeshGeometry::default(), "empty");
        assert_eq!(stl.len(), 84);
        assert!(stl.starts_with(b"empty"));
        assert_eq!(u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]), 0);
    }

    #[test]
    fn missing_normal_is_computed() {
        let mesh = MeshGeometry::new(vec![Triangle::from_vertices(
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        )]);
        let stl = write_binary_stl(&mesh, "tri");
        assert_eq!(stl.len(), 134);
        let nz = f32::from_le_bytes([stl[92], stl[93], stl[94], stl[95]]);
        assert!((nz - 1.0).abs() < 1e-6);
    }

    #[test]
    fn long_name_is_truncated_to_header() {
        let name = "x".repeat(200);
        let stl = write_binary_stl(&MeshGeometry::default(), &name);
        assert_eq!(stl.len(), 84);
        assert!(stl[..80].iter().all(|&b| b == b'x'));
    }
}
