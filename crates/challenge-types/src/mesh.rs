use serde::{Deserialize, Serialize};

/// One facet of a triangulated surface, as stored in a binary STL record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Face normal as written by the exporter. Not recomputed or trusted.
    pub normal: [f32; 3],
    /// Vertices v0, v1, v2 in file order.
    pub vertices: [[f32; 3]; 3],
}

impl Triangle {
    pub fn new(normal: [f32; 3], v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self {
            normal,
            vertices: [v0, v1, v2],
        }
    }

    /// Build a triangle with a zero normal, for fixtures and generated meshes.
    pub fn from_vertices(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        Self::new([0.0; 3], v0, v1, v2)
    }

    /// Vertices widened to f64 for accumulation.
    pub fn vertices_f64(&self) -> [[f64; 3]; 3] {
        self.vertices.map(|v| [v[0] as f64, v[1] as f64, v[2] as f64])
    }
}

/// The ordered triangle sequence decoded from one uploaded buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub triangles: Vec<Triangle>,
    /// Triangle count written in the file header. Informational only; the
    /// reader derives the real count from the buffer length.
    pub declared_count: u32,
}

impl MeshGeometry {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        let declared_count = triangles.len() as u32;
        Self {
            triangles,
            declared_count,
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }
}

impl<'a> IntoIterator for &'a MeshGeometry {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

impl FromIterator<Triangle> for MeshGeometry {
    fn from_iter<T: IntoIterator<Item = Triangle>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
