use serde::{Deserialize, Serialize};

/// Scalar geometry derived from a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryMetrics {
    /// Total surface area (mm²).
    pub surface_area: f64,
    /// Enclosed volume (mm³). Absolute value of the signed tetrahedral sum.
    pub volume: f64,
}

/// Accuracy of a submitted mesh relative to the challenge reference.
/// Both values lie in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyResult {
    pub dimensional_accuracy: f64,
    pub geometry_match: f64,
}

/// Edge usage statistics for a triangle soup after exact vertex welding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCounts {
    /// Number of distinct undirected edges.
    pub total: usize,
    /// Edges used by exactly one triangle. Zero for a watertight mesh.
    pub boundary: usize,
}

impl EdgeCounts {
    pub fn is_watertight(&self) -> bool {
        self.boundary == 0
    }
}

/// Everything computed for one uploaded file, cached until the next upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAnalysis {
    pub triangle_count: usize,
    pub metrics: GeometryMetrics,
    pub accuracy: AccuracyResult,
    /// Axis-aligned bounds (min, max); `None` for an empty mesh.
    pub bounding_box: Option<([f32; 3], [f32; 3])>,
    pub edges: EdgeCounts,
}
