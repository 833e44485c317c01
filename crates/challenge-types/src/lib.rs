pub mod challenge;
pub mod mesh;
pub mod metrics;
pub mod submission;

pub use challenge::*;
pub use mesh::*;
pub use metrics::*;
pub use submission::*;
