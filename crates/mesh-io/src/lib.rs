//! Binary STL ingestion for challenge submissions.
//!
//! - [`reader`]: decode an uploaded buffer into a [`MeshGeometry`]
//! - [`writer`]: encode triangles back into the same layout
//!
//! [`MeshGeometry`]: challenge_types::MeshGeometry

pub mod errors;
pub mod reader;
pub mod writer;

pub use errors::ParseError;
pub use reader::{parse_binary_stl, read_stl_file, HEADER_LEN, PREAMBLE_LEN, RECORD_LEN};
pub use writer::write_binary_stl;
