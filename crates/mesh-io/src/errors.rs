/// Errors while decoding a binary STL buffer.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("buffer is {len} bytes, shorter than the {min}-byte STL preamble")]
    TooShort { len: usize, min: usize },

    #[error("triangle {triangle} has a non-finite {field}")]
    NonFiniteValue {
        triangle: usize,
        field: &'static str,
    },

    #[error("failed to read mesh file: {0}")]
    Io(#[from] std::io::Error),
}
