/// Errors while loading or saving challenge content.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse challenge file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("invalid challenge: {reason}")]
    Invalid { reason: String },

    #[error("failed to serialize challenge file: {0}")]
    Serialize(String),
}
