use challenge_types::Challenge;
use serde::Serialize;

use crate::errors::ConfigError;
use crate::metadata::ChallengeMetadata;

/// Format identifier written to every challenge file.
pub const FORMAT_ID: &str = "cad-challenge";

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeFile<'a> {
    pub format: &'a str,
    pub version: u32,
    pub metadata: &'a ChallengeMetadata,
    pub challenge: &'a Challenge,
}

/// Serialize a challenge to a pretty-printed JSON string.
pub fn save_challenge(
    challenge: &Challenge,
    metadata: &ChallengeMetadata,
) -> Result<String, ConfigError> {
    let file = ChallengeFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        metadata,
        challenge,
    };
    serde_json::to_string_pretty(&file).map_err(|e| ConfigError::Serialize(e.to_string()))
}
