use challenge_types::Challenge;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::errors::ConfigError;
use crate::metadata::ChallengeMetadata;
use crate::save::{FORMAT_ID, FORMAT_VERSION};
use crate::validate::validate_challenge;

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeFileRaw {
    pub format: String,
    pub version: u32,
    pub metadata: ChallengeMetadata,
    pub challenge: Challenge,
}

/// Deserialize a challenge from a JSON string.
///
/// Validates the format identifier, the version and the content itself
/// (positive reference values, well-formed quiz, ordered time bands).
#[instrument(skip(json), fields(len = json.len()))]
pub fn load_challenge(json: &str) -> Result<(Challenge, ChallengeMetadata), ConfigError> {
    let raw: ChallengeFileRaw =
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(ConfigError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(ConfigError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    validate_challenge(&raw.challenge)?;
    debug!(
        challenge = %raw.challenge.id,
        questions = raw.challenge.quiz.len(),
        "loaded challenge"
    );
    Ok((raw.challenge, raw.metadata))
}
