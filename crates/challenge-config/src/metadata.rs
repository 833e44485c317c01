use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authoring metadata stored alongside the challenge content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeMetadata {
    /// Organisation or user that published the challenge.
    pub author: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl ChallengeMetadata {
    /// Create metadata with the given author and current timestamp.
    pub fn new(author: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            author: author.into(),
            created: now,
            modified: now,
        }
    }
}
