//! Challenge content as data: reference geometry, quiz and scoring policy,
//! stored as versioned JSON.

pub mod builtin;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;
pub mod validate;

pub use errors::ConfigError;
pub use load::load_challenge;
pub use metadata::ChallengeMetadata;
pub use save::{save_challenge, FORMAT_ID, FORMAT_VERSION};
pub use validate::validate_challenge;
