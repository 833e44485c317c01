//! Deterministic scoring of a challenge attempt.
//!
//! - [`accuracy`]: compare mesh geometry with the reference (0–100 each)
//! - [`quiz`]: knowledge-check score and per-question breakdown
//! - [`composite`]: time bands and the final 0–100 result
//!
//! Every function here is pure and total on finite, non-negative inputs.
//! Preconditions (a mesh was analysed, every question answered) are the
//! caller's job.

pub mod accuracy;
pub mod composite;
pub mod quiz;

pub use accuracy::{dimensional_accuracy, geometry_match, score_accuracy};
pub use composite::{accuracy_score, score_submission, time_score, SubmissionInput};
pub use quiz::{analyze_quiz, quiz_score};
