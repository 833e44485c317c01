use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::{AccuracyResult, GeometryMetrics};

/// Per-question breakdown returned with a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDetail {
    pub question: String,
    /// Text of the selected option, `None` if unanswered or out of range.
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Quiz summary returned with a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnalysis {
    pub correct_answers: usize,
    pub total_questions: usize,
    pub details: Vec<QuizDetail>,
}

/// Final, immutable outcome of one challenge attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub submission_id: Uuid,
    pub challenge_id: String,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_seconds: u64,
    /// Sum of the three sub-scores.
    pub final_score: u32,
    pub time_score: u32,
    pub quiz_score: u32,
    pub accuracy_score: u32,
    pub metrics: GeometryMetrics,
    pub accuracy: AccuracyResult,
    pub quiz: QuizAnalysis,
}
