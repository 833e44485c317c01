use challenge_types::{
    AccuracyResult, Challenge, GeometryMetrics, QuizAnswerSet, ScoringPolicy, SubmissionResult,
    TimeBand,
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::quiz::{analyze_quiz, quiz_score};

/// Everything the composite scorer needs, gathered at submission time.
#[derive(Debug, Clone)]
pub struct SubmissionInput<'a> {
    pub challenge: &'a Challenge,
    pub elapsed_seconds: u64,
    pub answers: &'a QuizAnswerSet,
    pub metrics: GeometryMetrics,
    pub accuracy: AccuracyResult,
    pub submitted_at: DateTime<Utc>,
}

/// Banded step score on elapsed minutes.
///
/// The first band whose `under_minutes` is strictly greater than the elapsed
/// time wins, so a band edge belongs to the next (lower-scoring) band.
pub fn time_score(elapsed_seconds: u64, bands: &[TimeBand], floor: u32) -> u32 {
    let minutes = elapsed_seconds as f64 / 60.0;
    bands
        .iter()
        .find(|band| minutes < band.under_minutes)
        .map_or(floor, |band| band.points)
}

/// `round(mean(dimensional_accuracy, geometry_match) × scale)`.
pub fn accuracy_score(accuracy: &AccuracyResult, scale: f64) -> u32 {
    let mean = (accuracy.dimensional_accuracy + accuracy.geometry_match) / 2.0;
    (mean * scale).round().max(0.0) as u32
}

/// Combine time, quiz and accuracy into the final result.
///
/// Each sub-score is rounded on its own before summing, so the total can
/// differ by one from rounding the unrounded sum.
#[instrument(skip_all, fields(challenge = %input.challenge.id, elapsed = input.elapsed_seconds))]
pub fn score_submission(input: SubmissionInput<'_>) -> SubmissionResult {
    let challenge = input.challenge;
    let policy: &ScoringPolicy = &challenge.scoring;

    let time = time_score(input.elapsed_seconds, &policy.time_bands, policy.time_floor);
    let quiz = analyze_quiz(&challenge.quiz, input.answers);
    let quiz_points = quiz_score(quiz.correct_answers, quiz.total_questions, policy.quiz_max);
    let accuracy_points = accuracy_score(&input.accuracy, policy.accuracy_scale);
    let final_score = time + quiz_points + accuracy_points;

    info!(
        time_score = time,
        quiz_score = quiz_points,
        accuracy_score = accuracy_points,
        final_score,
        "scored submission"
    );

    SubmissionResult {
        submission_id: Uuid::new_v4(),
        challenge_id: challenge.id.clone(),
        submitted_at: input.submitted_at,
        elapsed_seconds: input.elapsed_seconds,
        final_score,
        time_score: time,
        quiz_score: quiz_points,
        accuracy_score: accuracy_points,
        metrics: input.metrics,
        accuracy: input.accuracy,
        quiz,
    }
}
