use std::sync::Arc;

use challenge_scoring::{score_submission, SubmissionInput};
use challenge_types::{Challenge, MeshAnalysis, QuizAnswerSet, SubmissionResult};
use chrono::{DateTime, Utc};
use mesh_io::ParseError;
use tracing::{debug, info, warn};

use crate::decode::DecodeTicket;
use crate::errors::SubmitError;
use crate::timer::ElapsedTimer;

/// State of one user's attempt at one challenge.
///
/// Holds the latest mesh analysis only; each upload replaces the previous
/// one and supersedes any decode still in flight.
#[derive(Default)]
pub struct SessionState {
    /// The challenge being attempted.
    pub(crate) challenge: Option<Arc<Challenge>>,
    /// Name of the most recently selected file.
    pub(crate) file_name: Option<String>,
    /// Ticket of the decode whose result is awaited, if any.
    pub(crate) pending: Option<DecodeTicket>,
    /// Analysis of the most recent successfully decoded file.
    pub(crate) analysis: Option<MeshAnalysis>,
    pub(crate) answers: QuizAnswerSet,
    pub(crate) timer: ElapsedTimer,
    /// Set once, at submission.
    pub(crate) result: Option<SubmissionResult>,
    pub(crate) abandoned: bool,
    generation: u64,
}

/// What happened to a decode completion handed to the session.
#[derive(Debug)]
pub enum DecodeOutcome {
    /// The completion was current and the analysis is now cached.
    Ready(MeshAnalysis),
    /// The completion was current but decoding failed; analysis cleared.
    Failed(ParseError),
    /// A newer upload superseded this ticket; nothing changed.
    Stale,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh attempt at `challenge`, resetting answers, mesh and clock.
    pub fn load_challenge(&mut self, challenge: Challenge) {
        info!(challenge = %challenge.id, "starting challenge attempt");
        *self = Self {
            challenge: Some(Arc::new(challenge)),
            generation: self.generation,
            ..Self::default()
        };
    }

    pub fn challenge(&self) -> Result<&Arc<Challenge>, SubmitError> {
        self.challenge.as_ref().ok_or(SubmitError::NoChallenge)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Ticket of the decode whose completion is awaited.
    pub fn pending(&self) -> Option<DecodeTicket> {
        self.pending
    }

    pub fn analysis(&self) -> Option<&MeshAnalysis> {
        self.analysis.as_ref()
    }

    pub fn answers(&self) -> &QuizAnswerSet {
        &self.answers
    }

    pub fn timer(&self) -> &ElapsedTimer {
        &self.timer
    }

    /// The scored attempt, once submitted.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    /// Register a new upload. Clears the cached analysis and returns the
    /// ticket its completion must carry.
    pub fn begin_decode(
        &mut self,
        file_name: impl Into<String>,
    ) -> Result<DecodeTicket, SubmitError> {
        self.ensure_open()?;
        self.generation += 1;
        let ticket = DecodeTicket(self.generation);
        if let Some(previous) = self.pending.replace(ticket) {
            debug!(superseded = previous.0, generation = ticket.0, "decode superseded");
        }
        self.file_name = Some(file_name.into());
        self.analysis = None;
        Ok(ticket)
    }

    /// Apply a decode completion. Completions for anything but the latest
    /// ticket are ignored.
    pub fn complete_decode(
        &mut self,
        ticket: DecodeTicket,
        result: Result<MeshAnalysis, ParseError>,
    ) -> DecodeOutcome {
        if self.pending != Some(ticket) {
            debug!(generation = ticket.0, "dropping stale decode result");
            return DecodeOutcome::Stale;
        }
        self.pending = None;
        match result {
            Ok(analysis) => {
                self.analysis = Some(analysis.clone());
                DecodeOutcome::Ready(analysis)
            }
            Err(e) => {
                warn!(error = %e, "mesh analysis failed");
                self.analysis = None;
                self.file_name = None;
                DecodeOutcome::Failed(e)
            }
        }
    }

    /// Forget the selected file and any decode in flight.
    pub fn clear_mesh(&mut self) {
        self.file_name = None;
        self.pending = None;
        self.analysis = None;
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a quiz answer. Returns (answered, total).
    pub fn answer(
        &mut self,
        question_id: &str,
        option: usize,
    ) -> Result<(usize, usize), SubmitError> {
        self.ensure_open()?;
        let challenge = self.challenge()?;
        let question = challenge
            .question(question_id)
            .ok_or_else(|| SubmitError::UnknownQuestion {
                id: question_id.to_string(),
            })?;
        if option >= question.options.len() {
            return Err(SubmitError::OptionOutOfRange {
                question_id: question_id.to_string(),
                option,
                count: question.options.len(),
            });
        }
        let total = challenge.quiz.len();
        self.answers.answer(question_id, option);
        Ok((self.answers.len(), total))
    }

    /// Advance the attempt clock by one second.
    pub fn tick(&mut self) -> u64 {
        self.timer.tick()
    }

    /// Check preconditions, stop the clock and score the attempt.
    ///
    /// Nothing changes if a precondition fails.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<&SubmissionResult, SubmitError> {
        self.ensure_open()?;
        let challenge = Arc::clone(self.challenge()?);
        if self.pending.is_some() {
            return Err(SubmitError::AnalysisPending);
        }
        let analysis = self.analysis.as_ref().ok_or(SubmitError::NoMesh)?;
        if !self.answers.is_complete(&challenge.quiz) {
            return Err(SubmitError::QuizIncomplete {
                answered: self.answers.len(),
                total: challenge.quiz.len(),
            });
        }

        self.timer.stop();
        let result = score_submission(SubmissionInput {
            challenge: &challenge,
            elapsed_seconds: self.timer.elapsed_seconds(),
            answers: &self.answers,
            metrics: analysis.metrics,
            accuracy: analysis.accuracy,
            submitted_at: now,
        });
        Ok(self.result.insert(result))
    }

    /// Give up on the attempt. Returns the elapsed time.
    pub fn abandon(&mut self) -> Result<u64, SubmitError> {
        self.ensure_open()?;
        self.challenge()?;
        self.timer.stop();
        self.abandoned = true;
        self.pending = None;
        info!(elapsed = self.timer.elapsed_seconds(), "challenge abandoned");
        Ok(self.timer.elapsed_seconds())
    }

    fn ensure_open(&self) -> Result<(), SubmitError> {
        if self.result.is_some() {
            Err(SubmitError::AlreadySubmitted)
        } else if self.abandoned {
            Err(SubmitError::Abandoned)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challenge_config::builtin::spur_gear;

    #[test]
    fn generations_survive_challenge_reload() {
        let mut state = SessionState::new();
        state.load_challenge(spur_gear());
        let first = state.begin_decode("a.stl").unwrap();
        state.load_challenge(spur_gear());
        let second = state.begin_decode("b.stl").unwrap();
        assert!(second > first);
        assert!(matches!(
            state.complete_decode(first, Err(ParseError::TooShort { len: 0, min: 84 })),
            DecodeOutcome::Stale
        ));
    }

    #[test]
    fn answering_without_challenge_fails() {
        let mut state = SessionState::new();
        assert!(matches!(
            state.answer("q1", 0),
            Err(SubmitError::NoChallenge)
        ));
    }
}
