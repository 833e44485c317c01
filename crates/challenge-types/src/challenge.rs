use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The "correct" design a submission is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceGeometry {
    /// Reference volume (mm³). Must be positive.
    pub volume: f64,
    /// Reference surface area (mm²). Must be positive.
    pub surface_area: f64,
    /// Named critical dimensions in millimetres, shown alongside the brief.
    #[serde(default)]
    pub critical_dimensions: BTreeMap<String, f64>,
}

/// A multiple-choice knowledge-check question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_option: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// Selected option per question id. Re-answering replaces the earlier choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswerSet {
    answers: BTreeMap<String, usize>,
}

impl QuizAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previously selected option if any.
    pub fn answer(&mut self, question_id: impl Into<String>, option: usize) -> Option<usize> {
        self.answers.insert(question_id.into(), option)
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True when every question in `questions` has an answer.
    pub fn is_complete(&self, questions: &[QuizQuestion]) -> bool {
        questions.iter().all(|q| self.answers.contains_key(&q.id))
    }

    /// Number of questions answered with their correct option.
    pub fn correct_count(&self, questions: &[QuizQuestion]) -> usize {
        questions
            .iter()
            .filter(|q| self.get(&q.id).is_some_and(|a| q.is_correct(a)))
            .count()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for QuizAnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, usize)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One step of the elapsed-time score: submissions strictly under
/// `under_minutes` earn `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBand {
    pub under_minutes: f64,
    pub points: u32,
}

/// Weights and caps for the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Bands in ascending `under_minutes` order.
    pub time_bands: Vec<TimeBand>,
    /// Points when elapsed time is past every band.
    pub time_floor: u32,
    /// Points for a fully correct quiz.
    pub quiz_max: u32,
    /// Multiplier applied to the mean of the two accuracy sub-scores.
    pub accuracy_scale: f64,
    /// Weight of the volume ratio score in `geometry_match`.
    pub volume_weight: f64,
    /// Weight of the surface ratio score in `geometry_match`.
    pub surface_weight: f64,
}

impl ScoringPolicy {
    /// Upper bound of the time score.
    pub const TIME_CAP: u32 = 30;
    /// Upper bound of the quiz score.
    pub const QUIZ_CAP: u32 = 20;
    /// Upper bound of the accuracy score.
    pub const ACCURACY_CAP: u32 = 50;

    /// Largest time score any submission can earn.
    pub fn time_max(&self) -> u32 {
        self.time_bands
            .iter()
            .map(|b| b.points)
            .chain(std::iter::once(self.time_floor))
            .max()
            .unwrap_or(0)
    }

    /// Largest accuracy score any submission can earn.
    pub fn accuracy_max(&self) -> u32 {
        (100.0 * self.accuracy_scale).round() as u32
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            time_bands: vec![
                TimeBand { under_minutes: 10.0, points: 30 },
                TimeBand { under_minutes: 15.0, points: 25 },
                TimeBand { under_minutes: 20.0, points: 20 },
                TimeBand { under_minutes: 30.0, points: 15 },
            ],
            time_floor: 10,
            quiz_max: 20,
            accuracy_scale: 0.5,
            volume_weight: 0.7,
            surface_weight: 0.3,
        }
    }
}

/// Per-challenge content: brief, reference geometry, quiz and scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    pub reference: ReferenceGeometry,
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

impl Challenge {
    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.quiz.iter().find(|q| q.id == id)
    }
}
