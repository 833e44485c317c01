use challenge_types::{MeshAnalysis, SubmissionResult};
use serde::{Deserialize, Serialize};

use crate::decode::DecodeTicket;

/// Messages from the challenge page (JavaScript main thread) to the session
/// (web worker). Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToSession {
    /// Start an attempt at the challenge described by a challenge file.
    LoadChallenge { config_json: String },
    /// Start an attempt at the built-in spur-gear challenge.
    LoadBuiltinChallenge,
    /// A file was selected. `data_base64` is the raw binary STL.
    UploadMesh {
        file_name: String,
        data_base64: String,
    },
    /// The user removed the selected file.
    ClearMesh,
    /// Select an option for a quiz question.
    AnswerQuestion { question_id: String, option: usize },
    /// One second passed on the page clock.
    Tick,
    /// Score the attempt.
    Submit,
    /// Give up on the attempt.
    Abandon,
    /// Query the current session state.
    GetState,
}

impl UiToSession {
    /// Variant name, for logging without payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            UiToSession::LoadChallenge { .. } => "LoadChallenge",
            UiToSession::LoadBuiltinChallenge => "LoadBuiltinChallenge",
            UiToSession::UploadMesh { .. } => "UploadMesh",
            UiToSession::ClearMesh => "ClearMesh",
            UiToSession::AnswerQuestion { .. } => "AnswerQuestion",
            UiToSession::Tick => "Tick",
            UiToSession::Submit => "Submit",
            UiToSession::Abandon => "Abandon",
            UiToSession::GetState => "GetState",
        }
    }
}

/// Messages from the session back to the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionToUi {
    ChallengeLoaded {
        challenge_id: String,
        title: String,
        question_count: usize,
    },
    /// The latest upload was analysed.
    AnalysisReady {
        ticket: DecodeTicket,
        analysis: MeshAnalysis,
    },
    /// The latest upload could not be parsed; the user may pick another file.
    AnalysisFailed { message: String },
    /// A completion arrived for a superseded upload and was ignored.
    AnalysisSuperseded { ticket: DecodeTicket },
    MeshCleared,
    AnswerRecorded { answered: usize, total: usize },
    TimerTicked {
        elapsed_seconds: u64,
        /// `MM:SS`
        display: String,
    },
    Submitted { result: Box<SubmissionResult> },
    Abandoned { elapsed_seconds: u64 },
    State(SessionSnapshot),
    Error { message: String },
}

/// Read-only view of the session for the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub challenge_id: Option<String>,
    pub file_name: Option<String>,
    pub analyzing: bool,
    pub analysis: Option<MeshAnalysis>,
    pub answered: usize,
    pub total_questions: usize,
    pub elapsed_seconds: u64,
    pub timer_running: bool,
    pub submitted: bool,
    pub abandoned: bool,
}
