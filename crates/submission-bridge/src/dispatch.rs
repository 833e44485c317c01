use base64::Engine as _;
use challenge_config::{builtin, load_challenge};
use chrono::Utc;
use tracing::instrument;

use crate::decode::{analyze_mesh, DecodeTicket};
use crate::errors::SubmitError;
use crate::messages::{SessionSnapshot, SessionToUi, UiToSession};
use crate::session::{DecodeOutcome, SessionState};
use crate::timer::format_elapsed;

/// Dispatch a page message to the session and return a response.
///
/// This is the main entry point for messages from the JavaScript main
/// thread. Uploads are decoded synchronously here; on the web the whole
/// session lives in a worker, so the page thread never waits on a decode.
#[instrument(skip_all, fields(kind = msg.kind()))]
pub fn dispatch(state: &mut SessionState, msg: UiToSession) -> SessionToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => SessionToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(
    state: &mut SessionState,
    msg: UiToSession,
) -> Result<SessionToUi, SubmitError> {
    match msg {
        UiToSession::LoadChallenge { config_json } => {
            let (challenge, _metadata) = load_challenge(&config_json)?;
            state.load_challenge(challenge);
            Ok(challenge_loaded(state))
        }

        UiToSession::LoadBuiltinChallenge => {
            state.load_challenge(builtin::spur_gear());
            Ok(challenge_loaded(state))
        }

        UiToSession::UploadMesh {
            file_name,
            data_base64,
        } => {
            let challenge = state.challenge()?.clone();
            let ticket = state.begin_decode(file_name)?;
            let bytes = match base64::engine::general_purpose::STANDARD.decode(data_base64) {
                Ok(bytes) => bytes,
                Err(e) => {
                    state.clear_mesh();
                    return Ok(SessionToUi::AnalysisFailed {
                        message: format!("upload is not valid base64: {}", e),
                    });
                }
            };
            let result = analyze_mesh(&bytes, &challenge);
            Ok(decode_response(ticket, state.complete_decode(ticket, result)))
        }

        UiToSession::ClearMesh => {
            state.clear_mesh();
            Ok(SessionToUi::MeshCleared)
        }

        UiToSession::AnswerQuestion {
            question_id,
            option,
        } => {
            let (answered, total) = state.answer(&question_id, option)?;
            Ok(SessionToUi::AnswerRecorded { answered, total })
        }

        UiToSession::Tick => {
            let elapsed_seconds = state.tick();
            Ok(SessionToUi::TimerTicked {
                elapsed_seconds,
                display: format_elapsed(elapsed_seconds),
            })
        }

        UiToSession::Submit => {
            let result = state.submit(Utc::now())?;
            Ok(SessionToUi::Submitted {
                result: Box::new(result.clone()),
            })
        }

        UiToSession::Abandon => {
            let elapsed_seconds = state.abandon()?;
            Ok(SessionToUi::Abandoned { elapsed_seconds })
        }

        UiToSession::GetState => Ok(SessionToUi::State(snapshot(state))),
    }
}

/// Turn a decode outcome into the page message announcing it.
pub fn decode_response(ticket: DecodeTicket, outcome: DecodeOutcome) -> SessionToUi {
    match outcome {
        DecodeOutcome::Ready(analysis) => SessionToUi::AnalysisReady { ticket, analysis },
        DecodeOutcome::Failed(e) => SessionToUi::AnalysisFailed {
            message: format!("Unable to parse STL file: {}", e),
        },
        DecodeOutcome::Stale => SessionToUi::AnalysisSuperseded { ticket },
    }
}

/// Build a read-only snapshot of the session.
pub fn snapshot(state: &SessionState) -> SessionSnapshot {
    SessionSnapshot {
        challenge_id: state.challenge.as_ref().map(|c| c.id.clone()),
        file_name: state.file_name.clone(),
        analyzing: state.is_analyzing(),
        analysis: state.analysis.clone(),
        answered: state.answers.len(),
        total_questions: state.challenge.as_ref().map_or(0, |c| c.quiz.len()),
        elapsed_seconds: state.timer.elapsed_seconds(),
        timer_running: state.timer.is_running(),
        submitted: state.result.is_some(),
        abandoned: state.abandoned,
    }
}

fn challenge_loaded(state: &SessionState) -> SessionToUi {
    match &state.challenge {
        Some(c) => SessionToUi::ChallengeLoaded {
            challenge_id: c.id.clone(),
            title: c.title.clone(),
            question_count: c.quiz.len(),
        },
        None => SessionToUi::Error {
            message: SubmitError::NoChallenge.to_string(),
        },
    }
}
