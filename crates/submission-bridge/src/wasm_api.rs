//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::decode::analyze_mesh;
use crate::dispatch::{self, decode_response};
use crate::messages::{SessionToUi, UiToSession};
use crate::session::SessionState;

// Session state, single-threaded in the web worker.
thread_local! {
    static SESSION: RefCell<Option<SessionState>> = const { RefCell::new(None) };
}

/// Initialize the session. Must be called once before any other function.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(SessionState::new());
    });
}

/// Process a JSON `UiToSession` message and return a JSON `SessionToUi`
/// response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToSession>(json_input) {
        Ok(msg) => with_session(|state| dispatch::dispatch(state, msg)),
        Err(e) => SessionToUi::Error {
            message: format!("Failed to parse message: {}", e),
        },
    };
    to_json(&response)
}

/// Analyse an uploaded file passed as a `Uint8Array`, skipping the base64
/// round trip of `UploadMesh`.
#[wasm_bindgen]
pub fn upload_mesh_bytes(file_name: &str, bytes: &[u8]) -> String {
    let response = with_session(|state| {
        let challenge = match state.challenge() {
            Ok(c) => c.clone(),
            Err(e) => {
                return SessionToUi::Error {
                    message: e.to_string(),
                }
            }
        };
        let ticket = match state.begin_decode(file_name) {
            Ok(t) => t,
            Err(e) => {
                return SessionToUi::Error {
                    message: e.to_string(),
                }
            }
        };
        let result = analyze_mesh(bytes, &challenge);
        decode_response(ticket, state.complete_decode(ticket, result))
    });
    to_json(&response)
}

fn with_session(f: impl FnOnce(&mut SessionState) -> SessionToUi) -> SessionToUi {
    SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => f(state),
        None => SessionToUi::Error {
            message: "Session not initialized. Call init() first.".to_string(),
        },
    })
}

fn to_json(response: &SessionToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","message":"Serialization failed: {}"}}"#,
            e
        )
    })
}
