//! Challenge-submission session: decode uploads, track quiz answers and the
//! attempt clock, enforce submission preconditions, and speak the JSON
//! message protocol of the challenge page's web worker.

pub mod decode;
pub mod dispatch;
pub mod errors;
pub mod messages;
pub mod session;
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use decode::{analyze_mesh, DecodeCompletion, DecodeTicket, DecodeWorker};
pub use dispatch::dispatch;
pub use errors::SubmitError;
pub use session::{DecodeOutcome, SessionState};
pub use timer::ElapsedTimer;
