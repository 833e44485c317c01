//! Mesh analysis and the background decode worker.
//!
//! Every upload gets a [`DecodeTicket`] carrying a generation number. Only the
//! newest ticket's completion is accepted by the session; older completions
//! are stale and dropped.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use challenge_types::{Challenge, MeshAnalysis};
use mesh_io::ParseError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Identifies one decode request. Generations increase monotonically per
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodeTicket(pub u64);

impl DecodeTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Parse, measure and score one uploaded buffer.
///
/// Open meshes are analysed like closed ones; their boundary edge count is
/// reported and a warning logged, but the score is not adjusted.
#[instrument(skip_all, fields(len = bytes.len(), challenge = %challenge.id))]
pub fn analyze_mesh(bytes: &[u8], challenge: &Challenge) -> Result<MeshAnalysis, ParseError> {
    let mesh = mesh_io::parse_binary_stl(bytes)?;
    let metrics = mesh_metrics::evaluate(&mesh);
    let accuracy =
        challenge_scoring::score_accuracy(&metrics, &challenge.reference, &challenge.scoring);
    let edges = mesh_metrics::count_edges(&mesh);
    if !edges.is_watertight() {
        warn!(
            boundary_edges = edges.boundary,
            "mesh is not watertight; volume may be inaccurate"
        );
    }

    Ok(MeshAnalysis {
        triangle_count: mesh.len(),
        metrics,
        accuracy,
        bounding_box: mesh_metrics::bounding_box(&mesh),
        edges,
    })
}

/// The single result delivered for a ticket.
#[derive(Debug)]
pub struct DecodeCompletion {
    pub ticket: DecodeTicket,
    pub result: Result<MeshAnalysis, ParseError>,
}

/// Runs [`analyze_mesh`] off the calling thread and delivers one
/// [`DecodeCompletion`] per request over a channel.
///
/// The worker does not cancel superseded requests; the session discards
/// their completions by ticket. It counts requests in flight so that
/// [`recv`](Self::recv) returns `None` instead of blocking when every
/// completion has already been taken.
pub struct DecodeWorker {
    sender: Sender<DecodeCompletion>,
    receiver: Receiver<DecodeCompletion>,
    in_flight: usize,
}

impl DecodeWorker {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Start decoding `bytes` in the background.
    pub fn spawn(&mut self, ticket: DecodeTicket, bytes: Vec<u8>, challenge: Arc<Challenge>) {
        let sender = self.sender.clone();
        debug!(generation = ticket.0, len = bytes.len(), "spawning mesh decode");
        self.in_flight += 1;
        thread::spawn(move || {
            let result = analyze_mesh(&bytes, &challenge);
            // Fails only if the worker was dropped.
            let _ = sender.send(DecodeCompletion { ticket, result });
        });
    }

    /// Number of requests whose completion has not been taken yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Block until the next completion arrives. `None` when nothing is in
    /// flight.
    pub fn recv(&mut self) -> Option<DecodeCompletion> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.receiver.recv().ok()?;
        self.in_flight -= 1;
        Some(completion)
    }

    /// Return a completion if one is ready.
    pub fn try_recv(&mut self) -> Option<DecodeCompletion> {
        let completion = self.receiver.try_recv().ok()?;
        self.in_flight -= 1;
        Some(completion)
    }
}

impl Default for DecodeWorker {
    fn default() -> Self {
        Self::new()
    }
}
