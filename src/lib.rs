//! fabalos — incident ingest front end.
//!
//! Receives incident webhooks, normalizes them into a flat record with a
//! stable telemetry signature, and forwards the record to an external
//! automation engine. This crate re-exports the workspace layers so that
//! integration tests and the binary import them from one place.
//!
//! # Architecture
//!
//! ```text
//! POST /api/incidents/ingest
//!        │
//!        ▼
//!  fabalos-server ──► fabalos-core (normalize + signature)
//!        │
//!        └──────────► fabalos-sink ──► automation webhook
//! ```
//!
//! Normalization is pure and synchronous; only the sink call awaits.

pub use fabalos_core as core;
pub use fabalos_server as server;
pub use fabalos_sink as sink;

pub use fabalos_core::{normalize, signature, NormalizedIncident, Priority, RawIncidentPayload};

use std::io::Read;
use std::path::Path;

/// Read a whole input source: the file at `path`, or stdin when `None`.
pub fn read_input(path: Option<&Path>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
