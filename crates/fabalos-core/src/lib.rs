//! fabalos-core — incident payload normalization.
//!
//! This crate holds the only logic in fabalos that is not plumbing: turning an
//! untrusted incident webhook body into a canonical record, and deriving a
//! stable signature from its telemetry text.
//!
//! # Pipeline
//!
//! ```text
//! request body ──► RawIncidentPayload ──► normalize ──► NormalizedIncident
//!                                            │
//!                                            └──► signature(incident_raw)
//! ```
//!
//! Both steps are pure and synchronous. I/O lives in `fabalos-sink` and
//! `fabalos-server`.

pub mod config;
pub mod normalizer;
pub mod signature;
pub mod types;

pub use normalizer::{normalize, normalize_at};
pub use signature::signature;
pub use types::{NormalizedIncident, PayloadError, Priority, RawIncidentPayload};
