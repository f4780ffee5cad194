//! Core types for fabalos-core.
//!
//! This module defines the data shapes shared by every layer: the untyped
//! inbound [`RawIncidentPayload`], the canonical [`NormalizedIncident`] handed
//! to the automation engine, and its [`Priority`] discriminant.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// An inbound incident report as received on the wire.
///
/// No schema is enforced: every key may be missing, `null`, wrong-typed or
/// hostile. The normalizer is the only consumer that interprets the values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawIncidentPayload {
    fields: Map<String, Value>,
}

/// Reasons a request body cannot be turned into a [`RawIncidentPayload`].
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The body is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The body is the JSON literal `null`, which has no fields to read.
    #[error("payload is null")]
    Null,
}

impl RawIncidentPayload {
    /// Parse a request body.
    ///
    /// Any valid JSON other than `null` is accepted. Arrays, numbers, strings
    /// and booleans carry no named fields and yield an empty payload.
    pub fn from_json(body: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Build a payload from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        match value {
            Value::Null => Err(PayloadError::Null),
            Value::Object(fields) => Ok(Self { fields }),
            _ => Ok(Self::default()),
        }
    }

    /// Raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of top-level keys in the payload.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for RawIncidentPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// The canonical flat record forwarded to the automation engine.
///
/// Every field is always populated. Field order matches the wire format the
/// automation engine expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIncident {
    pub origin: String,
    pub priority: Priority,
    pub user_company: String,
    pub user_name: String,
    pub user_id: String,
    /// A loosely email-shaped address, or the fallback sentinel.
    pub user_email: String,
    pub incident_title: String,
    /// Telemetry text exactly as received. Never escaped or trimmed.
    pub incident_raw: String,
    /// Variable-stripped template of `incident_raw`, see [`crate::signature`].
    pub ai_signature: String,
    /// Caller-supplied timestamp, or the ingest time as ISO-8601.
    pub timestamp: String,
}

/// Incident urgency. Anything unrecognised degrades to [`Priority::Low`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }

    /// Case-insensitive lookup against the four known names.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|p| p.as_str() == upper)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
