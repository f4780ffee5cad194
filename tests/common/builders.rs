//! Test builders — ergonomic constructors for incident payloads.
//!
//! These panic on invalid input rather than returning `Result`.

use fabalos_core::RawIncidentPayload;
use serde_json::{Map, Value};

/// Fluent builder for [`RawIncidentPayload`] fixtures.
///
/// ```rust
/// let payload = PayloadBuilder::new()
///     .field("origin", "checkout-api")
///     .field("priority", "high")
///     .build();
/// ```
#[derive(Default)]
pub struct PayloadBuilder {
    fields: Map<String, Value>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> RawIncidentPayload {
        RawIncidentPayload::from(self.fields)
    }

    /// The payload as a request body.
    pub fn to_body(&self) -> String {
        serde_json::to_string(&self.fields).unwrap()
    }
}

/// Parse a JSON fixture into a payload.
pub fn payload(json: &str) -> RawIncidentPayload {
    RawIncidentPayload::from_json(json.as_bytes()).unwrap()
}
