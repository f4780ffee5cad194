//! Request-boundary errors and their HTTP mapping.
//!
//! | Variant                 | Status | Body                                      |
//! |-------------------------|--------|-------------------------------------------|
//! | `Misconfigured`         | 500    | `{"error":"Server misconfiguration"}`     |
//! | `InvalidPayload`        | 400    | `{"error":"Invalid Payload"}`             |
//! | `AutomationUnavailable` | 502    | `{"error":"Automation Engine unavailable"}` |
//!
//! Detail is logged, never returned to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fabalos_core::PayloadError;
use fabalos_sink::SinkError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum IngestError {
    /// No automation webhook is configured.
    #[error("automation webhook url is not configured")]
    Misconfigured,

    /// The body could not be read or parsed.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The automation engine could not be reached or refused the incident.
    #[error("automation engine unavailable: {0}")]
    AutomationUnavailable(#[from] SinkError),
}

impl From<PayloadError> for IngestError {
    fn from(e: PayloadError) -> Self {
        IngestError::InvalidPayload(e.to_string())
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IngestError {
    pub fn status(&self) -> StatusCode {
        match self {
            IngestError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            IngestError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            IngestError::AutomationUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            IngestError::Misconfigured => "Server misconfiguration",
            IngestError::InvalidPayload(_) => "Invalid Payload",
            IngestError::AutomationUnavailable(_) => "Automation Engine unavailable",
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        match &self {
            IngestError::Misconfigured => error!("sink url is missing; set MAKE_WEBHOOK_URL"),
            IngestError::InvalidPayload(detail) => warn!(%detail, "rejected ingest payload"),
            IngestError::AutomationUnavailable(e) => error!(
                status = e.status_text().unwrap_or("-"),
                error = %e,
                "automation engine unavailable"
            ),
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
