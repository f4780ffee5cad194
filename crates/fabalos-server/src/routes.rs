//! HTTP routes.
//!
//! - `POST /api/incidents/ingest` — normalize and forward one incident
//! - `GET  /health`               — liveness plus whether a sink is configured

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use fabalos_core::{normalize, RawIncidentPayload};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::IngestError;
use crate::state::AppState;

pub const INGEST_PATH: &str = "/api/incidents/ingest";
pub const HEALTH_PATH: &str = "/health";

/// Success body for an accepted incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestAccepted {
    pub status: String,
    /// Correlation id, `<user_id>-<epoch_ms>`.
    pub id: String,
    /// Automation engine response body, passed through untouched.
    pub provider_response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sink_configured: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INGEST_PATH, post(ingest))
        .route(HEALTH_PATH, get(health))
        .with_state(state)
}

#[instrument(skip_all, fields(user_id = tracing::field::Empty))]
async fn ingest(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<IngestAccepted>, IngestError> {
    let sink = state.sink.as_ref().ok_or(IngestError::Misconfigured)?;

    let body = body.map_err(|e| IngestError::InvalidPayload(e.body_text()))?;
    let payload = RawIncidentPayload::from_json(&body)?;
    let incident = normalize(&payload);
    tracing::Span::current().record("user_id", incident.user_id.as_str());

    let provider_response = sink.forward(&incident).await?;

    let id = format!("{}-{}", incident.user_id, Utc::now().timestamp_millis());
    info!(
        %id,
        origin = %incident.origin,
        priority = %incident.priority,
        signature = %incident.ai_signature,
        "incident forwarded"
    );

    Ok(Json(IngestAccepted {
        status: "Success".to_string(),
        id,
        provider_response,
    }))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        sink_configured: state.sink.is_some(),
    })
}
