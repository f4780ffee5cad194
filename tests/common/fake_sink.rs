//! Fake automation engine for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. `POST /hook` records the request and answers with the
//! configured status and body.
//!
//! # Example
//!
//! ```rust,no_run
//! let sink = FakeAutomationSink::start().await.unwrap();
//! sink.respond_with(502, "upstream down").await;
//! let url = sink.webhook_url();
//! ```

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use bytes::Bytes;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request the fake engine received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

struct SinkState {
    status: StatusCode,
    body: String,
    received: Vec<RecordedRequest>,
}

/// Handle to the running fake engine.
pub struct FakeAutomationSink {
    addr: SocketAddr,
    state: Arc<Mutex<SinkState>>,
}

impl FakeAutomationSink {
    /// Start the fake engine, answering `200 Accepted` until told otherwise.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(SinkState {
            status: StatusCode::OK,
            body: "Accepted".to_string(),
            received: Vec::new(),
        }));

        let app = Router::new()
            .route("/hook", post(receive))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    pub fn webhook_url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    pub async fn respond_with(&self, status: u16, body: &str) {
        let mut state = self.state.lock().await;
        state.status = StatusCode::from_u16(status).unwrap();
        state.body = body.to_string();
    }

    pub async fn received(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.received.clone()
    }
}

async fn receive(
    State(state): State<Arc<Mutex<SinkState>>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.received.push(RecordedRequest {
        content_type: headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });
    (state.status, state.body.clone())
}

/// An address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hook")
}
