//! fabalos-server — the HTTP ingest endpoint.
//!
//! Wires the pure normalizer from `fabalos-core` to the webhook client from
//! `fabalos-sink` behind an axum router, and maps every failure onto the
//! three-way error taxonomy in [`error`].

pub mod error;
pub mod routes;
pub mod state;

pub use error::IngestError;
pub use routes::{router, HealthResponse, IngestAccepted, HEALTH_PATH, INGEST_PATH};
pub use state::AppState;

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let sink_configured = state.sink.is_some();
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, sink_configured, "fabalos listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("fabalos stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
