//! Shared handler state.

use fabalos_core::config::SinkConfig;
use fabalos_sink::{SinkError, WebhookSink};

/// State cloned into every handler.
///
/// `sink` is `None` when no webhook URL is configured; the server still starts
/// and answers every ingest with a misconfiguration error.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub sink: Option<WebhookSink>,
}

impl AppState {
    pub fn new(sink: Option<WebhookSink>) -> Self {
        Self { sink }
    }

    /// Build state from the `[sink]` config section. A URL that is present but
    /// unusable is an error rather than a silently unconfigured sink.
    pub fn from_config(config: &SinkConfig) -> Result<Self, SinkError> {
        let sink = config
            .webhook_url()
            .map(|url| WebhookSink::new(url, config.timeout()))
            .transpose()?;
        Ok(Self { sink })
    }
}
