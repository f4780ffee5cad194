//! fabalos-sink — client for the automation engine webhook.
//!
//! A [`WebhookSink`] POSTs one [`NormalizedIncident`] as JSON to the configured
//! URL and hands back the response body verbatim. Anything other than a 2xx
//! status is a failure; there are no retries.

use bytes::Bytes;
use fabalos_core::NormalizedIncident;
use http_body_util::{BodyExt, Full};
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request, StatusCode, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// Failure to deliver an incident to the automation engine.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("invalid webhook url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to encode incident: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to build webhook request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("webhook request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read webhook response: {0}")]
    Body(#[from] hyper::Error),

    #[error("webhook did not answer within {0:?}")]
    Timeout(Duration),

    /// The engine answered with a non-2xx status.
    #[error("webhook returned {status}")]
    Status { status: StatusCode },
}

impl SinkError {
    /// Human-readable status line for logging, e.g. `Bad Gateway`.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            SinkError::Status { status } => Some(status.canonical_reason().unwrap_or("Unknown")),
            _ => None,
        }
    }
}

/// HTTP(S) client bound to one automation webhook.
#[derive(Clone)]
pub struct WebhookSink {
    uri: Uri,
    timeout: Duration,
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl std::fmt::Debug for WebhookSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSink")
            .field("uri", &self.uri)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl WebhookSink {
    /// Build a sink for `url`, which must be an absolute `http` or `https` URL.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SinkError> {
        let uri = parse_webhook_url(url)?;

        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(https);

        Ok(Self { uri, timeout, client })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// POST `incident` and return the engine's response body as text.
    pub async fn forward(&self, incident: &NormalizedIncident) -> Result<String, SinkError> {
        let body = serde_json::to_vec(incident)?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.uri.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))?;

        debug!(uri = %self.uri, user_id = %incident.user_id, "forwarding incident");

        let exchange = async {
            let response = self.client.request(request).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SinkError::Status { status });
            }
            let bytes = response.into_body().collect().await?.to_bytes();
            Ok::<_, SinkError>(String::from_utf8_lossy(&bytes).into_owned())
        };

        let result = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(SinkError::Timeout(self.timeout)),
        };

        if let Err(e) = &result {
            error!(
                uri = %self.uri,
                status = e.status_text().unwrap_or("-"),
                error = %e,
                "automation engine rejected incident"
            );
        }
        result
    }
}

fn parse_webhook_url(url: &str) -> Result<Uri, SinkError> {
    let invalid = |reason: &str| SinkError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let uri: Uri = url.trim().parse().map_err(|e: hyper::http::uri::InvalidUri| invalid(&e.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        Some(_) => return Err(invalid("scheme must be http or https")),
        None => return Err(invalid("url must be absolute")),
    }
    if uri.host().is_none() {
        return Err(invalid("url has no host"));
    }
    Ok(uri)
}
