//! Transport execution: exactly one HTTP round trip per dispatch.
//!
//! No retries, no backoff, no circuit breaking. Any retry semantics the
//! remote API offers are ordinary query parameters passed through by the
//! binder, never local resilience behavior.

use crate::types::{Config, Error, Result};
use async_trait::async_trait;
use reqwest::Url;
use tokio_util::sync::CancellationToken;

/// A composed, transport-ready GET request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub url: Url,
    /// Header name/value pairs: `Accept` plus the optional credential.
    pub headers: Vec<(&'static str, String)>,
}

/// The raw outcome of one HTTP exchange, before decoding.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// One cancellable request/response round trip.
///
/// The trait is the seam between the engine and the network; tests inject
/// counting or scripted implementations through it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request, honoring `cancel`. Cancellation mid-flight
    /// aborts the connection and reports [`Error::Cancelled`]; the token
    /// must never affect other in-flight calls.
    async fn execute(&self, request: ApiRequest, cancel: &CancellationToken)
        -> Result<ApiResponse>;
}

/// Production transport over a pooled `reqwest` client.
///
/// Connection reuse across dispatches is an optimization of the underlying
/// pool; each call owns its request, connection lease, and response buffer
/// exclusively.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse> {
        let mut builder = self.client.get(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let round_trip = async {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(ApiResponse { status, body })
        };

        // Dropping the round-trip future on cancellation aborts the
        // in-flight connection and releases its resources.
        tokio::select! {
            _ = cancel.cancelled() => Err(Error::cancelled("dispatch cancelled by caller")),
            outcome = round_trip => outcome,
        }
    }
}
