//! Endpoint probe implementations.

use crate::types::{EndpointSpec, ProbeOutcome};
use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, warn};

/// Fixed per-request timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probes one endpoint and reduces the result to a health verdict.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe the endpoint once. Never retries.
    async fn probe(&self, endpoint: &EndpointSpec) -> ProbeOutcome;
}

/// Why a probe did not produce a status code.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ProbeError {
    /// Whether the failure is something other than ordinary unreachability.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ProbeError::InvalidMethod(_) | ProbeError::Unexpected(_))
    }

    fn from_reqwest(err: reqwest::Error, timeout_duration: Duration) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout(timeout_duration)
        } else if err.is_builder() {
            ProbeError::Unexpected(err.to_string())
        } else {
            ProbeError::Transport(err)
        }
    }
}

/// HTTP/HTTPS prober
pub struct HttpProber {
    client: reqwest::Client,
    timeout_duration: Duration,
}

impl HttpProber {
    /// Create a prober using the fixed [`PROBE_TIMEOUT`]
    pub fn new() -> common::Result<Self> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    /// Create a prober with a custom timeout
    pub fn with_timeout(timeout_duration: Duration) -> common::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()
            .map_err(common::Error::probe)?;

        Ok(Self {
            client,
            timeout_duration,
        })
    }

    /// Issue the request and return the response status.
    pub async fn execute(&self, endpoint: &EndpointSpec) -> Result<StatusCode, ProbeError> {
        let url = Url::parse(&endpoint.url).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProbeError::UnsupportedScheme(url.scheme().to_string()));
        }

        let method = Method::from_bytes(endpoint.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| ProbeError::InvalidMethod(endpoint.method.clone()))?;

        let mut request = self.client.request(method, url);
        if let Some(headers) = &endpoint.headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        match timeout(self.timeout_duration, request.send()).await {
            Ok(Ok(response)) => Ok(response.status()),
            Ok(Err(e)) => Err(ProbeError::from_reqwest(e, self.timeout_duration)),
            Err(_) => Err(ProbeError::Timeout(self.timeout_duration)),
        }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, endpoint: &EndpointSpec) -> ProbeOutcome {
        let start = Instant::now();
        let result = self.execute(endpoint).await;
        let duration_ms = start.elapsed().as_millis();

        match result {
            Ok(status) if status.is_success() => {
                debug!(url = %endpoint.url, status = status.as_u16(), duration_ms, "Endpoint is up");
                ProbeOutcome::Up
            }
            Ok(status) => {
                debug!(url = %endpoint.url, status = status.as_u16(), duration_ms, "Endpoint returned non-2xx status");
                ProbeOutcome::Down
            }
            Err(e) if e.is_unexpected() => {
                warn!(url = %endpoint.url, error = %e, "An error occurred while checking endpoint");
                ProbeOutcome::Down
            }
            Err(e) => {
                debug!(url = %endpoint.url, error = %e, duration_ms, "Endpoint is unreachable");
                ProbeOutcome::Down
            }
        }
    }
}
