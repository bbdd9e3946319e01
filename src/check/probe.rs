//! Probe transport: the single HTTP request behind each reachability check.

use std::future::Future;

use strum_macros::Display;
use thiserror::Error;

use crate::config::Config;
use crate::error_handling::{error_chain, InitializationError};
use crate::initialization::init_probe_client;

/// HTTP method used for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ProbeMethod {
    /// Lightweight probe, tried first
    #[strum(serialize = "HEAD")]
    Head,
    /// Fallback when HEAD is rejected
    #[strum(serialize = "GET")]
    Get,
}

/// Status of a probe that received an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// Numeric HTTP status
    pub status: u16,
    /// Status line such as "404 Not Found"
    pub status_text: String,
}

impl ProbeResponse {
    /// Builds a response from a status code and its status line.
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }
}

/// A probe that never got an HTTP response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The request could not be built (e.g. the URL is not usable by the client).
    #[error("Failed to create request: {0}")]
    Request(String),

    /// DNS failure, refused connection, timeout, or any other transport error.
    #[error("{0}")]
    Network(String),
}

/// Issues one probe request and reports its status.
///
/// The checker calls this at most twice per link (HEAD, then GET on method
/// rejection). Implementations apply their own timeout.
pub trait LinkProbe: Send + Sync + 'static {
    fn send(
        &self,
        method: ProbeMethod,
        url: &str,
    ) -> impl Future<Output = Result<ProbeResponse, ProbeError>> + Send;
}

/// `reqwest`-backed probe with a fixed timeout and identifying User-Agent.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Wraps an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a probe client from the configuration's probe timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_probe_client(config)?))
    }
}

impl LinkProbe for HttpProbe {
    async fn send(&self, method: ProbeMethod, url: &str) -> Result<ProbeResponse, ProbeError> {
        let request = match method {
            ProbeMethod::Head => self.client.head(url),
            ProbeMethod::Get => self.client.get(url),
        };
        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ProbeError::Request(error_chain(&e))
            } else {
                ProbeError::Network(error_chain(&e))
            }
        })?;
        let status = response.status();
        Ok(ProbeResponse::new(status.as_u16(), status.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_method_display() {
        assert_eq!(ProbeMethod::Head.to_string(), "HEAD");
        assert_eq!(ProbeMethod::Get.to_string(), "GET");
    }

    #[test]
    fn test_probe_error_display() {
        assert_eq!(
            ProbeError::Request("bad url".to_string()).to_string(),
            "Failed to create request: bad url"
        );
        assert_eq!(
            ProbeError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_http_probe_from_default_config() {
        assert!(HttpProbe::from_config(&Config::default()).is_ok());
    }

    #[tokio::test]
    async fn test_http_probe_refused_connection_is_network_error() {
        // Port 1 on localhost is essentially never listening
        let probe = HttpProbe::from_config(&Config {
            probe_timeout_seconds: 2,
            ..Default::default()
        })
        .expect("client should build");
        let result = probe.send(ProbeMethod::Head, "http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(ProbeError::Network(_))));
    }

    #[tokio::test]
    async fn test_http_probe_unusable_url_is_request_error() {
        let probe = HttpProbe::from_config(&Config::default()).expect("client should build");
        let result = probe.send(ProbeMethod::Head, "not a url").await;
        assert!(matches!(result, Err(ProbeError::Request(_))));
    }
}
