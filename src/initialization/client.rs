//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients the
//! analyzer uses: one for fetching the analyzed page and one for link probes.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to fetch the analyzed page.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Page timeout from the configuration
/// - Redirect following (up to `MAX_REDIRECT_HOPS` hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.page_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(client)
}

/// Initializes the HTTP client used for link probes.
///
/// Each probe (HEAD, and the GET fallback) is bounded by the probe timeout and
/// carries the configured User-Agent so site owners can identify the checker.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.probe_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
