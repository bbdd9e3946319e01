//! Error type definitions.
//!
//! This module defines the error types used throughout the analyzer.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Terminal failure of one page analysis.
///
/// Every variant carries enough context for a presentation layer to show a
/// message and, where meaningful, the HTTP status of the analyzed page. Link
/// probe failures never surface here; they become report entries instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The page could not be reached at all (DNS, connection refused, timeout).
    #[error("Failed to fetch URL: {message}")]
    Network {
        /// Underlying transport error chain
        message: String,
    },

    /// The page answered with a status of 400 or above.
    #[error("URL returned HTTP error: {message}")]
    HttpStatus {
        /// Status returned by the page
        status: u16,
        /// Status line, e.g. "404 Not Found"
        message: String,
    },

    /// The page answered successfully but is not HTML.
    #[error("URL is not an HTML page. Content-Type: {content_type}")]
    UnsupportedContentType {
        /// Status returned by the page
        status: u16,
        /// Raw `Content-Type` header value, empty if missing
        content_type: String,
    },

    /// The body was received but could not be turned into a document.
    #[error("Failed to parse HTML: {message}")]
    Parse {
        /// Status returned by the page
        status: u16,
        /// Why the body could not be read
        message: String,
    },

    /// The page URL itself could not be parsed as an absolute URL.
    #[error("Failed to parse base URL for link analysis: {message}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// URL parser error
        message: String,
    },
}

impl AnalysisError {
    /// HTTP status associated with the failure, or 0 when no response was received.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::Network { .. } | AnalysisError::InvalidUrl { .. } => 0,
            AnalysisError::HttpStatus { status, .. }
            | AnalysisError::UnsupportedContentType { status, .. }
            | AnalysisError::Parse { status, .. } => *status,
        }
    }

    /// Category of the failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisError::Network { .. } => FailureKind::Network,
            AnalysisError::HttpStatus { .. } => FailureKind::HttpStatus,
            AnalysisError::UnsupportedContentType { .. } => FailureKind::UnsupportedContentType,
            AnalysisError::Parse { .. } => FailureKind::Parse,
            AnalysisError::InvalidUrl { .. } => FailureKind::InvalidUrl,
        }
    }
}

/// Coarse category of an [`AnalysisError`], used for logging and exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIterMacro)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// See [`AnalysisError::Network`]
    Network,
    /// See [`AnalysisError::HttpStatus`]
    HttpStatus,
    /// See [`AnalysisError::UnsupportedContentType`]
    UnsupportedContentType,
    /// See [`AnalysisError::Parse`]
    Parse,
    /// See [`AnalysisError::InvalidUrl`]
    InvalidUrl,
}
