//! Error handling.
//!
//! This module provides:
//! - The terminal failure type of one analysis (`AnalysisError`)
//! - Initialization errors for logger and HTTP client setup
//!
//! Failures are categorized into:
//! - **Network**: the page could not be reached (status 0)
//! - **HttpStatus**: the page answered with status >= 400
//! - **UnsupportedContentType**: the page is not HTML
//! - **Parse**: the body could not be turned into a document

mod chain;
mod types;

// Re-export public API
pub use chain::error_chain;
pub use types::{AnalysisError, FailureKind, InitializationError};
