//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, concurrency cap, version labels)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, LogFormat, LogLevel, ReportFormat};
