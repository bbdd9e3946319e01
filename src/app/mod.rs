//! Command-line application helpers.
//!
//! URL validation for the positional argument and report rendering for stdout.

pub mod report;
pub mod url;

// Re-export public API
pub use report::{render_report, render_text};
pub use url::validate_and_normalize_url;
