//! page_analyzer library: single-page structure and link analysis
//!
//! This library fetches one web page and reports its markup version, title,
//! heading distribution, internal/external link counts, unreachable links and
//! whether it appears to contain a login form.
//!
//! # Example
//!
//! ```no_run
//! use page_analyzer::{analyze_url, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     max_concurrent_probes: 5,
//!     ..Default::default()
//! };
//!
//! let report = analyze_url(&config, "https://example.com/").await?;
//! println!("{} internal, {} external, {} unreachable",
//!          report.internal_links, report.external_links, report.unreachable_links.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Link probes are spawned as Tokio tasks.

#![warn(missing_docs)]

mod app;
mod check;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod parse;

use anyhow::{Context, Result};

// Re-export public API
pub use app::{render_report, render_text, validate_and_normalize_url};
pub use check::{
    probe_link, HttpProbe, LinkChecker, LinkProbe, ProbeError, ProbeMethod, ProbeResponse,
};
pub use config::{Cli, Config, LogFormat, LogLevel, ReportFormat};
pub use error_handling::{error_chain, AnalysisError, FailureKind, InitializationError};
pub use fetch::{AnalysisStage, PageAnalyzer};
pub use models::{AnalysisReport, ClassifiedLink, LinkKind, UnreachableLink};
pub use parse::{
    classify_doctype, detect_login_form, extract_page, is_skipped_href, resolve_link, PageExtraction,
};

/// Analyzes one page with HTTP clients built from `config`.
///
/// `url` must be an absolute http/https URL; run command-line input through
/// [`validate_and_normalize_url`] first.
///
/// # Errors
///
/// Returns an error if the HTTP clients cannot be built or if the analysis
/// fails. The analysis failure is an [`AnalysisError`] and can be recovered
/// with `downcast_ref`.
pub async fn analyze_url(config: &Config, url: &str) -> Result<AnalysisReport> {
    let analyzer = PageAnalyzer::from_config(config).context("Failed to initialize HTTP clients")?;
    let report = analyzer.analyze(url).await?;
    Ok(report)
}
