//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::constants::{
    DEFAULT_PAGE_TIMEOUT_SECS, LINK_CHECK_CONCURRENCY, LINK_CHECK_TIMEOUT_SECS, PROBE_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the finished report is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use page_analyzer::Config;
///
/// let config = Config {
///     max_concurrent_probes: 4,
///     check_links: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Timeout for fetching the analyzed page, in seconds
    pub page_timeout_seconds: u64,

    /// Timeout for each link probe (HEAD and GET fallback), in seconds
    pub probe_timeout_seconds: u64,

    /// Maximum link probes in flight at once
    pub max_concurrent_probes: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Probe every discovered link for reachability
    pub check_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            page_timeout_seconds: DEFAULT_PAGE_TIMEOUT_SECS,
            probe_timeout_seconds: LINK_CHECK_TIMEOUT_SECS,
            max_concurrent_probes: LINK_CHECK_CONCURRENCY,
            user_agent: PROBE_USER_AGENT.to_string(),
            check_links: true,
        }
    }
}

/// Command-line options for the `page_analyzer` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "page_analyzer",
    version,
    about = "Fetches a web page and reports its doctype, title, headings, links and login forms"
)]
pub struct Cli {
    /// Page to analyze (http or https; https:// is assumed when no scheme is given)
    pub url: String,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Timeout for fetching the page, in seconds
    #[arg(long, default_value_t = DEFAULT_PAGE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Timeout for each link probe, in seconds
    #[arg(long, default_value_t = LINK_CHECK_TIMEOUT_SECS)]
    pub probe_timeout_seconds: u64,

    /// Maximum link probes in flight at once (1 to 10)
    #[arg(long, default_value_t = LINK_CHECK_CONCURRENCY, value_parser = parse_concurrency_cap)]
    pub max_concurrent_probes: usize,

    /// User-Agent sent with every request
    #[arg(long, default_value = PROBE_USER_AGENT)]
    pub user_agent: String,

    /// Skip the link reachability check
    #[arg(long)]
    pub no_link_check: bool,
}

/// Parses `--max-concurrent-probes`, accepting only `1..=LINK_CHECK_CONCURRENCY`.
fn parse_concurrency_cap(value: &str) -> Result<usize, String> {
    let cap: usize = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if (1..=LINK_CHECK_CONCURRENCY).contains(&cap) {
        Ok(cap)
    } else {
        Err(format!(
            "must be between 1 and {LINK_CHECK_CONCURRENCY}, got {cap}"
        ))
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
            page_timeout_seconds: cli.timeout_seconds,
            probe_timeout_seconds: cli.probe_timeout_seconds,
            max_concurrent_probes: cli.max_concurrent_probes.clamp(1, LINK_CHECK_CONCURRENCY),
            user_agent: cli.user_agent.clone(),
            check_links: !cli.no_link_check,
        }
    }
}
