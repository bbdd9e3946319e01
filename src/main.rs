//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_analyzer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_analyzer::initialization::init_logger_with;
use page_analyzer::{render_report, validate_and_normalize_url, Cli, Config, PageAnalyzer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some(url) = validate_and_normalize_url(&cli.url) else {
        eprintln!("page_analyzer error: invalid URL: {}", cli.url);
        process::exit(1);
    };

    let analyzer = PageAnalyzer::from_config(&config).context("Failed to initialize HTTP clients")?;

    match analyzer.analyze(&url).await {
        Ok(report) => {
            let rendered = render_report(&report, cli.format).context("Failed to render report")?;
            println!("{}", rendered.trim_end());
            Ok(())
        }
        Err(e) => {
            eprintln!("page_analyzer error: {e} (status code {})", e.status_code());
            process::exit(1);
        }
    }
}
