//! Page analysis orchestration.
//!
//! One analysis moves through `fetching -> validating -> extracting -> probing -> done`.
//! Any failure before probing is terminal and ends in `failed`; there are no
//! retries at this level. Link probe failures are never terminal, they become
//! report entries.

mod request;
mod response;

use log::{debug, info, trace, warn};
use scraper::Html;
use strum_macros::Display;
use url::Url;

use crate::check::{HttpProbe, LinkChecker, LinkProbe};
use crate::config::Config;
use crate::error_handling::{error_chain, AnalysisError, InitializationError};
use crate::initialization::init_client;
use crate::models::AnalysisReport;
use crate::parse::{extract_page, PageExtraction};

use request::PageRequestHeaders;
use response::{check_html_content_type, check_status, content_type};

/// Stage of one analysis, logged as it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AnalysisStage {
    /// Sending the page request
    Fetching,
    /// Checking status and content type
    Validating,
    /// Reading and walking the document
    Extracting,
    /// Checking discovered links
    Probing,
    /// Report assembled
    Done,
    /// Terminal failure before a report
    Failed,
}

/// Fetches a page, extracts its structure and checks its links.
///
/// # Examples
///
/// ```no_run
/// use page_analyzer::{Config, PageAnalyzer};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = PageAnalyzer::from_config(&Config::default())?;
/// let report = analyzer.analyze("https://example.com/").await?;
/// println!("{} ({})", report.title, report.html_version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PageAnalyzer<P: LinkProbe = HttpProbe> {
    client: reqwest::Client,
    checker: LinkChecker<P>,
    check_links: bool,
}

impl PageAnalyzer<HttpProbe> {
    /// Builds an analyzer with `reqwest` clients for both the page fetch and the probes.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if either client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let checker = LinkChecker::new(HttpProbe::from_config(config)?, config.max_concurrent_probes);
        Ok(Self::new(client, checker, config.check_links))
    }
}

impl<P: LinkProbe> PageAnalyzer<P> {
    /// Builds an analyzer from an already configured page client and link checker.
    pub fn new(client: reqwest::Client, checker: LinkChecker<P>, check_links: bool) -> Self {
        Self {
            client,
            checker,
            check_links,
        }
    }

    /// Analyzes one page.
    ///
    /// `page_url` is expected to be an absolute http/https URL already
    /// validated by the caller.
    ///
    /// Links are resolved and classified against the URL the fetch ends on
    /// after redirects, not `page_url`. A page that redirects from http to
    /// https therefore counts its https links as internal.
    ///
    /// # Errors
    ///
    /// - `Network` (status 0) when the page cannot be reached
    /// - `HttpStatus` when the page answers with status >= 400
    /// - `UnsupportedContentType` when the page is not HTML
    /// - `Parse` when the body cannot be read as text
    /// - `InvalidUrl` when `page_url` is not an absolute URL
    pub async fn analyze(&self, page_url: &str) -> Result<AnalysisReport, AnalysisError> {
        match self.run(page_url).await {
            Ok(report) => {
                debug!("Analysis of {page_url} reached stage {}", AnalysisStage::Done);
                Ok(report)
            }
            Err(e) => {
                warn!(
                    "Analysis of {page_url} reached stage {} ({}, status {}): {e}",
                    AnalysisStage::Failed,
                    e.kind(),
                    e.status_code()
                );
                Err(e)
            }
        }
    }

    async fn run(&self, page_url: &str) -> Result<AnalysisReport, AnalysisError> {
        let url = Url::parse(page_url).map_err(|e| AnalysisError::InvalidUrl {
            url: page_url.to_string(),
            message: e.to_string(),
        })?;

        log_stage(page_url, AnalysisStage::Fetching);
        trace!("Page request headers: {:?}", PageRequestHeaders::as_vec());
        let response = PageRequestHeaders::apply_to_request_builder(self.client.get(url))
            .send()
            .await
            .map_err(|e| AnalysisError::Network {
                message: error_chain(&e),
            })?;
        let status = response.status();
        info!("Fetched {page_url}: {status}");

        log_stage(page_url, AnalysisStage::Validating);
        check_status(status)?;
        check_html_content_type(status.as_u16(), &content_type(response.headers()))?;

        log_stage(page_url, AnalysisStage::Extracting);
        // Relative links resolve against where redirects ended up
        let base = response.url().clone();
        let body = response.text().await.map_err(|e| AnalysisError::Parse {
            status: status.as_u16(),
            message: error_chain(&e),
        })?;
        let extraction = parse_and_extract(&body, &base);
        info!("HTML version for {page_url}: {}", extraction.html_version);

        log_stage(page_url, AnalysisStage::Probing);
        let links = extraction.link_urls();
        let unreachable = if !self.check_links {
            debug!("Link checking disabled, skipping {} link(s)", links.len());
            Vec::new()
        } else if links.is_empty() {
            debug!("No links found to check for accessibility");
            Vec::new()
        } else {
            let unreachable = self.checker.check_links(&links).await;
            info!(
                "Link accessibility check complete: {} of {} unreachable",
                unreachable.len(),
                links.len()
            );
            unreachable
        };

        Ok(extraction.into_report(unreachable))
    }
}

/// Parses the body and runs the extractor.
///
/// Kept synchronous so the parsed document never lives across an await point.
fn parse_and_extract(body: &str, base: &Url) -> PageExtraction {
    let document = Html::parse_document(body);
    extract_page(&document, base)
}

fn log_stage(page_url: &str, stage: AnalysisStage) {
    debug!("Analysis of {page_url}: {stage}");
}
