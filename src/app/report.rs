//! Report rendering for the command-line binary.

use std::fmt::Write;

use crate::config::ReportFormat;
use crate::models::AnalysisReport;

const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Renders a report in the requested output format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_report(report: &AnalysisReport, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report),
        ReportFormat::Text => Ok(render_text(report)),
    }
}

/// Human-readable summary, one fact per line.
///
/// All six heading levels are listed so a reader can see zero counts at a glance.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let title = if report.title.is_empty() {
        "(none)"
    } else {
        report.title.as_str()
    };

    // Writing into a String cannot fail
    let _ = writeln!(out, "HTML version:   {}", report.html_version);
    let _ = writeln!(out, "Title:          {title}");
    let _ = writeln!(out, "Headings:");
    for level in HEADING_LEVELS {
        let _ = writeln!(out, "  {level}: {}", report.heading_count(level));
    }
    let _ = writeln!(out, "Internal links: {}", report.internal_links);
    let _ = writeln!(out, "External links: {}", report.external_links);
    let _ = writeln!(
        out,
        "Login form:     {}",
        if report.has_login_form { "yes" } else { "no" }
    );
    let _ = writeln!(
        out,
        "Unreachable links: {}",
        report.unreachable_links.len()
    );
    for link in &report.unreachable_links {
        let _ = writeln!(
            out,
            "  [{}] {} ({})",
            link.status_code, link.url, link.error
        );
    }
    out
}
