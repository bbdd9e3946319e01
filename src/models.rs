use std::collections::BTreeMap;

use serde::Serialize;

/// Structured result of one successful page analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Markup version inferred from the doctype
    pub html_version: String,
    /// Trimmed page title, empty if the page has none
    pub title: String,
    /// Occurrences per heading level ("h1".."h6"); levels that never occur are absent
    pub headings: BTreeMap<String, usize>,
    /// Links on the same scheme and host as the page
    pub internal_links: usize,
    /// All other links
    pub external_links: usize,
    /// Links that failed their reachability probe, in completion order
    pub unreachable_links: Vec<UnreachableLink>,
    /// Whether any form looked like a login form
    pub has_login_form: bool,
}

impl AnalysisReport {
    /// Count for one heading level, 0 when the level never occurred.
    pub fn heading_count(&self, level: &str) -> usize {
        self.headings.get(level).copied().unwrap_or(0)
    }

    /// Internal plus external link count.
    pub fn total_links(&self) -> usize {
        self.internal_links + self.external_links
    }
}

/// One link that failed its probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreachableLink {
    /// Absolute URL that was checked
    pub url: String,
    /// HTTP status of the failed probe; 0 for network-level failures
    pub status_code: u16,
    /// Status line (e.g. "404 Not Found") or the underlying network error
    pub error: String,
}

/// Whether a link stays on the analyzed page's scheme and host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Same scheme and host as the page
    Internal,
    /// Different scheme or host
    External,
}

/// A link discovered in the document, resolved to an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    /// Absolute URL
    pub url: String,
    /// Internal or external
    pub kind: LinkKind,
}
