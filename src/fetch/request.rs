//! Page request construction.

/// Content types the page fetch asks for, HTML first.
const PAGE_ACCEPT: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.5";
const PAGE_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Headers sent with the page fetch (not with link probes).
///
/// Some servers content-negotiate and answer a bare `*/*` request with JSON
/// or a redirect to an API; asking for HTML explicitly avoids that.
pub(crate) struct PageRequestHeaders;

impl PageRequestHeaders {
    /// Returns headers as (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(&'static str, &'static str)> {
        vec![
            ("accept", PAGE_ACCEPT),
            ("accept-language", PAGE_ACCEPT_LANGUAGE),
        ]
    }

    /// Applies the page headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, PAGE_ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, PAGE_ACCEPT_LANGUAGE)
    }
}
