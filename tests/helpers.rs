// Shared test helpers for mock-server setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use page_analyzer::Config;

/// Config with short timeouts so failing probes do not stall the suite.
#[allow(dead_code)] // Used by other test files
pub fn test_config() -> Config {
    Config {
        page_timeout_seconds: 5,
        probe_timeout_seconds: 3,
        ..Default::default()
    }
}

/// Serves `html` as `text/html` for GET `route`.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html.as_bytes().to_vec(), "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Answers `verb` on `route` with a bare status.
#[allow(dead_code)]
pub async fn mount_status(server: &MockServer, verb: &str, route: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Absolute URL for `route` on the mock server.
#[allow(dead_code)]
pub fn url_for(server: &MockServer, route: &str) -> String {
    format!("{}{}", server.uri(), route)
}
