//! Page response validation.

use log::{debug, warn};
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use crate::config::HTTP_STATUS_BAD_REQUEST;
use crate::error_handling::AnalysisError;

/// Media types accepted as an HTML page.
const HTML_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// Fails with `HttpStatus` when the page answered with an error status.
pub(crate) fn check_status(status: reqwest::StatusCode) -> Result<(), AnalysisError> {
    if status.as_u16() >= HTTP_STATUS_BAD_REQUEST {
        return Err(AnalysisError::HttpStatus {
            status: status.as_u16(),
            message: status.to_string(),
        });
    }
    Ok(())
}

/// Returns the raw `Content-Type` header value, or an empty string.
pub(crate) fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Fails with `UnsupportedContentType` unless the content type indicates HTML.
///
/// A missing header does not indicate HTML and is rejected too.
pub(crate) fn check_html_content_type(status: u16, content_type: &str) -> Result<(), AnalysisError> {
    let lower = content_type.to_ascii_lowercase();
    if HTML_CONTENT_TYPES.iter().any(|ct| lower.contains(ct)) {
        debug!("Content-Type {content_type:?} accepted as HTML");
        return Ok(());
    }
    warn!("URL content type is not HTML: {content_type:?}");
    Err(AnalysisError::UnsupportedContentType {
        status,
        content_type: content_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use reqwest::StatusCode;

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NOT_MODIFIED).is_ok());

        let err = check_status(StatusCode::NOT_FOUND).expect_err("404 should fail");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "URL returned HTTP error: 404 Not Found");

        let err = check_status(StatusCode::SERVICE_UNAVAILABLE).expect_err("503 should fail");
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn test_content_type_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_type(&headers), "");
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        assert_eq!(content_type(&headers), "text/html; charset=utf-8");
    }

    #[test]
    fn test_html_content_types_accepted() {
        assert!(check_html_content_type(200, "text/html").is_ok());
        assert!(check_html_content_type(200, "TEXT/HTML; charset=ISO-8859-1").is_ok());
        assert!(check_html_content_type(200, "application/xhtml+xml").is_ok());
    }

    #[test]
    fn test_non_html_content_types_rejected() {
        let err = check_html_content_type(200, "application/json").expect_err("json");
        assert_eq!(
            err,
            AnalysisError::UnsupportedContentType {
                status: 200,
                content_type: "application/json".to_string(),
            }
        );
        assert!(check_html_content_type(200, "").is_err());
        assert!(check_html_content_type(200, "image/png").is_err());
    }
}
