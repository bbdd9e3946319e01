//! Command-line URL validation and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes the URL given on the command line.
///
/// Surrounding whitespace is trimmed and `https://` is prepended when no scheme
/// is given. The result must parse as an absolute http/https URL with a
/// non-empty host and be at most `MAX_URL_LENGTH` characters long.
///
/// Logs a warning and returns `None` when the URL is rejected.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        warn!("Rejecting empty URL");
        return None;
    }

    let normalized = match url.split_once("://") {
        Some((scheme, _)) if is_web_scheme(scheme) => url.to_string(),
        Some((scheme, _)) if !scheme.is_empty() && !scheme.contains(['/', '.', ':']) => {
            warn!("Rejecting unsupported scheme {scheme:?} for URL: {url}");
            return None;
        }
        _ => format!("https://{url}"),
    };

    // Checked after the prefix so "https://" cannot push a URL over the limit
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if !is_web_scheme(parsed.scheme()) => {
            warn!("Rejecting unsupported scheme for URL: {url}");
            None
        }
        Ok(parsed) if !parsed.host_str().is_some_and(|host| !host.is_empty()) => {
            warn!("Rejecting URL without a host: {url}");
            None
        }
        Ok(_) => Some(normalized),
        Err(e) => {
            warn!("Rejecting invalid URL {url}: {e}");
            None
        }
    }
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_adds_https_when_scheme_missing() {
        assert_eq!(
            validate_and_normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("example.com/path?query=value"),
            Some("https://example.com/path?query=value".to_string())
        );
    }

    #[test]
    fn test_preserves_http_and_https() {
        assert_eq!(
            validate_and_normalize_url("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("https://example.com/login"),
            Some("https://example.com/login".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("HTTP://Example.com"),
            Some("HTTP://Example.com".to_string())
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_and_normalize_url("  https://example.com \n"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_with_port_and_ipv6() {
        assert_eq!(
            validate_and_normalize_url("example.com:8080"),
            Some("https://example.com:8080".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("[2001:db8::1]"),
            Some("https://[2001:db8::1]".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("http://127.0.0.1:3000/page"),
            Some("http://127.0.0.1:3000/page".to_string())
        );
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        assert_eq!(validate_and_normalize_url("ftp://example.com"), None);
        assert_eq!(validate_and_normalize_url("file:///etc/passwd"), None);
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert_eq!(validate_and_normalize_url(""), None);
        assert_eq!(validate_and_normalize_url("   "), None);
        assert_eq!(validate_and_normalize_url("https://"), None);
        assert_eq!(validate_and_normalize_url("http://"), None);
        assert_eq!(validate_and_normalize_url("://example.com"), None);
        assert_eq!(validate_and_normalize_url("not a valid url!!!"), None);
    }

    #[test]
    fn test_length_limit() {
        // "https://example.com/" is 20 chars
        let at_limit = format!("https://example.com/{}", "a".repeat(2028));
        assert_eq!(at_limit.len(), 2048);
        assert!(validate_and_normalize_url(&at_limit).is_some());

        let over = format!("https://example.com/{}", "a".repeat(2029));
        assert_eq!(validate_and_normalize_url(&over), None);

        // Under the limit until the https:// prefix is added
        let grows_over = format!("example.com/{}", "a".repeat(2030));
        assert!(grows_over.len() <= 2048);
        assert_eq!(validate_and_normalize_url(&grows_over), None);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_normalization_is_idempotent(url in "[a-z]{3,20}\\.[a-z]{2,5}(/[a-z]{1,10}){0,3}") {
            if let Some(once) = validate_and_normalize_url(&url) {
                prop_assert_eq!(validate_and_normalize_url(&once), Some(once.clone()));
            }
        }

        #[test]
        fn test_bare_domains_get_https(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            let normalized = validate_and_normalize_url(&domain);
            prop_assert_eq!(normalized, Some(format!("https://{domain}")));
        }

        #[test]
        fn test_arbitrary_input_does_not_panic(input in "\\PC{0,200}") {
            let _ = validate_and_normalize_url(&input);
        }
    }
}
