//! Configuration constants.
//!
//! This module defines the constants used throughout the analyzer, including
//! timeouts, the link-check concurrency cap, and the labels produced by the
//! doctype classifier.

use std::time::Duration;

// Link accessibility checking
/// Maximum number of link probes in flight at once (semaphore limit)
pub const LINK_CHECK_CONCURRENCY: usize = 10;
/// Per-probe timeout in seconds, applied to both the HEAD attempt and the GET fallback
pub const LINK_CHECK_TIMEOUT_SECS: u64 = 10;
/// `LINK_CHECK_TIMEOUT_SECS` as a `Duration`
pub const LINK_CHECK_TIMEOUT: Duration = Duration::from_secs(LINK_CHECK_TIMEOUT_SECS);

/// Timeout for fetching the analyzed page itself
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirect hops followed when fetching the analyzed page
pub const MAX_REDIRECT_HOPS: usize = 10;

/// User-Agent sent with every link probe so site owners can identify the checker.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const PROBE_USER_AGENT: &str = "WebAnalyzerBot/1.0 (+http://example.com/bot)";

/// Maximum URL length (2048 characters) accepted on the command line.
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Markup version labels
/// Doctype `html` with no public or system id
pub const HTML5_LABEL: &str = "HTML5";
/// Public id mentions "XHTML 1.0 Strict"
pub const XHTML_10_STRICT_LABEL: &str = "XHTML 1.0 Strict";
/// Public id mentions "XHTML 1.0 Transitional"
pub const XHTML_10_TRANSITIONAL_LABEL: &str = "XHTML 1.0 Transitional";
/// HTML 4.01 public id with a strict marker
pub const HTML_401_STRICT_LABEL: &str = "HTML 4.01 Strict";
/// HTML 4.01 Transitional public id
pub const HTML_401_TRANSITIONAL_LABEL: &str = "HTML 4.01 Transitional";
/// `html` doctype with an unrecognized public id
pub const UNKNOWN_WITH_PUBLIC_ID_LABEL: &str = "Unknown HTML (with Public ID)";
/// `html` doctype with only a system id
pub const UNKNOWN_HTML_VERSION_LABEL: &str = "HTML (Unknown Version)";
/// Label used when the document carries no doctype at all
pub const NO_DOCTYPE_LABEL: &str = "Unknown or No Doctype";

/// `href` prefixes (lowercased) that never produce a probeable link
pub const SKIPPED_HREF_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:"];

/// Substrings of an input `name` that mark it as a username-like login field
pub const LOGIN_NAME_HINTS: &[&str] = &["user", "email", "login", "pass"];
/// Substring of an input `name` that marks it as a PIN field
pub const PIN_NAME_HINT: &str = "pin";

// HTTP status codes (for clarity and consistency)
/// First status treated as an error
pub const HTTP_STATUS_BAD_REQUEST: u16 = 400;
/// HEAD rejected; triggers the GET fallback
pub const HTTP_STATUS_METHOD_NOT_ALLOWED: u16 = 405;
/// HEAD not implemented; triggers the GET fallback
pub const HTTP_STATUS_NOT_IMPLEMENTED: u16 = 501;
