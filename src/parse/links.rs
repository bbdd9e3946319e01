//! Link resolution and internal/external classification.

use url::Url;

use crate::config::SKIPPED_HREF_SCHEMES;
use crate::models::{ClassifiedLink, LinkKind};

/// Returns `true` for `href` values that never point at a probeable resource:
/// empty, fragment-only, or a `javascript:`, `mailto:` or `tel:` target.
///
/// The value is expected to be trimmed already.
pub fn is_skipped_href(href: &str) -> bool {
    if href.is_empty() || href.starts_with('#') {
        return true;
    }
    let lower = href.to_ascii_lowercase();
    SKIPPED_HREF_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Resolves an attribute value against the page URL and classifies the result.
///
/// Absolute values pass through; relative values are merged with the base's
/// scheme, authority and path. A link is internal when its scheme and host
/// match the base (hosts compared case-insensitively), external otherwise.
///
/// # Errors
///
/// Returns the `url` parse error for malformed references. Callers drop such
/// links rather than failing the analysis.
pub fn resolve_link(base: &Url, href: &str) -> Result<ClassifiedLink, url::ParseError> {
    let resolved = base.join(href)?;
    let kind = classify(base, &resolved);
    Ok(ClassifiedLink {
        url: resolved.to_string(),
        kind,
    })
}

fn classify(base: &Url, resolved: &Url) -> LinkKind {
    let same_scheme = resolved.scheme() == base.scheme();
    let same_host = match (resolved.host_str(), base.host_str()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    };
    if same_scheme && same_host {
        LinkKind::Internal
    } else {
        LinkKind::External
    }
}
