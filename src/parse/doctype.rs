//! Markup version classification from the document's doctype.
//!
//! This is a heuristic over the common W3C public identifiers, not a complete
//! doctype registry. Anything it does not recognize lands in an "unknown" bucket.

use crate::config::{
    HTML5_LABEL, HTML_401_STRICT_LABEL, HTML_401_TRANSITIONAL_LABEL, UNKNOWN_HTML_VERSION_LABEL,
    UNKNOWN_WITH_PUBLIC_ID_LABEL, XHTML_10_STRICT_LABEL, XHTML_10_TRANSITIONAL_LABEL,
};

/// Maps a doctype's name, public id and system id to a version label.
///
/// Rules are checked in order and the first match wins. The name is compared
/// case-insensitively; the ids are trimmed before matching.
pub fn classify_doctype(name: &str, public_id: &str, system_id: &str) -> String {
    let name = name.trim().to_ascii_lowercase();
    let public_id = public_id.trim();
    let system_id = system_id.trim();

    if name != "html" {
        return format!("Unknown Doctype ({name})");
    }

    if public_id.is_empty() && system_id.is_empty() {
        return HTML5_LABEL.to_string();
    }

    let label = if public_id.contains("XHTML 1.0 Strict") {
        XHTML_10_STRICT_LABEL
    } else if public_id.contains("XHTML 1.0 Transitional") {
        XHTML_10_TRANSITIONAL_LABEL
    } else if public_id.contains("HTML 4.01//EN")
        && (public_id.contains("Strict") || system_id.contains("strict.dtd"))
    {
        HTML_401_STRICT_LABEL
    } else if public_id.contains("HTML 4.01 Transitional//EN") {
        HTML_401_TRANSITIONAL_LABEL
    } else if !public_id.is_empty() {
        UNKNOWN_WITH_PUBLIC_ID_LABEL
    } else {
        UNKNOWN_HTML_VERSION_LABEL
    };
    label.to_string()
}
