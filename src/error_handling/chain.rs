//! Error chain flattening.

use std::error::Error;

/// Joins an error and its sources into one line, skipping sources whose text
/// is already part of the message.
///
/// `reqwest` hides the useful part ("Connection refused", "dns error") in the
/// source chain, so the top-level `Display` alone is rarely enough.
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
