//! Login form detection (basic heuristics).

use log::debug;
use scraper::ElementRef;

use crate::config::{LOGIN_NAME_HINTS, PIN_NAME_HINT};

/// Signals collected from the descendants of one `<form>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FormSignals {
    has_password_input: bool,
    has_login_named_input: bool,
    has_pin_input: bool,
    has_submit_button: bool,
}

impl FormSignals {
    fn is_login_form(&self) -> bool {
        let user_pass =
            self.has_login_named_input && self.has_password_input && self.has_submit_button;
        let pin = self.has_pin_input && self.has_submit_button;
        user_pass || pin
    }
}

/// Checks whether a `<form>` element looks like a login form.
///
/// A form qualifies when it has a submit button plus either a password input
/// together with a username-like text/email input, or an input whose name
/// mentions a PIN. Password-only forms (e.g. "set new password") do not qualify.
pub fn detect_login_form(form: ElementRef<'_>) -> bool {
    let mut signals = FormSignals::default();

    for node in form.descendants() {
        let Some(element) = node.value().as_element() else {
            continue;
        };
        match element.name() {
            "input" => {
                // A missing type attribute means a text input
                let input_type = element
                    .attr("type")
                    .map(|t| t.trim().to_ascii_lowercase())
                    .unwrap_or_else(|| "text".to_string());
                let name = element
                    .attr("name")
                    .map(str::to_ascii_lowercase)
                    .unwrap_or_default();

                let is_password = input_type == "password";
                let is_text_like = matches!(input_type.as_str(), "text" | "email");
                let is_numeric = matches!(input_type.as_str(), "tel" | "number");

                if is_password {
                    signals.has_password_input = true;
                }
                if is_text_like && LOGIN_NAME_HINTS.iter().any(|hint| name.contains(hint)) {
                    signals.has_login_named_input = true;
                }
                if (is_text_like || is_numeric || is_password) && name.contains(PIN_NAME_HINT) {
                    signals.has_pin_input = true;
                }
            }
            "button" => {
                // Buttons inside a form submit unless told otherwise
                let is_submit = element
                    .attr("type")
                    .map(|t| {
                        let t = t.trim();
                        t.is_empty() || t.eq_ignore_ascii_case("submit")
                    })
                    .unwrap_or(true);
                if is_submit {
                    signals.has_submit_button = true;
                }
            }
            _ => {}
        }
    }

    debug!("Login form detection details: {signals:?}");
    signals.is_login_form()
}
