//! HTML parsing and page-structure extraction.
//!
//! This module extracts structured data from a parsed document:
//! - Markup version (from the doctype)
//! - Page title and heading distribution
//! - Links, resolved and classified as internal or external
//! - Login form presence (heuristic)
//!
//! Extraction walks the `scraper` document tree once, in document order.

mod doctype;
mod extract;
mod links;
mod login_form;

// Re-export public API
pub use doctype::classify_doctype;
pub use extract::{extract_page, PageExtraction};
pub use links::{is_skipped_href, resolve_link};
pub use login_form::detect_login_form;
