//! Single-pass document extraction.
//!
//! Walks the parsed tree once in document order and accumulates the title,
//! heading counts, classified links, login-form flag and markup version.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use scraper::{ElementRef, Html, Node};
use url::Url;

use super::doctype::classify_doctype;
use super::links::{is_skipped_href, resolve_link};
use super::login_form::detect_login_form;
use crate::config::NO_DOCTYPE_LABEL;
use crate::models::{AnalysisReport, ClassifiedLink, LinkKind, UnreachableLink};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Everything the extractor learned about a page, before link probing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    /// Version label from the doctype
    pub html_version: String,
    /// Trimmed title, empty if absent
    pub title: String,
    /// Occurrences per heading level
    pub headings: BTreeMap<String, usize>,
    /// Internal link count
    pub internal_links: usize,
    /// External link count
    pub external_links: usize,
    /// Whether a login form was detected
    pub has_login_form: bool,
    /// Links to probe, in document order; duplicates are kept
    pub links: Vec<ClassifiedLink>,
}

impl PageExtraction {
    /// Absolute URLs of every discovered link, in document order.
    pub fn link_urls(&self) -> Vec<String> {
        self.links.iter().map(|link| link.url.clone()).collect()
    }

    /// Assembles the final report from the extraction and the probe results.
    pub fn into_report(self, unreachable_links: Vec<UnreachableLink>) -> AnalysisReport {
        AnalysisReport {
            html_version: self.html_version,
            title: self.title,
            headings: self.headings,
            internal_links: self.internal_links,
            external_links: self.external_links,
            unreachable_links,
            has_login_form: self.has_login_form,
        }
    }
}

/// Accumulator threaded through the traversal.
struct Extractor<'u> {
    base: &'u Url,
    title: Option<String>,
    html_version: Option<String>,
    out: PageExtraction,
}

impl<'u> Extractor<'u> {
    fn new(base: &'u Url) -> Self {
        Self {
            base,
            title: None,
            html_version: None,
            out: PageExtraction::default(),
        }
    }

    fn visit_doctype(&mut self, name: &str, public_id: &str, system_id: &str) {
        if self.html_version.is_some() {
            return;
        }
        debug!(
            "Doctype found: name={:?} public={:?} system={:?}",
            name, public_id, system_id
        );
        self.html_version = Some(classify_doctype(name, public_id, system_id));
    }

    fn visit_element(&mut self, element: ElementRef<'_>) {
        let tag = element.value().name();
        match tag {
            "title" => self.visit_title(element),
            "a" | "link" => self.visit_link(tag, element),
            "form" => self.visit_form(element),
            _ if HEADING_TAGS.contains(&tag) => {
                let count = self.out.headings.entry(tag.to_string()).or_insert(0);
                *count += 1;
            }
            _ => {}
        }
    }

    fn visit_title(&mut self, element: ElementRef<'_>) {
        if self.title.is_some() {
            return;
        }
        let text = element
            .first_child()
            .and_then(|child| child.value().as_text().map(|t| t.trim().to_string()));
        if let Some(text) = text {
            self.title = Some(text);
        }
    }

    fn visit_link(&mut self, tag: &str, element: ElementRef<'_>) {
        let Some(href) = element.value().attr("href") else {
            return;
        };
        let href = href.trim();
        if is_skipped_href(href) {
            return;
        }
        match resolve_link(self.base, href) {
            Ok(link) => {
                match link.kind {
                    LinkKind::Internal => self.out.internal_links += 1,
                    LinkKind::External => self.out.external_links += 1,
                }
                debug!("Found {:?} link in <{}>: {}", link.kind, tag, link.url);
                self.out.links.push(link);
            }
            Err(e) => {
                warn!(
                    "Could not parse link {:?} against {}: {}",
                    href, self.base, e
                );
            }
        }
    }

    fn visit_form(&mut self, form: ElementRef<'_>) {
        if self.out.has_login_form {
            return;
        }
        if detect_login_form(form) {
            info!("Login form detected on page {}", self.base);
            self.out.has_login_form = true;
        }
    }

    fn finish(mut self) -> PageExtraction {
        self.out.title = self.title.unwrap_or_default();
        self.out.html_version = self
            .html_version
            .unwrap_or_else(|| NO_DOCTYPE_LABEL.to_string());
        self.out
    }
}

/// Extracts structural signals from a parsed document in a single pass.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `base` - Absolute URL of the page, used to resolve and classify links
pub fn extract_page(document: &Html, base: &Url) -> PageExtraction {
    let mut extractor = Extractor::new(base);
    for node in document.tree.root().descendants() {
        if let Some(element) = ElementRef::wrap(node) {
            extractor.visit_element(element);
        } else if let Node::Doctype(doctype) = node.value() {
            extractor.visit_doctype(doctype.name(), doctype.public_id(), doctype.system_id());
        }
    }
    let extraction = extractor.finish();
    debug!(
        "Extracted {} link(s) ({} internal, {} external), {} heading level(s)",
        extraction.links.len(),
        extraction.internal_links,
        extraction.external_links,
        extraction.headings.len()
    );
    extraction
}
