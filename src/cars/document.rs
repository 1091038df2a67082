//! Parsed HTML document wrapper.
//!
//! Parsing is delegated to `scraper` (html5ever), which recovers from
//! malformed markup instead of failing. The resulting tree is immutable and
//! borrowed by the extractor.

use crate::cars::client::FetchedPage;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// A parsed page, read-only for the rest of the run.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML string into a document tree.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            trace!("HTML parser recovered from {} errors", html.errors.len());
        }
        Self { html }
    }

    /// Parses a fetched page, consuming it so the body is released here.
    pub fn from_page(page: FetchedPage) -> Self {
        debug!("Parsing {} bytes from {}", page.body.len(), page.url);
        Self::parse(&page.body)
    }

    /// The `<html>` element; the parser always creates one.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Number of markup errors the parser recovered from.
    pub fn error_count(&self) -> usize {
        self.html.errors.len()
    }
}
