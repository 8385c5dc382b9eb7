//! Documentation lookup over parsed API reference pages
//!
//! Each page is parsed once into a `scraper::Html` tree. A lookup for member `name`
//! scans the pages in construction order (most-derived class first) for the first
//! `<dt>` whose `id` ends with `.name`, and returns the outer HTML of its parent
//! element, which holds the whole definition block (signature and description).

use crate::infrastructure::http_client::FetchedDocument;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

lazy_static! {
    /// Definition terms that carry an anchor id
    static ref TERM_SELECTOR: Selector = Selector::parse("dt[id]").expect("valid static selector");
}

/// A successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMatch {
    /// Index of the page the anchor was found in
    pub document_index: usize,
    /// Full anchor id, e.g. `PySide2.QtWidgets.PySide2.QtWidgets.QWidget.acceptDrops`
    pub anchor_id: String,
    /// Serialized container of the anchor
    pub html: String,
}

/// Read-only set of parsed documentation pages
pub struct DocScraper {
    documents: Vec<Html>,
}

impl DocScraper {
    /// Parse every page. Parsing is error-recovering, so malformed pages still produce
    /// a (possibly anchor-less) tree and never affect the other pages.
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents: Vec<Html> = documents
            .into_iter()
            .map(|text| Html::parse_document(text.as_ref()))
            .collect();
        info!("📚 DocScraper ready with {} documents", documents.len());
        Self { documents }
    }

    /// Scraper over the pages that were fetched, in fetch order
    pub fn from_fetched(documents: &[FetchedDocument]) -> Self {
        Self::new(documents.iter().map(|document| document.text.as_str()))
    }

    /// HTML of the definition block documenting `name`, or `None` if no page has it.
    pub fn get_doc(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|found| found.html)
    }

    /// Like `get_doc`, but also reports where the anchor was found.
    pub fn lookup(&self, name: &str) -> Option<DocMatch> {
        self.documents
            .iter()
            .enumerate()
            .find_map(|(document_index, document)| {
                let term = find_anchor(document, name)?;
                let container = term.parent().and_then(ElementRef::wrap)?;
                let anchor_id = term.value().id().unwrap_or_default().to_string();
                debug!(
                    "Found documentation for '{}' in document {} ({})",
                    name, document_index, anchor_id
                );
                Some(DocMatch {
                    document_index,
                    anchor_id,
                    html: container.html(),
                })
            })
            .or_else(|| {
                debug!(
                    "No documentation anchor for '{}' in {} documents",
                    name,
                    self.documents.len()
                );
                None
            })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl std::fmt::Debug for DocScraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocScraper")
            .field("documents", &self.documents.len())
            .finish()
    }
}

/// First anchor in document order whose id is `<anything>.<name>`
fn find_anchor<'a>(document: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    document
        .select(&TERM_SELECTOR)
        .find(|term| term.value().id().is_some_and(|id| anchor_matches(id, name)))
}

/// Anchored-suffix rule: the id must end with `.` followed by exactly `name`.
pub fn anchor_matches(id: &str, name: &str) -> bool {
    id.strip_suffix(name)
        .is_some_and(|prefix| prefix.ends_with('.'))
}
