//! Exploration session for a single object
//!
//! Opening a session resolves the object's documentation pages, fetches them one after
//! another and builds the scraper. The session then lives as long as the explorer
//! window: it answers documentation lookups for clicked members, holds the classified
//! member list, and collects the signals the object emits.

use crate::domain::class_chain::Introspect;
use crate::domain::doc_url::{DocSite, resolve_doc_urls};
use crate::domain::members::MemberTable;
use crate::domain::signal_log::SignalLog;
use crate::infrastructure::doc_scraper::DocScraper;
use crate::infrastructure::http_client::{DocumentSource, fetch_documents};
use std::fmt::Display;
use tracing::info;

/// Resolve, fetch and parse the documentation for `object`.
pub async fn create_scraper<T, S>(object: &T, site: &DocSite, source: &S) -> DocScraper
where
    T: Introspect + ?Sized,
    S: DocumentSource + ?Sized,
{
    let urls = resolve_doc_urls(object, site);
    let documents = fetch_documents(source, &urls).await;
    DocScraper::from_fetched(&documents)
}

/// State of one exploration
#[derive(Debug)]
pub struct ExplorerSession {
    doc_urls: Vec<String>,
    loaded_urls: Vec<String>,
    scraper: DocScraper,
    members: MemberTable,
    signals: SignalLog,
}

impl ExplorerSession {
    /// Start exploring `object`. Pages that fail to load are skipped; the session
    /// opens even when no documentation is available.
    pub async fn open<T, S>(object: &T, site: &DocSite, source: &S) -> Self
    where
        T: Introspect + ?Sized,
        S: DocumentSource + ?Sized,
    {
        let doc_urls = resolve_doc_urls(object, site);
        let documents = fetch_documents(source, &doc_urls).await;
        let loaded_urls = documents.iter().map(|d| d.url.clone()).collect();
        let scraper = DocScraper::from_fetched(&documents);
        let members = MemberTable::from_members(object.members());

        info!(
            "🔍 Explorer session opened: {} members, {}/{} documentation pages",
            members.len(),
            scraper.len(),
            doc_urls.len()
        );

        Self {
            doc_urls,
            loaded_urls,
            scraper,
            members,
            signals: SignalLog::new(),
        }
    }

    /// Documentation block for a member, `None` when no page documents it
    pub fn doc_for(&self, member: &str) -> Option<String> {
        self.scraper.get_doc(member)
    }

    pub const fn scraper(&self) -> &DocScraper {
        &self.scraper
    }

    pub const fn members(&self) -> &MemberTable {
        &self.members
    }

    /// Every page URL resolved for the object, most-derived first
    pub fn doc_urls(&self) -> &[String] {
        &self.doc_urls
    }

    /// The subset of `doc_urls` that was fetched successfully
    pub fn loaded_urls(&self) -> &[String] {
        &self.loaded_urls
    }

    pub fn documents_loaded(&self) -> usize {
        self.scraper.len()
    }

    pub fn record_signal<A: Display>(&mut self, name: &str, args: &[A]) {
        self.signals.record(name, args);
    }

    pub const fn signal_log(&self) -> &SignalLog {
        &self.signals
    }

    pub fn clear_signals(&mut self) {
        self.signals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::pyside2_registry;
    use crate::domain::members::MemberKind;
    use crate::infrastructure::http_client::StaticDocumentSource;

    const WIDGET_PAGE: &str = r#"<html><body>
        <dl class="method"><dt id="PySide2.QtWidgets.PySide2.QtWidgets.QWidget.show">show()</dt>
        <dd>Shows the widget.</dd></dl>
    </body></html>"#;

    #[tokio::test]
    async fn test_session_skips_missing_pages() {
        let registry = pyside2_registry().unwrap();
        let button = registry.instantiate("QPushButton").unwrap();
        let source = StaticDocumentSource::new().with_page(
            "https://doc.qt.io/qtforpython/PySide2/QtWidgets/QWidget.html",
            WIDGET_PAGE,
        );

        let session = ExplorerSession::open(&button, &DocSite::default(), &source).await;

        assert_eq!(session.doc_urls().len(), 5);
        assert_eq!(
            session.loaded_urls(),
            &["https://doc.qt.io/qtforpython/PySide2/QtWidgets/QWidget.html".to_string()]
        );
        assert_eq!(session.documents_loaded(), 1);
        assert!(session.doc_for("show").unwrap().contains("Shows the widget."));
        assert_eq!(session.doc_for("click"), None);
        assert!(session.members().group(MemberKind::Event).contains("clicked"));
    }

    #[tokio::test]
    async fn test_signal_log_lifecycle() {
        let registry = pyside2_registry().unwrap();
        let combo = registry.instantiate("QComboBox").unwrap();
        let source = StaticDocumentSource::new();
        let mut session = ExplorerSession::open(&combo, &DocSite::default(), &source).await;

        assert_eq!(session.documents_loaded(), 0);
        session.record_signal("currentIndexChanged", &[1]);
        session.record_signal("currentTextChanged", &["bar"]);
        assert_eq!(
            session.signal_log().render(),
            "currentIndexChanged(1)\ncurrentTextChanged(bar)"
        );

        session.clear_signals();
        assert!(session.signal_log().is_empty());
    }

    #[tokio::test]
    async fn test_create_scraper() {
        let registry = pyside2_registry().unwrap();
        let widget = registry.instantiate("QWidget").unwrap();
        let source = StaticDocumentSource::new().with_page(
            "https://doc.qt.io/qtforpython/PySide2/QtWidgets/QWidget.html",
            WIDGET_PAGE,
        );

        let scraper = create_scraper(&widget, &DocSite::default(), &source).await;
        assert_eq!(scraper.len(), 1);
        assert!(scraper.get_doc("show").is_some());
    }
}
