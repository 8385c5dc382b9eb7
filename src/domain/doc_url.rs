//! Hierarchy-to-URL resolution
//!
//! Maps every toolkit class in an object's ancestor chain to the documentation page
//! `{base}/{namespace-path}/{ClassName}.html`. Pure computation: no I/O happens here.

use crate::domain::class_chain::{ClassChain, ClassDescriptor, Introspect};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// PySide2 documentation site used unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://doc.qt.io/qtforpython/PySide2";
/// Namespace whose descendants are documented on the site
pub const DEFAULT_ROOT_NAMESPACE: &str = "PySide2";

/// Where a toolkit's documentation lives and which namespace it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSite {
    pub base_url: String,
    pub root_namespace: String,
}

impl Default for DocSite {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
        }
    }
}

impl DocSite {
    pub fn new(base_url: impl Into<String>, root_namespace: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            root_namespace: root_namespace.into(),
        }
    }

    /// Page URL for one class, or `None` if the class is outside the toolkit.
    pub fn page_url(&self, class: &ClassDescriptor) -> Option<String> {
        let relative = class.relative_namespace(&self.root_namespace)?;
        let path = relative.replace('.', "/");
        Some(format!(
            "{}/{}/{}.html",
            self.base_url.trim_end_matches('/'),
            path,
            class.name
        ))
    }

    /// Page URLs for a chain, same relative order, non-toolkit classes dropped.
    pub fn chain_urls(&self, chain: &ClassChain) -> Vec<String> {
        chain
            .iter()
            .filter_map(|class| self.page_url(class))
            .collect()
    }
}

/// Documentation URLs for an object's class and all its toolkit ancestors,
/// most-derived first.
pub fn resolve_doc_urls<T: Introspect + ?Sized>(object: &T, site: &DocSite) -> Vec<String> {
    let urls = site.chain_urls(&object.class_chain());
    for url in &urls {
        debug!("Resolved documentation page: {}", url);
    }
    urls
}
