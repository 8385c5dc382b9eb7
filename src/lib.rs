//! Widget Explorer - runtime widget inspector with scraped API documentation
//!
//! Resolves an explored object's toolkit class hierarchy to documentation pages,
//! fetches them, and looks up the documentation block of any member on demand.

// Module declarations
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export the operations the explorer front end needs
pub use application::{ExplorerSession, create_scraper};
pub use domain::{ClassChain, ClassDescriptor, DocSite, Introspect, resolve_doc_urls};
pub use error::{DocError, DocResult};
pub use infrastructure::{DocScraper, DocumentSource, HttpClient};
