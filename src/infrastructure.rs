//! Infrastructure layer for fetching and scraping documentation
//!
//! This module provides the HTTP document source, the HTML lookup engine, and the
//! configuration and logging plumbing around them.

pub mod config; // Configuration file and defaults
pub mod doc_scraper; // HTML anchor lookup
pub mod http_client; // Page fetching
pub mod logging; // Logging infrastructure

// Re-export commonly used items
pub use config::{AppConfig, ConfigManager, DocSiteConfig, LoggingConfig};
pub use doc_scraper::{DocMatch, DocScraper};
pub use http_client::{
    DocumentSource, FetchedDocument, HttpClient, HttpClientConfig, StaticDocumentSource,
    fetch_documents,
};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
