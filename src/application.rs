//! Application layer module
//!
//! Composes the hierarchy resolver, the document fetcher and the scraper into the
//! operations the explorer front end calls.

pub mod explorer_session;

pub use explorer_session::{ExplorerSession, create_scraper};
