//! Error types for hierarchy resolution and documentation fetching
//!
//! Lookups that find nothing are not errors (`Option::None`); these variants cover
//! malformed class hierarchies and per-URL fetch failures, the latter being
//! recoverable because a missing page only means less documentation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("Unknown class: {name}")]
    UnknownClass { name: String },

    #[error("Class already registered: {name}")]
    DuplicateClass { name: String },

    #[error("Cannot linearize bases of {class}: inconsistent hierarchy")]
    InconsistentHierarchy { class: String },

    #[error("HTTP request failed for {url}: {message}")]
    Request { url: String, message: String },

    #[error("HTTP request failed with status {status}: {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DocError {
    pub fn request(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Request {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn http_status(url: &str, status: u16) -> Self {
        Self::HttpStatus {
            url: url.to_string(),
            status,
        }
    }

    pub fn unknown_class(name: &str) -> Self {
        Self::UnknownClass {
            name: name.to_string(),
        }
    }

    /// Fetch errors only cost one document; everything else is a caller mistake.
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Request { .. } | Self::HttpStatus { .. } | Self::Io(_) => true,
            Self::UnknownClass { .. }
            | Self::DuplicateClass { .. }
            | Self::InconsistentHierarchy { .. }
            | Self::InvalidUrl { .. }
            | Self::Config { .. } => false,
        }
    }
}

impl From<std::io::Error> for DocError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type DocResult<T> = Result<T, DocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_are_recoverable() {
        assert!(DocError::http_status("https://example.com/a.html", 404).is_recoverable());
        assert!(DocError::request("https://example.com/a.html", "connection refused").is_recoverable());
        assert!(!DocError::unknown_class("QFoo").is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = DocError::http_status("https://example.com/a.html", 500);
        assert_eq!(
            err.to_string(),
            "HTTP request failed with status 500: https://example.com/a.html"
        );
    }
}
