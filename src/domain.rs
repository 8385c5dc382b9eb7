//! Domain module - class hierarchies, documentation URLs and explorer models
//!
//! Everything here is pure computation over type metadata. Network access and HTML
//! parsing live in the infrastructure layer.
//!
//! Modern Rust module organization (Rust 2018+ style):
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod catalog;
pub mod class_chain;
pub mod doc_url;
pub mod hierarchy;
pub mod members;
pub mod signal_log;

pub use catalog::pyside2_registry;
pub use class_chain::{ClassChain, ClassDescriptor, Introspect};
pub use doc_url::{DocSite, resolve_doc_urls};
pub use hierarchy::{Instance, TypeRegistry};
pub use members::{MemberCapabilities, MemberInfo, MemberKind, MemberTable};
pub use signal_log::SignalLog;
