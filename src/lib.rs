//! Casefile
//!
//! A single-page case-file document browser: a fixed set of records shown as
//! filterable cards, each expandable to reveal connections between named
//! individuals.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! - [`record`]: the immutable, ordered record store (sample dataset or a
//!   validated JSON file)
//! - [`index`]: sorted, duplicate-free selector lists derived from the store
//! - [`filter`]: conjunctive person/classification/role/search filtering that
//!   never reorders records
//! - [`session`]: per-session filter criteria and single-record expansion,
//!   plus the render model
//! - [`http`]: the browser page and JSON API served over axum
//!
//! ## Example Usage
//!
//! ```rust
//! use casefile::{BrowserSession, Classification, RecordId, RecordStore};
//!
//! let store = RecordStore::sample();
//! let mut session = BrowserSession::new();
//!
//! session.set_classification(Some(Classification::Unsealed));
//! assert_eq!(session.view(&store).count, 4);
//!
//! // Expand Virginia Giuffre's complaint, then follow one of its connections
//! session.activate_record(RecordId::new(2));
//! session.follow_connection(&store, "Alan Dershowitz").unwrap();
//! assert_eq!(session.view(&store).count, 1);
//! assert_eq!(session.expansion().expanded(), Some(RecordId::new(2)));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod filter;
pub mod http;
pub mod index;
pub mod record;
pub mod session;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ServerConfig};
pub use filter::{apply_filters, ClassificationFilter, FilterCriteria, FilterEngine};
pub use http::HttpServer;
pub use index::{build_indexes, DerivedIndexes, IndexManager};
pub use record::{
    Classification, Record, RecordError, RecordId, RecordResult, RecordStore,
};
pub use session::{toggle, BrowserSession, BrowserView, Card, Expansion, SessionError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
