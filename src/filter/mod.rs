//! Filter engine module
//!
//! Multi-field, conjunctive, order-preserving filtering of the record store.

pub mod criteria;
pub mod engine;

pub use criteria::{ClassificationFilter, FilterCriteria};
pub use engine::{apply_filters, FilterEngine, DEFAULT_CACHE_CAPACITY};
