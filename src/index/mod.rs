//! Derived index module
//!
//! Provides the sorted selector lists computed from the record store.

pub mod derived;
pub mod manager;

pub use derived::{build_indexes, DerivedIndexes};
pub use manager::IndexManager;
