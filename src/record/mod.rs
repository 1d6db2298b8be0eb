//! Case-file records and the immutable store that holds them

pub mod dataset;
pub mod store;
pub mod types;

pub use dataset::sample_records;
pub use store::{RecordError, RecordResult, RecordStore};
pub use types::{Classification, Record, RecordId, UnknownClassification};
