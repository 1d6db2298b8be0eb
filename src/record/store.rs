//! Immutable in-memory record store
//!
//! The store is built once and never mutated. Everything derived from it
//! (indexes, filter results) is a pure function of the store plus the
//! caller's filter and selection state.

use super::types::{Record, RecordId};
use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading records from an external source
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Record {0} appears more than once")]
    DuplicateId(RecordId),

    #[error("Record ids must be positive, found {0}")]
    InvalidId(RecordId),

    #[error("Record {id}: field `{field}` must not be empty")]
    EmptyField { id: RecordId, field: &'static str },

    #[error("Record {id}: `{date}` is not a YYYY-MM-DD date")]
    InvalidDate { id: RecordId, date: String },

    #[error("Malformed record data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RecordResult<T> = Result<T, RecordError>;

/// Ordered, immutable collection of records
///
/// Uses a hash map for O(1) lookup by id:
/// - records: position -> Record (original order, never re-sorted)
/// - by_id: RecordId -> position
///
/// Ids are expected to be unique. `new` does not check this; when violated,
/// lookups by id resolve to the first record carrying that id.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    by_id: FxHashMap<RecordId, usize>,
}

impl RecordStore {
    /// Build a store from records already known to be well formed
    pub fn new(records: Vec<Record>) -> Self {
        let mut by_id = FxHashMap::default();
        for (pos, record) in records.iter().enumerate() {
            by_id.entry(record.id).or_insert(pos);
        }
        RecordStore { records, by_id }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped 12-record dataset
    pub fn sample() -> Self {
        Self::new(super::dataset::sample_records())
    }

    /// Parse and validate a JSON array of records
    pub fn from_json_str(json: &str) -> RecordResult<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        validate(&records)?;
        Ok(Self::new(records))
    }

    /// Read and validate a JSON dataset file
    pub fn load(path: impl AsRef<Path>) -> RecordResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(records: &[Record]) -> RecordResult<()> {
    let mut seen = FxHashSet::default();
    for record in records {
        if record.id.as_u64() == 0 {
            return Err(RecordError::InvalidId(record.id));
        }
        if !seen.insert(record.id) {
            return Err(RecordError::DuplicateId(record.id));
        }
        let fields = [
            ("person", &record.person),
            ("role", &record.role),
            ("documentType", &record.document_type),
            ("summary", &record.summary),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(RecordError::EmptyField { id: record.id, field });
            }
        }
        if !is_calendar_date(&record.date) {
            return Err(RecordError::InvalidDate {
                id: record.id,
                date: record.date.clone(),
            });
        }
    }
    Ok(())
}

/// Strict `YYYY-MM-DD`: fixed width, unsigned, zero-padded, and a real date
fn is_calendar_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shaped && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
