//! Core type definitions for case-file records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        RecordId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

/// Disclosure status attached to every record.
///
/// The set is closed: no value outside these three is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Declassified,
    #[serde(alias = "PARTIALLY REDACTED")]
    PartiallyRedacted,
    Unsealed,
}

impl Classification {
    /// All classifications in declared order
    pub const ALL: [Classification; 3] = [
        Classification::Declassified,
        Classification::PartiallyRedacted,
        Classification::Unsealed,
    ];

    /// Wire form, as accepted by filters and the JSON API
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Declassified => "DECLASSIFIED",
            Classification::PartiallyRedacted => "PARTIALLY_REDACTED",
            Classification::Unsealed => "UNSEALED",
        }
    }

    /// Human-readable badge text
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Declassified => "DECLASSIFIED",
            Classification::PartiallyRedacted => "PARTIALLY REDACTED",
            Classification::Unsealed => "UNSEALED",
        }
    }

    /// CSS class used by the card badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Classification::Declassified => "classification-declassified",
            Classification::PartiallyRedacted => "classification-redacted",
            Classification::Unsealed => "classification-unsealed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown classification: {0}")]
pub struct UnknownClassification(pub String);

impl FromStr for Classification {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DECLASSIFIED" => Ok(Classification::Declassified),
            "PARTIALLY_REDACTED" | "PARTIALLY REDACTED" => Ok(Classification::PartiallyRedacted),
            "UNSEALED" => Ok(Classification::Unsealed),
            other => Err(UnknownClassification(other.to_string())),
        }
    }
}

/// One case-file entry.
///
/// Records are immutable once built; the store hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub person: String,
    pub role: String,
    pub document_type: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`), display only
    pub date: String,
    pub summary: String,
    pub classification: Classification,
    /// Related persons, in display order. Not required to name other records.
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Record {
    /// Whether `name` appears among this record's connections
    pub fn is_connected_to(&self, name: &str) -> bool {
        self.connections.iter().any(|c| c == name)
    }
}
