//! Sorted, duplicate-free value lists for the filter selectors

use crate::record::{Classification, Record};
use serde::Serialize;
use std::collections::BTreeSet;

/// Selector contents derived from a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedIndexes {
    /// Distinct `person` values, ascending
    pub persons: Vec<String>,
    /// Distinct `role` values, ascending
    pub roles: Vec<String>,
    /// Always the full classification list in declared order
    pub classifications: Vec<Classification>,
}

impl DerivedIndexes {
    pub fn is_person(&self, name: &str) -> bool {
        self.persons.binary_search_by(|p| p.as_str().cmp(name)).is_ok()
    }

    pub fn is_role(&self, role: &str) -> bool {
        self.roles.binary_search_by(|r| r.as_str().cmp(role)).is_ok()
    }
}

impl Default for DerivedIndexes {
    fn default() -> Self {
        build_indexes(&[])
    }
}

/// Build the person, role and classification indexes.
///
/// Ordering is byte-wise lexicographic over UTF-8 (case-sensitive), i.e. by
/// Unicode scalar value, so the output is deterministic for identical input. The classification list never depends
/// on the data.
pub fn build_indexes(records: &[Record]) -> DerivedIndexes {
    let persons: BTreeSet<&str> = records.iter().map(|r| r.person.as_str()).collect();
    let roles: BTreeSet<&str> = records.iter().map(|r| r.role.as_str()).collect();

    DerivedIndexes {
        persons: persons.into_iter().map(str::to_string).collect(),
        roles: roles.into_iter().map(str::to_string).collect(),
        classifications: Classification::ALL.to_vec(),
    }
}
