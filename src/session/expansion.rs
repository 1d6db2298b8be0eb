//! Single-record expansion state

use crate::record::RecordId;
use serde::{Deserialize, Serialize};

/// Expansion after activating `clicked` while `current` is expanded.
///
/// Activating the expanded record collapses it; activating any other record
/// expands that one instead.
pub fn toggle(current: Option<RecordId>, clicked: RecordId) -> Option<RecordId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// At most one expanded record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expansion(Option<RecordId>);

impl Expansion {
    pub fn none() -> Self {
        Expansion(None)
    }

    pub fn of(id: RecordId) -> Self {
        Expansion(Some(id))
    }

    pub fn expanded(&self) -> Option<RecordId> {
        self.0
    }

    pub fn is_expanded(&self, id: RecordId) -> bool {
        self.0 == Some(id)
    }

    /// Apply [`toggle`] in place
    pub fn activate(&mut self, clicked: RecordId) {
        self.0 = toggle(self.0, clicked);
    }

    /// The expansion that activating `clicked` would produce
    pub fn toggled(self, clicked: RecordId) -> Self {
        Expansion(toggle(self.0, clicked))
    }
}

impl From<Option<RecordId>> for Expansion {
    fn from(id: Option<RecordId>) -> Self {
        Expansion(id)
    }
}
