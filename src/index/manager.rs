//! Manager for derived indexes
//!
//! Recomputes the selector indexes whenever it is handed a different
//! record store, and serves the cached copy otherwise.

use super::derived::{build_indexes, DerivedIndexes};
use crate::record::RecordStore;
use std::sync::Arc;
use tracing::debug;

/// Holds the indexes of the most recently seen store
#[derive(Debug, Default)]
pub struct IndexManager {
    source: Option<Arc<RecordStore>>,
    indexes: Arc<DerivedIndexes>,
    rebuilds: u64,
}

impl IndexManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager already primed for `store`
    pub fn for_store(store: &Arc<RecordStore>) -> Self {
        let mut manager = Self::new();
        manager.indexes(store);
        manager
    }

    /// Indexes for `store`, rebuilding only if the store changed
    pub fn indexes(&mut self, store: &Arc<RecordStore>) -> Arc<DerivedIndexes> {
        let unchanged = self
            .source
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, store));

        if !unchanged {
            self.indexes = Arc::new(build_indexes(store.records()));
            self.source = Some(Arc::clone(store));
            self.rebuilds += 1;
            debug!(
                "Rebuilt indexes: {} persons, {} roles",
                self.indexes.persons.len(),
                self.indexes.roles.len()
            );
        }
        Arc::clone(&self.indexes)
    }

    /// Number of times the indexes have been rebuilt
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_only_on_store_change() {
        let sample = Arc::new(RecordStore::sample());
        let mut manager = IndexManager::new();

        let first = manager.indexes(&sample);
        let second = manager.indexes(&sample);
        assert_eq!(manager.rebuilds(), 1);
        assert!(Arc::ptr_eq(&first, &second));

        let empty = Arc::new(RecordStore::empty());
        let third = manager.indexes(&empty);
        assert_eq!(manager.rebuilds(), 2);
        assert!(third.persons.is_empty());
        assert_eq!(third.classifications.len(), 3);
    }

    #[test]
    fn test_equal_content_different_store_rebuilds() {
        let a = Arc::new(RecordStore::sample());
        let b = Arc::new(RecordStore::sample());
        let mut manager = IndexManager::for_store(&a);
        assert_eq!(manager.rebuilds(), 1);
        let rebuilt = manager.indexes(&b);
        assert_eq!(manager.rebuilds(), 2);
        assert_eq!(rebuilt.persons.len(), 12);
    }
}
