//! Filter engine
//!
//! `apply_filters` is the reference: a stable, order-preserving filter over
//! a record slice. `FilterEngine` wraps it with an LRU of results keyed by
//! criteria, scoped to one record store at a time.

use super::criteria::{ClassificationFilter, FilterCriteria, Matcher};
use crate::record::{Record, RecordStore};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of distinct criteria whose results are retained
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Records satisfying every set criterion, in their original order
pub fn apply_filters<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let matcher = Matcher::new(criteria);
    records.iter().filter(|r| matcher.matches(r)).collect()
}

fn matching_positions(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matcher.matches(r))
        .map(|(pos, _)| pos)
        .collect()
}

/// Memoizing filter engine
///
/// Observable results are identical to [`apply_filters`]; the cache only
/// avoids rescanning for criteria seen recently against the same store.
pub struct FilterEngine {
    source: Option<Arc<RecordStore>>,
    cache: LruCache<FilterCriteria, Arc<[usize]>>,
    hits: u64,
    misses: u64,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create an engine retaining up to `capacity` results (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            source: None,
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Filter `store` by `criteria`
    pub fn apply<'s>(
        &mut self,
        store: &'s Arc<RecordStore>,
        criteria: &FilterCriteria,
    ) -> Vec<&'s Record> {
        let same_store = self
            .source
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, store));
        if !same_store {
            debug!("Record store changed, dropping {} cached results", self.cache.len());
            self.cache.clear();
            self.source = Some(Arc::clone(store));
        }

        if let Some(ClassificationFilter::Unrecognized(raw)) = criteria.classification() {
            warn!("Unrecognized classification filter `{}` matches no records", raw);
        }

        let positions = match self.cache.get(criteria) {
            Some(positions) => {
                self.hits += 1;
                debug!("Filter cache hit ({} records)", positions.len());
                Arc::clone(positions)
            }
            None => {
                self.misses += 1;
                let positions: Arc<[usize]> = matching_positions(store.records(), criteria).into();
                debug!("Filter cache miss ({} records)", positions.len());
                self.cache.put(criteria.clone(), Arc::clone(&positions));
                positions
            }
        };

        let records = store.records();
        positions.iter().map(|&pos| &records[pos]).collect()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEngine")
            .field("cached", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Classification;

    fn ids(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|r| r.id.as_u64()).collect()
    }

    #[test]
    fn test_unconstrained_returns_everything_in_order() {
        let store = RecordStore::sample();
        let result = apply_filters(store.records(), &FilterCriteria::new());
        assert_eq!(ids(&result), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::empty();
        let criteria = FilterCriteria::new().with_search("anything");
        assert!(apply_filters(store.records(), &criteria).is_empty());
        assert!(apply_filters(store.records(), &FilterCriteria::new()).is_empty());
    }

    #[test]
    fn test_engine_matches_reference() {
        let store = Arc::new(RecordStore::sample());
        let mut engine = FilterEngine::with_capacity(4);
        let criteria = [
            FilterCriteria::new(),
            FilterCriteria::new().with_classification(Classification::Unsealed),
            FilterCriteria::new().with_search("flight"),
            FilterCriteria::new().with_role("Named Individual").with_search("deposition"),
            FilterCriteria::new().with_classification_raw("BOGUS"),
        ];
        for _ in 0..2 {
            for c in &criteria {
                let expected = apply_filters(store.records(), c);
                assert_eq!(ids(&engine.apply(&store, c)), ids(&expected));
            }
        }
        assert!(engine.hits() > 0);
    }

    #[test]
    fn test_engine_cache_scoped_to_store() {
        let sample = Arc::new(RecordStore::sample());
        let empty = Arc::new(RecordStore::empty());
        let mut engine = FilterEngine::new();
        let criteria = FilterCriteria::new();

        assert_eq!(engine.apply(&sample, &criteria).len(), 12);
        assert_eq!(engine.apply(&sample, &criteria).len(), 12);
        assert_eq!(engine.hits(), 1);

        assert!(engine.apply(&empty, &criteria).is_empty());
        assert_eq!(engine.misses(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let store = Arc::new(RecordStore::sample());
        let mut engine = FilterEngine::with_capacity(0);
        assert_eq!(engine.apply(&store, &FilterCriteria::new()).len(), 12);
    }
}
