//! Browsing session state
//!
//! Two independent slices: filter criteria and expansion. Every operation
//! writes exactly one slice. Following a connection changes the person
//! filter and never the expansion; activating a record changes the
//! expansion and never the filters.

use super::expansion::Expansion;
use super::view::BrowserView;
use crate::filter::{apply_filters, ClassificationFilter, FilterCriteria, FilterEngine};
use crate::record::{Classification, RecordId, RecordStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while driving a session
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("`{0}` is not a connection of the expanded record")]
    ConnectionNotShown(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// State owned by a single browsing session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSession {
    criteria: FilterCriteria,
    expansion: Expansion,
}

impl BrowserSession {
    /// Fresh session: no filters, nothing expanded
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from previously captured state
    pub fn from_parts(criteria: FilterCriteria, expansion: Expansion) -> Self {
        Self { criteria, expansion }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_search(query);
    }

    pub fn set_person(&mut self, person: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_person(person);
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_role(role);
    }

    pub fn set_classification(&mut self, classification: Option<Classification>) {
        self.criteria.classification = classification.map(ClassificationFilter::from);
    }

    /// Set the classification filter from user text; unknown values match nothing
    pub fn set_classification_raw(&mut self, raw: &str) {
        self.criteria.classification = ClassificationFilter::parse(raw);
    }

    /// Reset all four criteria at once. Expansion is untouched.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new();
    }

    /// Toggle expansion of `id`
    pub fn activate_record(&mut self, id: RecordId) {
        self.expansion.activate(id);
        debug!("Expansion now {:?}", self.expansion.expanded());
    }

    /// Activate a connection tag inside the expanded card.
    ///
    /// Tags only exist on the expanded card while it is visible, so the name
    /// must be one of that card's connections.
    pub fn follow_connection(&mut self, store: &RecordStore, name: &str) -> SessionResult<()> {
        let shown = self
            .view(store)
            .connection_targets()
            .iter()
            .any(|c| c == name);
        if !shown {
            return Err(SessionError::ConnectionNotShown(name.to_string()));
        }
        self.set_person(name);
        Ok(())
    }

    /// Current render model, filtering with [`apply_filters`]
    pub fn view<'s>(&self, store: &'s RecordStore) -> BrowserView<'s> {
        let visible = apply_filters(store.records(), &self.criteria);
        BrowserView::build(&self.criteria, self.expansion, visible)
    }

    /// Current render model, filtering through a memoizing engine
    pub fn view_with<'s>(
        &self,
        engine: &mut FilterEngine,
        store: &'s Arc<RecordStore>,
    ) -> BrowserView<'s> {
        let visible = engine.apply(store, &self.criteria);
        BrowserView::build(&self.criteria, self.expansion, visible)
    }
}
