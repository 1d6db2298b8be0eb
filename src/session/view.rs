//! Render model handed to the presentation layer

use super::expansion::Expansion;
use crate::filter::FilterCriteria;
use crate::record::Record;
use serde::Serialize;

/// One visible card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub expanded: bool,
}

/// Everything needed to draw the results section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserView<'a> {
    pub criteria: FilterCriteria,
    pub expanded: Expansion,
    /// Number of filtered records
    pub count: usize,
    /// Drives the empty-state indicator
    pub is_empty: bool,
    pub cards: Vec<Card<'a>>,
}

impl<'a> BrowserView<'a> {
    pub(crate) fn build(
        criteria: &FilterCriteria,
        expansion: Expansion,
        visible: Vec<&'a Record>,
    ) -> Self {
        let cards: Vec<Card<'a>> = visible
            .into_iter()
            .map(|record| Card {
                record,
                expanded: expansion.is_expanded(record.id),
            })
            .collect();

        BrowserView {
            criteria: criteria.clone(),
            expanded: expansion,
            count: cards.len(),
            is_empty: cards.is_empty(),
            cards,
        }
    }

    /// The expanded card, if it is currently visible
    pub fn expanded_card(&self) -> Option<&Card<'a>> {
        self.cards.iter().find(|c| c.expanded)
    }

    /// Connection names that can be activated right now
    pub fn connection_targets(&self) -> &[String] {
        self.expanded_card()
            .map(|c| c.record.connections.as_slice())
            .unwrap_or(&[])
    }
}
