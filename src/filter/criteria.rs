//! Filter criteria owned by a browsing session

use crate::record::{Classification, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification constraint as entered by the user.
///
/// Input outside the closed enum is kept rather than rejected, and matches
/// no record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ClassificationFilter {
    Is(Classification),
    Unrecognized(String),
}

impl ClassificationFilter {
    /// Parse raw input. Empty input means "no constraint".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<Classification>() {
            Ok(c) => ClassificationFilter::Is(c),
            Err(_) => ClassificationFilter::Unrecognized(raw.to_string()),
        })
    }

    pub fn matches(&self, classification: Classification) -> bool {
        match self {
            ClassificationFilter::Is(c) => *c == classification,
            ClassificationFilter::Unrecognized(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClassificationFilter::Is(c) => c.as_str(),
            ClassificationFilter::Unrecognized(raw) => raw,
        }
    }
}

impl From<Classification> for ClassificationFilter {
    fn from(c: Classification) -> Self {
        ClassificationFilter::Is(c)
    }
}

impl From<ClassificationFilter> for String {
    fn from(filter: ClassificationFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for ClassificationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClassificationFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ClassificationFilter::parse(&raw)
            .unwrap_or(ClassificationFilter::Unrecognized(raw)))
    }
}

/// The current combination of person/classification/role/search constraints.
///
/// `None` and `Some("")` both mean "no constraint" for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub person: Option<String>,
    pub classification: Option<ClassificationFilter>,
    pub role: Option<String>,
    pub search: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

impl FilterCriteria {
    /// Criteria with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = non_empty(person);
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification.into());
        self
    }

    pub fn with_classification_raw(mut self, raw: &str) -> Self {
        self.classification = ClassificationFilter::parse(raw);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = non_empty(role);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = non_empty(query);
        self
    }

    /// Whether no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.person().is_none()
            && self.classification().is_none()
            && self.role().is_none()
            && self.search().is_none()
    }

    pub fn person(&self) -> Option<&str> {
        self.person.as_deref().filter(|p| !p.is_empty())
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.is_empty())
    }

    pub fn classification(&self) -> Option<&ClassificationFilter> {
        self.classification.as_ref().filter(|c| !c.as_str().is_empty())
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|q| !q.is_empty())
    }

    /// Single-record check. Prefer [`crate::filter::apply_filters`] for
    /// whole collections, which lowercases the query once.
    pub fn matches(&self, record: &Record) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Criteria prepared for repeated evaluation
pub(crate) struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: Option<String>,
}

impl<'c> Matcher<'c> {
    pub(crate) fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search().map(str::to_lowercase),
        }
    }

    pub(crate) fn matches(&self, record: &Record) -> bool {
        let person = self
            .criteria
            .person()
            .map_or(true, |p| p == record.person);
        let classification = self
            .criteria
            .classification()
            .map_or(true, |c| c.matches(record.classification));
        let role = self.criteria.role().map_or(true, |r| r == record.role);
        let search = self.needle.as_deref().map_or(true, |needle| {
            [&record.person, &record.summary, &record.document_type]
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
        });

        person && classification && role && search
    }
}
