use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::Record;

/// Dropdown value that leaves a field unconstrained.
pub const ALL: &str = "all";

/// A single dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldFilter {
    All,
    Equals(String),
}

impl FieldFilter {
    pub fn is_active(&self) -> bool {
        matches!(self, FieldFilter::Equals(_))
    }
}

impl From<String> for FieldFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            FieldFilter::All
        } else {
            FieldFilter::Equals(value)
        }
    }
}

impl From<&str> for FieldFilter {
    fn from(value: &str) -> Self {
        FieldFilter::from(value.to_string())
    }
}

impl From<FieldFilter> for String {
    fn from(value: FieldFilter) -> Self {
        match value {
            FieldFilter::All => ALL.to_string(),
            FieldFilter::Equals(value) => value,
        }
    }
}

/// Free-text query plus field-to-value selections, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: BTreeMap<String, FieldFilter>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldFilter>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// True when neither the query nor any selection constrains the result.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && !self.filters.values().any(FieldFilter::is_active)
    }

    /// Per-record predicate behind [`filter`].
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_query(record, &self.query.to_lowercase()) && self.matches_fields(record)
    }

    fn matches_query<R: Record>(&self, record: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        R::SEARCHABLE.iter().any(|name| {
            record
                .field(name)
                .is_some_and(|value| value.contains_lowercase(needle))
        })
    }

    // Selections on fields the entity does not expose as filterable are ignored.
    fn matches_fields<R: Record>(&self, record: &R) -> bool {
        self.filters.iter().all(|(name, selection)| match selection {
            FieldFilter::All => true,
            FieldFilter::Equals(expected) => {
                if !R::FILTERABLE.contains(&name.as_str()) {
                    return true;
                }
                record
                    .field(name)
                    .is_some_and(|value| value.matches(expected))
            }
        })
    }
}

/// Narrows `collection` to the records matching `spec`, keeping input order.
pub fn filter<'a, R: Record>(collection: &'a [R], spec: &FilterSpec) -> Vec<&'a R> {
    let needle = spec.query.to_lowercase();
    let matches: Vec<&R> = collection
        .iter()
        .filter(|record| spec.matches_query(*record, &needle) && spec.matches_fields(*record))
        .collect();

    debug!(
        total = collection.len(),
        matched = matches.len(),
        query = %spec.query,
        "filter pass"
    );
    matches
}
