//! Equality filter over the canonical dataset

use crate::model::Row;

/// Active filter: rows whose `attribute` renders to `value`, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    attribute: String,
    value: String,
}

impl FilterState {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches<R: Row>(&self, row: &R) -> bool {
        row.value(&self.attribute).matches_text(&self.value)
    }

    /// Rows of `canonical` matching the filter, in canonical order.
    pub fn apply<R: Row>(&self, canonical: &[R]) -> Vec<R> {
        canonical
            .iter()
            .filter(|row| self.matches(*row))
            .cloned()
            .collect()
    }
}

/// Filter form contents before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub attribute: String,
    pub value: String,
}
