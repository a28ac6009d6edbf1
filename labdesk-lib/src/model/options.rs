//! Dropdown options for relation fields

use super::EntityId;

/// One entry of a relation dropdown in a create/update form.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Identifier of the referenced record.
    pub value: EntityId,
    /// Text shown to the operator.
    pub label: String,
}

impl SelectOption {
    /// Creates a new option.
    pub fn new(value: EntityId, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}
