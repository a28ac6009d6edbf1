//! Row trait shared by every entity shown in a grid

use super::Value;

/// Identifier type used by every backend resource.
pub type EntityId = i64;

/// A record with a stable identifier whose attributes can be read by name.
///
/// Attribute names are the wire (camelCase) field names, e.g. `minimalPoint`.
/// Unknown attributes read as [`Value::Null`].
pub trait Row: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Unique identifier for this row.
    fn id(&self) -> EntityId;

    /// Returns the value of an attribute.
    fn value(&self, attribute: &str) -> Value;

    /// Short human label, used in confirmations.
    fn display_name(&self) -> String {
        format!("#{}", self.id())
    }
}
