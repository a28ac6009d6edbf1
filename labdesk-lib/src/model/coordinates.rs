//! Coordinates entity

use serde::Deserialize;
use serde::Serialize;

use super::EntityId;
use super::Row;
use super::SelectOption;
use super::Value;

/// A point referenced by lab works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
}

impl Row for Coordinates {
    fn id(&self) -> EntityId {
        self.id
    }

    fn value(&self, attribute: &str) -> Value {
        match attribute {
            "id" => self.id.into(),
            "x" => self.x.into(),
            "y" => self.y.into(),
            _ => Value::Null,
        }
    }

    fn display_name(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}

impl From<&Coordinates> for SelectOption {
    fn from(c: &Coordinates) -> Self {
        SelectOption::new(c.id, format!("ID:{} (x:{}, y:{})", c.id, c.x, c.y))
    }
}

/// Body of create and update requests for coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesPayload {
    pub x: f64,
    pub y: f64,
}
