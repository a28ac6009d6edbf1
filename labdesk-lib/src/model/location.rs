//! Location entity

use serde::Deserialize;
use serde::Serialize;

use super::EntityId;
use super::Row;
use super::SelectOption;
use super::Value;

/// Where an author lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    pub x: f64,
    pub y: i64,
}

impl Row for Location {
    fn id(&self) -> EntityId {
        self.id
    }

    fn value(&self, attribute: &str) -> Value {
        match attribute {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "x" => self.x.into(),
            "y" => self.y.into(),
            _ => Value::Null,
        }
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl From<&Location> for SelectOption {
    fn from(l: &Location) -> Self {
        SelectOption::new(l.id, l.name.clone())
    }
}

/// Body of create and update requests for locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    pub name: String,
    pub x: f64,
    pub y: i64,
}
