//! Discipline entity

use serde::Deserialize;
use serde::Serialize;

use super::EntityId;
use super::Row;
use super::SelectOption;
use super::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: EntityId,
    pub name: String,
    pub practice_hours: i64,
    pub labs_count: i64,
}

impl Row for Discipline {
    fn id(&self) -> EntityId {
        self.id
    }

    fn value(&self, attribute: &str) -> Value {
        match attribute {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "practiceHours" => self.practice_hours.into(),
            "labsCount" => self.labs_count.into(),
            _ => Value::Null,
        }
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl From<&Discipline> for SelectOption {
    fn from(d: &Discipline) -> Self {
        SelectOption::new(d.id, d.name.clone())
    }
}

/// Body of create and update requests for disciplines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinePayload {
    pub name: String,
    pub practice_hours: i64,
    pub labs_count: i64,
}
