//! Person entity (lab work authors)

use serde::Deserialize;
use serde::Serialize;

use super::Color;
use super::Country;
use super::EntityId;
use super::Location;
use super::Row;
use super::SelectOption;
use super::Value;

/// Flattened person as returned by list and plain retrieve calls.
///
/// The location is only summarized by id and name; see [`PersonFull`] for the
/// joined form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub eye_color: Color,
    pub hair_color: Color,
    pub weight: f64,
    pub nationality: Country,
    #[serde(default)]
    pub location_id: Option<EntityId>,
    #[serde(default)]
    pub location_name: Option<String>,
}

impl Row for Person {
    fn id(&self) -> EntityId {
        self.id
    }

    fn value(&self, attribute: &str) -> Value {
        match attribute {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "eyeColor" => self.eye_color.into(),
            "hairColor" => self.hair_color.into(),
            "weight" => self.weight.into(),
            "nationality" => self.nationality.into(),
            "locationId" => self.location_id.into(),
            "locationName" => self.location_name.clone().into(),
            _ => Value::Null,
        }
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl From<&Person> for SelectOption {
    fn from(p: &Person) -> Self {
        SelectOption::new(p.id, p.name.clone())
    }
}

/// Person with the location joined in, from `GET /persons/{id}/full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFull {
    pub id: EntityId,
    pub name: String,
    pub eye_color: Color,
    pub hair_color: Color,
    pub weight: f64,
    pub nationality: Country,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Body of create and update requests for persons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    pub name: String,
    pub eye_color: Color,
    pub hair_color: Color,
    pub weight: f64,
    pub nationality: Country,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<EntityId>,
}
