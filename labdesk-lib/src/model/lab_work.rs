//! LabWork entity

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use super::Coordinates;
use super::Difficulty;
use super::Discipline;
use super::EntityId;
use super::PersonFull;
use super::Row;
use super::SelectOption;
use super::Value;

/// Flattened lab work as returned by list and plain retrieve calls.
///
/// Related records are summarized by id and name. `creationDate` is kept as
/// sent by the backend (ISO 8601) and only parsed for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabWork {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub minimal_point: i64,
    pub creation_date: String,
    pub coordinates_id: EntityId,
    #[serde(default)]
    pub author_id: Option<EntityId>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub discipline_id: Option<EntityId>,
    #[serde(default)]
    pub discipline_name: Option<String>,
}

impl LabWork {
    /// Creation date rendered as a local calendar date.
    ///
    /// Accepts offset timestamps and zone-less local timestamps; anything else
    /// is returned unchanged.
    pub fn creation_day(&self) -> String {
        format_date(&self.creation_date)
    }
}

/// Formats an ISO 8601 timestamp as `YYYY-MM-DD` in local time.
pub fn format_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

impl Row for LabWork {
    fn id(&self) -> EntityId {
        self.id
    }

    fn value(&self, attribute: &str) -> Value {
        match attribute {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.clone().into(),
            "difficulty" => self.difficulty.into(),
            "minimalPoint" => self.minimal_point.into(),
            "creationDate" => self.creation_date.as_str().into(),
            "coordinatesId" => self.coordinates_id.into(),
            "authorId" => self.author_id.into(),
            "authorName" => self.author_name.clone().into(),
            "disciplineId" => self.discipline_id.into(),
            "disciplineName" => self.discipline_name.clone().into(),
            _ => Value::Null,
        }
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl From<&LabWork> for SelectOption {
    fn from(w: &LabWork) -> Self {
        SelectOption::new(w.id, w.name.clone())
    }
}

/// Lab work with coordinates, author and discipline joined in, from
/// `GET /labworks/{id}/full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabWorkFull {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub minimal_point: i64,
    pub creation_date: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub author: Option<PersonFull>,
    #[serde(default)]
    pub discipline: Option<Discipline>,
}

/// Body of create and update requests for lab works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabWorkPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub minimal_point: i64,
    pub difficulty: Difficulty,
    pub coordinates_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline_id: Option<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flattened_lab_work() {
        let json = r#"{
            "id": 4,
            "name": "Algebra",
            "description": null,
            "difficulty": "INSANE",
            "minimalPoint": 12,
            "creationDate": "2024-03-01T10:15:30",
            "coordinatesId": 2,
            "authorId": null,
            "authorName": null,
            "disciplineId": 1,
            "disciplineName": "Math"
        }"#;
        let work: LabWork = serde_json::from_str(json).unwrap();

        assert_eq!(work.value("minimalPoint"), Value::Int(12));
        assert_eq!(work.value("difficulty"), Value::from("INSANE"));
        assert_eq!(work.value("authorName"), Value::Null);
        assert_eq!(work.value("unknown"), Value::Null);
        assert_eq!(work.creation_day(), "2024-03-01");
    }

    #[test]
    fn test_payload_omits_missing_relations() {
        let payload = LabWorkPayload {
            name: "Lab".into(),
            description: None,
            minimal_point: 5,
            difficulty: Difficulty::Easy,
            coordinates_id: 1,
            author_id: None,
            discipline_id: Some(3),
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["minimalPoint"], 5);
        assert_eq!(json["disciplineId"], 3);
        assert!(json.get("authorId").is_none());
    }

    #[test]
    fn test_unparsable_date_is_left_as_is() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
