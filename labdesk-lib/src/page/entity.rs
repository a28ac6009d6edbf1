//! Per-entity page configuration

use std::cmp::Ordering;
use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::Resource;
use crate::grid::Column;
use crate::model::Coordinates;
use crate::model::CoordinatesPayload;
use crate::model::Discipline;
use crate::model::DisciplinePayload;
use crate::model::LabWork;
use crate::model::LabWorkFull;
use crate::model::LabWorkPayload;
use crate::model::Location;
use crate::model::LocationPayload;
use crate::model::Person;
use crate::model::PersonFull;
use crate::model::PersonPayload;
use crate::model::Row;
use crate::model::format_date;

/// An entity kind that has a CRUD page.
pub trait Entity: Row + Serialize + DeserializeOwned {
    /// Representation returned by a read. Entities without an expanded
    /// endpoint use `Self`.
    type Full: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Body of create and update requests.
    type Payload: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    const RESOURCE: Resource;

    /// Singular display name, e.g. `LabWork`.
    const NAME: &'static str;

    /// Plural display name, e.g. `LabWorks`.
    const PLURAL: &'static str;

    /// Whether reads fetch the expanded representation.
    const EXPANDED_READ: bool = false;

    /// Collections whose options populate the create/update form.
    const RELATIONS: &'static [Resource] = &[];

    /// Table columns in display order.
    fn columns() -> Vec<Column<Self>>;
}

/// Orders optional names the way a locale-aware string compare would:
/// case-insensitively first, exact text second. Missing names sort as empty.
fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

impl Entity for LabWork {
    type Full = LabWorkFull;
    type Payload = LabWorkPayload;

    const RESOURCE: Resource = Resource::LabWorks;
    const NAME: &'static str = "LabWork";
    const PLURAL: &'static str = "LabWorks";
    const EXPANDED_READ: bool = true;
    const RELATIONS: &'static [Resource] = &[
        Resource::Persons,
        Resource::Disciplines,
        Resource::Coordinates,
    ];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("coordinatesId", "Coordinates ID"),
            Column::new("description", "Description"),
            Column::new("disciplineName", "Discipline").compare_by(|a: &LabWork, b: &LabWork| {
                compare_names(a.discipline_name.as_deref(), b.discipline_name.as_deref())
            }),
            Column::new("authorName", "Author").compare_by(|a: &LabWork, b: &LabWork| {
                compare_names(a.author_name.as_deref(), b.author_name.as_deref())
            }),
            Column::new("difficulty", "Difficulty").compare_by(|a: &LabWork, b: &LabWork| {
                a.difficulty.rank().cmp(&b.difficulty.rank())
            }),
            Column::new("minimalPoint", "Min. Point"),
            Column::new("creationDate", "Time").render(|value| format_date(&value.to_string())),
        ]
    }
}

impl Entity for Person {
    type Full = PersonFull;
    type Payload = PersonPayload;

    const RESOURCE: Resource = Resource::Persons;
    const NAME: &'static str = "Person";
    const PLURAL: &'static str = "Persons";
    const EXPANDED_READ: bool = true;
    const RELATIONS: &'static [Resource] = &[Resource::Locations];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("weight", "Weight"),
            Column::new("nationality", "Nationality"),
            Column::new("locationName", "Location").compare_by(|a: &Person, b: &Person| {
                compare_names(a.location_name.as_deref(), b.location_name.as_deref())
            }),
            Column::new("eyeColor", "Eye Color"),
            Column::new("hairColor", "Hair Color"),
        ]
    }
}

impl Entity for Discipline {
    type Full = Discipline;
    type Payload = DisciplinePayload;

    const RESOURCE: Resource = Resource::Disciplines;
    const NAME: &'static str = "Discipline";
    const PLURAL: &'static str = "Disciplines";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("practiceHours", "Practice Hours"),
            Column::new("labsCount", "Labs Count"),
        ]
    }
}

impl Entity for Coordinates {
    type Full = Coordinates;
    type Payload = CoordinatesPayload;

    const RESOURCE: Resource = Resource::Coordinates;
    const NAME: &'static str = "Coordinates";
    const PLURAL: &'static str = "Coordinates";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID"),
            Column::new("x", "X"),
            Column::new("y", "Y"),
        ]
    }
}

impl Entity for Location {
    type Full = Location;
    type Payload = LocationPayload;

    const RESOURCE: Resource = Resource::Locations;
    const NAME: &'static str = "Location";
    const PLURAL: &'static str = "Locations";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("x", "X"),
            Column::new("y", "Y"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DataTable;
    use crate::model::Difficulty;

    fn lab_work(id: i64, difficulty: Difficulty, author: Option<&str>) -> LabWork {
        LabWork {
            id,
            name: format!("work {id}"),
            description: None,
            difficulty,
            minimal_point: 10,
            creation_date: "2024-03-01T10:15:30".to_string(),
            coordinates_id: 1,
            author_id: None,
            author_name: author.map(str::to_string),
            discipline_id: None,
            discipline_name: None,
        }
    }

    #[test]
    fn test_difficulty_sorts_by_rank() {
        let mut table = DataTable::new(LabWork::columns());
        table.set_rows(vec![
            lab_work(1, Difficulty::Hopeless, None),
            lab_work(2, Difficulty::VeryEasy, None),
            lab_work(3, Difficulty::Insane, None),
        ]);
        table.set_sort("difficulty");

        let ids: Vec<_> = table.sorted_rows().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_author_names_compare_case_insensitively() {
        let mut table = DataTable::new(LabWork::columns());
        table.set_rows(vec![
            lab_work(1, Difficulty::Easy, Some("bob")),
            lab_work(2, Difficulty::Easy, None),
            lab_work(3, Difficulty::Easy, Some("Alice")),
        ]);
        table.set_sort("authorName");

        let ids: Vec<_> = table.sorted_rows().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_creation_date_renders_as_day() {
        let mut table = DataTable::new(LabWork::columns());
        table.set_rows(vec![lab_work(1, Difficulty::Easy, None)]);
        let cells = table.page_cells();
        assert_eq!(cells[0].last().map(String::as_str), Some("2024-03-01"));
    }

    #[test]
    fn test_filterable_columns_exclude_custom_ones() {
        let table = DataTable::new(LabWork::columns());
        let keys: Vec<_> = table.filterable_columns().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["id", "name", "coordinatesId", "description", "minimalPoint"]
        );
    }
}
