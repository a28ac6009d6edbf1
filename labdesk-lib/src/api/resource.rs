//! Backend resource collections

use std::fmt;

/// A REST collection exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    LabWorks,
    Coordinates,
    Disciplines,
    Persons,
    Locations,
}

impl Resource {
    /// All resources, in navigation order.
    pub const ALL: &'static [Resource] = &[
        Resource::LabWorks,
        Resource::Coordinates,
        Resource::Disciplines,
        Resource::Persons,
        Resource::Locations,
    ];

    /// Path segment of the collection, without slashes.
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::LabWorks => "labworks",
            Resource::Coordinates => "coordinates",
            Resource::Disciplines => "disciplines",
            Resource::Persons => "persons",
            Resource::Locations => "locations",
        }
    }

    /// `/{resource}`
    pub fn collection_path(&self) -> String {
        format!("/{}", self.segment())
    }

    /// `/{resource}/{id}`
    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{}", self.segment(), id)
    }

    /// `/{resource}/{id}/full`
    pub fn full_item_path(&self, id: i64) -> String {
        format!("/{}/{}/full", self.segment(), id)
    }

    /// Looks a resource up by its path segment.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.segment() == segment)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::LabWorks.collection_path(), "/labworks");
        assert_eq!(Resource::Persons.item_path(7), "/persons/7");
        assert_eq!(Resource::Persons.full_item_path(7), "/persons/7/full");
    }

    #[test]
    fn test_from_segment() {
        assert_eq!(Resource::from_segment("locations"), Some(Resource::Locations));
        assert_eq!(Resource::from_segment("location"), None);
    }
}
