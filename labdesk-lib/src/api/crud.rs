//! Create, Read, Update, Delete operations
//!
//! Every resource follows the same REST contract:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list | `GET /{resource}` |
//! | retrieve | `GET /{resource}/{id}` |
//! | retrieve expanded | `GET /{resource}/{id}/full` |
//! | create | `POST /{resource}` |
//! | update | `PUT /{resource}/{id}` |
//! | delete | `DELETE /{resource}/{id}` |

use futures::future::try_join_all;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Resource;
use crate::LabDeskClient;
use crate::error::Error;
use crate::model::Coordinates;
use crate::model::Discipline;
use crate::model::EntityId;
use crate::model::LabWork;
use crate::model::Location;
use crate::model::Person;
use crate::model::SelectOption;

impl LabDeskClient {
    /// Lists every record of a resource in its flattened form.
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, Error> {
        let url = self.endpoint(&resource.collection_path())?;
        let response = self.request(Method::GET, url, None).await?;
        self.read_json(response).await
    }

    /// Retrieves one record in its flattened form.
    pub async fn retrieve<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: EntityId,
    ) -> Result<T, Error> {
        let url = self.endpoint(&resource.item_path(id))?;
        let response = self.request(Method::GET, url, None).await?;
        self.read_json(response).await
    }

    /// Retrieves one record with its related records joined in.
    ///
    /// Only lab works and persons expose this form.
    pub async fn retrieve_full<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: EntityId,
    ) -> Result<T, Error> {
        let url = self.endpoint(&resource.full_item_path(id))?;
        let response = self.request(Method::GET, url, None).await?;
        self.read_json(response).await
    }

    /// Creates a record and returns the stored representation.
    pub async fn create<P, T>(&self, resource: Resource, payload: &P) -> Result<T, Error>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(&resource.collection_path())?;
        let body = serde_json::to_string(payload).map_err(Error::Serialization)?;
        let response = self.request(Method::POST, url, Some(body)).await?;
        self.read_json(response).await
    }

    /// Replaces a record and returns the stored representation.
    pub async fn update<P, T>(&self, resource: Resource, id: EntityId, payload: &P) -> Result<T, Error>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(&resource.item_path(id))?;
        let body = serde_json::to_string(payload).map_err(Error::Serialization)?;
        let response = self.request(Method::PUT, url, Some(body)).await?;
        self.read_json(response).await
    }

    /// Deletes a record.
    ///
    /// A record still referenced elsewhere fails with status 409, a missing one
    /// with 404; see [`Error::is_conflict`] and [`Error::is_not_found`].
    pub async fn delete(&self, resource: Resource, id: EntityId) -> Result<(), Error> {
        let url = self.endpoint(&resource.item_path(id))?;
        self.request(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// Lists a resource as dropdown options.
    pub async fn select_options(&self, resource: Resource) -> Result<Vec<SelectOption>, Error> {
        let options = match resource {
            Resource::LabWorks => to_options(self.list::<LabWork>(resource).await?),
            Resource::Coordinates => to_options(self.list::<Coordinates>(resource).await?),
            Resource::Disciplines => to_options(self.list::<Discipline>(resource).await?),
            Resource::Persons => to_options(self.list::<Person>(resource).await?),
            Resource::Locations => to_options(self.list::<Location>(resource).await?),
        };
        Ok(options)
    }

    /// Loads the options of several relation dropdowns concurrently.
    ///
    /// Fails as a whole if any single list fails.
    pub async fn form_options(&self, resources: &[Resource]) -> Result<FormOptions, Error> {
        let lists = try_join_all(resources.iter().map(|r| self.select_options(*r))).await?;
        Ok(FormOptions {
            relations: resources.iter().copied().zip(lists).collect(),
        })
    }
}

fn to_options<T>(records: Vec<T>) -> Vec<SelectOption>
where
    for<'a> &'a T: Into<SelectOption>,
{
    records.iter().map(Into::into).collect()
}

/// Relation dropdown contents for a create/update form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    relations: Vec<(Resource, Vec<SelectOption>)>,
}

impl FormOptions {
    /// Creates options from already loaded lists.
    pub fn new(relations: Vec<(Resource, Vec<SelectOption>)>) -> Self {
        Self { relations }
    }

    /// Returns the options for one related resource.
    pub fn get(&self, resource: Resource) -> &[SelectOption] {
        self.relations
            .iter()
            .find(|(r, _)| *r == resource)
            .map(|(_, options)| options.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if no relation was loaded.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Iterates over the loaded relations.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, &[SelectOption])> {
        self.relations.iter().map(|(r, o)| (*r, o.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_options_lookup() {
        let options = FormOptions::new(vec![(
            Resource::Persons,
            vec![SelectOption::new(1, "Ada"), SelectOption::new(2, "Alan")],
        )]);

        assert_eq!(options.get(Resource::Persons).len(), 2);
        assert_eq!(options.get(Resource::Persons)[1].label, "Alan");
        assert!(options.get(Resource::Locations).is_empty());
    }
}
