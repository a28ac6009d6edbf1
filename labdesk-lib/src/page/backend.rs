//! Backend seam for page controllers.

use async_trait::async_trait;

use super::Entity;
use crate::LabDeskClient;
use crate::api::FormOptions;
use crate::api::Resource;
use crate::error::Error;
use crate::model::EntityId;

/// Data source a page controller talks to.
///
/// [`LabDeskClient`] implements this for every [`Entity`]; tests substitute an
/// in-memory backend.
#[async_trait]
pub trait EntityBackend<E: Entity>: Send + Sync {
    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<E>, Error>;

    /// Fetch one flattened record.
    async fn get(&self, id: EntityId) -> Result<E, Error>;

    /// Fetch one record in its read representation.
    async fn get_full(&self, id: EntityId) -> Result<E::Full, Error>;

    async fn create(&self, payload: &E::Payload) -> Result<E, Error>;

    async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<E, Error>;

    async fn delete(&self, id: EntityId) -> Result<(), Error>;

    /// Fetch dropdown options for every resource in `relations`.
    async fn form_options(&self, relations: &[Resource]) -> Result<FormOptions, Error>;
}

#[async_trait]
impl<E: Entity> EntityBackend<E> for LabDeskClient {
    async fn list(&self) -> Result<Vec<E>, Error> {
        LabDeskClient::list(self, E::RESOURCE).await
    }

    async fn get(&self, id: EntityId) -> Result<E, Error> {
        LabDeskClient::retrieve(self, E::RESOURCE, id).await
    }

    async fn get_full(&self, id: EntityId) -> Result<E::Full, Error> {
        if E::EXPANDED_READ {
            LabDeskClient::retrieve_full(self, E::RESOURCE, id).await
        } else {
            LabDeskClient::retrieve(self, E::RESOURCE, id).await
        }
    }

    async fn create(&self, payload: &E::Payload) -> Result<E, Error> {
        LabDeskClient::create(self, E::RESOURCE, payload).await
    }

    async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<E, Error> {
        LabDeskClient::update(self, E::RESOURCE, id, payload).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), Error> {
        LabDeskClient::delete(self, E::RESOURCE, id).await
    }

    async fn form_options(&self, relations: &[Resource]) -> Result<FormOptions, Error> {
        LabDeskClient::form_options(self, relations).await
    }
}
