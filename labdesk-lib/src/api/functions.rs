//! Bulk lab work operations
//!
//! These endpoints are single request/response pairs with no client-side
//! orchestration; results are returned as-is.

use reqwest::Method;

use super::Resource;
use crate::LabDeskClient;
use crate::error::Error;
use crate::model::CountResult;
use crate::model::DeleteResult;
use crate::model::EntityId;
use crate::model::LabWork;
use crate::model::SumResult;

impl LabDeskClient {
    /// Deletes every lab work whose `minimalPoint` equals `value`.
    pub async fn delete_by_minimal_point(&self, value: i64) -> Result<DeleteResult, Error> {
        let url = self.endpoint(&format!("{}/by-minimal-point/{}", lab_works(), value))?;
        let response = self.request(Method::DELETE, url, None).await?;
        self.read_json(response).await
    }

    /// Sums `minimalPoint` over all lab works.
    pub async fn minimal_point_sum(&self) -> Result<SumResult, Error> {
        let url = self.endpoint(&format!("{}/minimal-point/sum", lab_works()))?;
        let response = self.request(Method::GET, url, None).await?;
        self.read_json(response).await
    }

    /// Counts lab works whose author id is greater than `author_id`.
    pub async fn count_by_author_id_greater_than(
        &self,
        author_id: EntityId,
    ) -> Result<CountResult, Error> {
        let url = self.endpoint(&format!("{}/count/author-id-gt/{}", lab_works(), author_id))?;
        let response = self.request(Method::GET, url, None).await?;
        self.read_json(response).await
    }

    /// Lowers the difficulty of one lab work by `steps` levels.
    pub async fn decrease_difficulty(&self, id: EntityId, steps: u32) -> Result<LabWork, Error> {
        let mut url = self.endpoint(&format!("{}/{}/decrease-difficulty", lab_works(), id))?;
        url.query_pairs_mut().append_pair("steps", &steps.to_string());
        let response = self.request(Method::POST, url, None).await?;
        self.read_json(response).await
    }

    /// Adds the ten hardest lab works to a discipline's program.
    pub async fn assign_top10_to_discipline(
        &self,
        discipline_id: EntityId,
    ) -> Result<Vec<LabWork>, Error> {
        let url = self.endpoint(&format!(
            "{}/assign-top10-hardest-to-discipline/{}",
            lab_works(),
            discipline_id
        ))?;
        let response = self.request(Method::POST, url, None).await?;
        self.read_json(response).await
    }
}

fn lab_works() -> String {
    Resource::LabWorks.collection_path()
}
