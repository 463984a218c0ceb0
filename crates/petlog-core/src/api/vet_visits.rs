//! Vet visit endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Page, VetVisit, VetVisitInput, VetVisitQuery};

impl ApiClient {
    /// List one page of a pet's vet visits.
    pub async fn list_vet_visits(
        &self,
        pet_id: i64,
        query: &VetVisitQuery,
    ) -> ApiResult<Page<VetVisit>> {
        self.get_query(&format!("/pets/{}/vet-visits", pet_id), query).await
    }

    /// Get a vet visit by ID.
    pub async fn get_vet_visit(&self, pet_id: i64, visit_id: i64) -> ApiResult<VetVisit> {
        self.get_item(&format!("/pets/{}/vet-visits/{}", pet_id, visit_id)).await
    }

    /// Record a new vet visit.
    pub async fn create_vet_visit(
        &self,
        pet_id: i64,
        input: &VetVisitInput,
    ) -> ApiResult<VetVisit> {
        input.validate()?;
        self.post_item(&format!("/pets/{}/vet-visits", pet_id), input).await
    }

    /// Replace a vet visit.
    pub async fn update_vet_visit(
        &self,
        pet_id: i64,
        visit_id: i64,
        input: &VetVisitInput,
    ) -> ApiResult<VetVisit> {
        input.validate()?;
        self.put_item(&format!("/pets/{}/vet-visits/{}", pet_id, visit_id), input).await
    }

    /// Delete a vet visit.
    pub async fn delete_vet_visit(&self, pet_id: i64, visit_id: i64) -> ApiResult<()> {
        self.delete(&format!("/pets/{}/vet-visits/{}", pet_id, visit_id)).await
    }
}
