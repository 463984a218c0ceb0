//! Medication endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{ListQuery, Medication, MedicationInput, Page};

impl ApiClient {
    /// List one page of a pet's medications.
    ///
    /// `from` keeps courses still running on/after that date; `to` keeps
    /// courses started on/before it.
    pub async fn list_medications(
        &self,
        pet_id: i64,
        query: &ListQuery,
    ) -> ApiResult<Page<Medication>> {
        self.get_query(&format!("/pets/{}/medications", pet_id), query).await
    }

    /// Courses the backend considers active today.
    pub async fn list_active_medications(&self, pet_id: i64) -> ApiResult<Page<Medication>> {
        self.get(&format!("/pets/{}/medications/active", pet_id)).await
    }

    pub async fn get_medication(&self, pet_id: i64, med_id: i64) -> ApiResult<Medication> {
        self.get_item(&format!("/pets/{}/medications/{}", pet_id, med_id)).await
    }

    pub async fn create_medication(
        &self,
        pet_id: i64,
        input: &MedicationInput,
    ) -> ApiResult<Medication> {
        input.validate()?;
        self.post_item(&format!("/pets/{}/medications", pet_id), input).await
    }

    pub async fn update_medication(
        &self,
        pet_id: i64,
        med_id: i64,
        input: &MedicationInput,
    ) -> ApiResult<Medication> {
        input.validate()?;
        self.put_item(&format!("/pets/{}/medications/{}", pet_id, med_id), input).await
    }

    pub async fn delete_medication(&self, pet_id: i64, med_id: i64) -> ApiResult<()> {
        self.delete(&format!("/pets/{}/medications/{}", pet_id, med_id)).await
    }
}
