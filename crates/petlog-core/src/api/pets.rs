//! Pet endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{Health, ListEnvelope, Pet, PetInput, PetSummary};

impl ApiClient {
    /// Backend liveness check.
    pub async fn health(&self) -> ApiResult<Health> {
        self.get("/health").await
    }

    /// List all pets.
    pub async fn list_pets(&self) -> ApiResult<Vec<Pet>> {
        let envelope: ListEnvelope<Pet> = self.get("/pets").await?;
        Ok(envelope.items)
    }

    /// Get a pet by ID.
    pub async fn get_pet(&self, pet_id: i64) -> ApiResult<Pet> {
        self.get_item(&format!("/pets/{}", pet_id)).await
    }

    /// Create a new pet.
    pub async fn create_pet(&self, input: &PetInput) -> ApiResult<Pet> {
        input.validate()?;
        self.post_item("/pets", input).await
    }

    /// Replace a pet's attributes.
    pub async fn update_pet(&self, pet_id: i64, input: &PetInput) -> ApiResult<Pet> {
        input.validate()?;
        self.put_item(&format!("/pets/{}", pet_id), input).await
    }

    /// Delete a pet.
    pub async fn delete_pet(&self, pet_id: i64) -> ApiResult<()> {
        self.delete(&format!("/pets/{}", pet_id)).await
    }

    /// Get the backend-computed summary for a pet.
    pub async fn get_pet_summary(&self, pet_id: i64) -> ApiResult<PetSummary> {
        self.get_item(&format!("/pets/{}/summary", pet_id)).await
    }
}
