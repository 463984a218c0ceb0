//! Weight endpoints.

use super::{ApiClient, ApiResult};
use crate::models::{ListQuery, Page, Weight, WeightInput};

impl ApiClient {
    /// List one page of a pet's weight measurements.
    pub async fn list_weights(&self, pet_id: i64, query: &ListQuery) -> ApiResult<Page<Weight>> {
        self.get_query(&format!("/pets/{}/weights", pet_id), query).await
    }

    pub async fn get_weight(&self, pet_id: i64, weight_id: i64) -> ApiResult<Weight> {
        self.get_item(&format!("/pets/{}/weights/{}", pet_id, weight_id)).await
    }

    pub async fn create_weight(&self, pet_id: i64, input: &WeightInput) -> ApiResult<Weight> {
        input.validate()?;
        self.post_item(&format!("/pets/{}/weights", pet_id), input).await
    }

    pub async fn update_weight(
        &self,
        pet_id: i64,
        weight_id: i64,
        input: &WeightInput,
    ) -> ApiResult<Weight> {
        input.validate()?;
        self.put_item(&format!("/pets/{}/weights/{}", pet_id, weight_id), input).await
    }

    pub async fn delete_weight(&self, pet_id: i64, weight_id: i64) -> ApiResult<()> {
        self.delete(&format!("/pets/{}/weights/{}", pet_id, weight_id)).await
    }
}
