//! Daily record endpoints.
//!
//! Unlike the other resources, a record is returned bare rather than in an
//! `{ "item": ... }` envelope, and writes answer with only the record id.

use super::{ApiClient, ApiResult};
use crate::models::{IdResponse, Page, Record, RecordInput, RecordListItem, RecordQuery};

impl ApiClient {
    /// List one page of a pet's records, newest first.
    pub async fn list_records(
        &self,
        pet_id: i64,
        query: &RecordQuery,
    ) -> ApiResult<Page<RecordListItem>> {
        self.get_query(&format!("/pets/{}/records", pet_id), query).await
    }

    /// Get a record with its embedded weights, medications and visits.
    pub async fn get_record(&self, pet_id: i64, record_id: i64) -> ApiResult<Record> {
        self.get(&format!("/pets/{}/records/{}", pet_id, record_id)).await
    }

    /// Create a record and its embedded entries. Returns the new record id.
    pub async fn create_record(&self, pet_id: i64, input: &RecordInput) -> ApiResult<i64> {
        input.validate()?;
        let created: IdResponse = self
            .post(&format!("/pets/{}/records", pet_id), input)
            .await?;
        Ok(created.id)
    }

    /// Replace a record. Embedded entries with an `id` are updated in place.
    pub async fn update_record(
        &self,
        pet_id: i64,
        record_id: i64,
        input: &RecordInput,
    ) -> ApiResult<i64> {
        input.validate()?;
        let updated: IdResponse = self
            .put(&format!("/pets/{}/records/{}", pet_id, record_id), input)
            .await?;
        Ok(updated.id)
    }

    pub async fn delete_record(&self, pet_id: i64, record_id: i64) -> ApiResult<()> {
        self.delete(&format!("/pets/{}/records/{}", pet_id, record_id)).await
    }
}
