//! REST access layer for petlog.

mod client;
mod medications;
mod mock;
mod paging;
mod pets;
mod records;
mod vet_visits;
mod weights;

pub use client::*;
pub use mock::*;
pub use paging::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    ListQuery, Medication, Page, Pet, PetSummary, ValidationError, VetVisit, VetVisitQuery,
};

/// API errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure: connection refused, reset, DNS and the like.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `detail` is the backend's message.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// A successful response whose body could not be parsed.
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// HTTP status for backend errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The entity does not exist (or was deleted).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Read access the aggregators need from the backend.
///
/// [`ApiClient`] is the production implementation; [`MockDataSource`] serves
/// canned data for tests and offline demos.
#[async_trait]
pub trait PetDataSource: Send + Sync {
    async fn list_pets(&self) -> ApiResult<Vec<Pet>>;

    async fn get_pet(&self, pet_id: i64) -> ApiResult<Pet>;

    async fn get_pet_summary(&self, pet_id: i64) -> ApiResult<PetSummary>;

    async fn list_vet_visits(&self, pet_id: i64, query: &VetVisitQuery)
        -> ApiResult<Page<VetVisit>>;

    async fn list_medications(&self, pet_id: i64, query: &ListQuery)
        -> ApiResult<Page<Medication>>;
}

#[async_trait]
impl PetDataSource for ApiClient {
    async fn list_pets(&self) -> ApiResult<Vec<Pet>> {
        ApiClient::list_pets(self).await
    }

    async fn get_pet(&self, pet_id: i64) -> ApiResult<Pet> {
        ApiClient::get_pet(self, pet_id).await
    }

    async fn get_pet_summary(&self, pet_id: i64) -> ApiResult<PetSummary> {
        ApiClient::get_pet_summary(self, pet_id).await
    }

    async fn list_vet_visits(
        &self,
        pet_id: i64,
        query: &VetVisitQuery,
    ) -> ApiResult<Page<VetVisit>> {
        ApiClient::list_vet_visits(self, pet_id, query).await
    }

    async fn list_medications(
        &self,
        pet_id: i64,
        query: &ListQuery,
    ) -> ApiResult<Page<Medication>> {
        ApiClient::list_medications(self, pet_id, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_detail() {
        let err = ApiError::Api {
            status: 404,
            detail: "Pet not found".into(),
        };
        assert_eq!(err.to_string(), "Pet not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ApiError = ValidationError::Missing("name").into();
        assert_eq!(err.to_string(), "Invalid input: name is required");
    }

    #[test]
    fn test_json_error_is_decode() {
        let json_err = serde_json::from_str::<Pet>("{").unwrap_err();
        assert!(matches!(ApiError::from(json_err), ApiError::Decode(_)));
    }
}
