//! Summary aggregator: pets joined with their backend-computed summaries.

use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::api::{collect_all_pages, ApiError, PetDataSource};
use crate::models::{ListQuery, Medication, Pet, PetSummary};

/// Aggregate load errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Failed to load pets: {0}")]
    Pets(#[source] ApiError),

    #[error("Failed to load pet {pet_id}: {source}")]
    Pet { pet_id: i64, source: ApiError },

    #[error("Failed to load vet visits for pet {pet_id}: {source}")]
    VetVisits { pet_id: i64, source: ApiError },

    #[error("Failed to load medications for pet {pet_id}: {source}")]
    Medications { pet_id: i64, source: ApiError },
}

impl LoadError {
    /// The underlying API failure.
    pub fn api_error(&self) -> &ApiError {
        match self {
            LoadError::Pets(source)
            | LoadError::Pet { source, .. }
            | LoadError::VetVisits { source, .. }
            | LoadError::Medications { source, .. } => source,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A pet with its summary; `summary` is `None` when it could not be fetched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PetOverview {
    pub pet: Pet,
    pub summary: Option<PetSummary>,
}

impl PetOverview {
    pub fn summary_unavailable(&self) -> bool {
        self.summary.is_none()
    }
}

/// Fetch a pet and its summary concurrently.
///
/// A failed summary is logged and reported as `summary: None`. A failed pet
/// fetch fails the whole load.
#[instrument(skip(source))]
pub async fn load_pet_overview<S>(source: &S, pet_id: i64) -> LoadResult<PetOverview>
where
    S: PetDataSource + ?Sized,
{
    let (pet, summary) = futures::join!(source.get_pet(pet_id), source.get_pet_summary(pet_id));

    let pet = pet.map_err(|source| LoadError::Pet { pet_id, source })?;
    let summary = match summary {
        Ok(summary) => Some(summary),
        Err(e) => {
            warn!(pet_id, error = %e, "summary unavailable");
            None
        }
    };

    Ok(PetOverview { pet, summary })
}

/// Fetch every pet, then each pet's overview concurrently.
///
/// The result follows the listing order. A pet whose overview cannot be
/// loaded is kept as listed with `summary: None`; only a failed listing
/// fails the load.
#[instrument(skip(source))]
pub async fn load_home_overview<S>(source: &S) -> LoadResult<Vec<PetOverview>>
where
    S: PetDataSource + ?Sized,
{
    let pets = source.list_pets().await.map_err(LoadError::Pets)?;

    let overviews = join_all(pets.into_iter().map(|pet| async move {
        match load_pet_overview(source, pet.id).await {
            Ok(overview) => overview,
            Err(e) => {
                warn!(pet_id = pet.id, error = %e, "overview unavailable, using listed pet");
                PetOverview { pet, summary: None }
            }
        }
    }))
    .await;

    let with_summary = overviews.iter().filter(|o| o.summary.is_some()).count();
    info!(pets = overviews.len(), with_summary, "home overview loaded");
    Ok(overviews)
}

/// Every medication of a pet matching `filter`, paged `page_size` at a time.
///
/// Paging fields already set on `filter` are ignored.
#[instrument(skip(source, filter))]
pub async fn load_medications<S>(
    source: &S,
    pet_id: i64,
    filter: &ListQuery,
    page_size: u32,
) -> LoadResult<Vec<Medication>>
where
    S: PetDataSource + ?Sized,
{
    let medications = collect_all_pages(page_size, |limit, offset| {
        let query = filter.clone().with_page(limit, offset);
        async move { source.list_medications(pet_id, &query).await }
    })
    .await
    .map_err(|source| LoadError::Medications { pet_id, source })?;

    info!(pet_id, medications = medications.len(), "medications fetched");
    Ok(medications)
}
