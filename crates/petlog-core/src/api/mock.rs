//! In-memory data source for tests and offline runs.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ApiResult, PetDataSource};
use crate::models::{ListQuery, Medication, Page, Pet, PetSummary, VetVisit, VetVisitQuery};

/// One call observed by [`MockDataSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRequest {
    ListPets,
    GetPet(i64),
    GetSummary(i64),
    ListVetVisits { pet_id: i64, limit: u32, offset: u32 },
    ListMedications { pet_id: i64, limit: u32, offset: u32 },
}

/// Canned [`PetDataSource`] that records every request it serves.
///
/// Listings are paged from `limit`/`offset` like the backend does. Unknown
/// pets answer 404; injected failures answer with a network error.
#[derive(Debug, Default)]
pub struct MockDataSource {
    pets: BTreeMap<i64, Pet>,
    summaries: HashMap<i64, PetSummary>,
    visits: HashMap<i64, Vec<VetVisit>>,
    medications: HashMap<i64, Vec<Medication>>,
    reported_totals: HashMap<i64, u64>,
    failing_pets: HashSet<i64>,
    failing_summaries: HashSet<i64>,
    failing_listing: bool,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pet. Pets are listed in ID order.
    pub fn with_pet(mut self, pet: Pet) -> Self {
        self.pets.insert(pet.id, pet);
        self
    }

    pub fn with_summary(mut self, summary: PetSummary) -> Self {
        self.summaries.insert(summary.pet_id, summary);
        self
    }

    /// Vet visits for `pet_id`, served in the given order.
    pub fn with_visits(mut self, pet_id: i64, visits: Vec<VetVisit>) -> Self {
        self.visits.insert(pet_id, visits);
        self
    }

    pub fn with_medications(mut self, pet_id: i64, medications: Vec<Medication>) -> Self {
        self.medications.insert(pet_id, medications);
        self
    }

    /// Report `total` on every listing page for `pet_id` regardless of how
    /// many items actually exist.
    pub fn with_reported_total(mut self, pet_id: i64, total: u64) -> Self {
        self.reported_totals.insert(pet_id, total);
        self
    }

    pub fn failing_pet(mut self, pet_id: i64) -> Self {
        self.failing_pets.insert(pet_id);
        self
    }

    pub fn failing_summary(mut self, pet_id: i64) -> Self {
        self.failing_summaries.insert(pet_id);
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.failing_listing = true;
        self
    }

    /// Requests served so far, in arrival order.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.log().clone()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<MockRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, request: MockRequest) {
        self.log().push(request);
    }

    fn require_pet(&self, pet_id: i64) -> ApiResult<&Pet> {
        self.pets.get(&pet_id).ok_or_else(|| ApiError::Api {
            status: 404,
            detail: "Pet not found".into(),
        })
    }

    fn page_of<T: Clone>(&self, pet_id: i64, items: Vec<T>, limit: u32, offset: u32) -> Page<T> {
        let total = self
            .reported_totals
            .get(&pet_id)
            .copied()
            .unwrap_or(items.len() as u64);
        let start = (offset as usize).min(items.len());
        let end = start.saturating_add(limit as usize).min(items.len());
        Page {
            items: items[start..end].to_vec(),
            total,
            limit: limit as u64,
            offset: offset as u64,
        }
    }
}

fn injected(what: &str) -> ApiError {
    ApiError::Network(format!("injected failure: {}", what))
}

fn visit_matches(visit: &VetVisit, query: &VetVisitQuery) -> bool {
    if query.from.is_some_and(|from| visit.visited_on < from) {
        return false;
    }
    if query.to.is_some_and(|to| visit.visited_on > to) {
        return false;
    }
    match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        None => true,
        Some(q) => [&visit.hospital_name, &visit.diagnosis, &visit.chief_complaint]
            .into_iter()
            .flatten()
            .any(|field| field.contains(q)),
    }
}

fn medication_matches(medication: &Medication, query: &ListQuery) -> bool {
    if query
        .from
        .is_some_and(|from| !medication.is_active_on(from))
    {
        return false;
    }
    !query.to.is_some_and(|to| medication.start_on > to)
}

#[async_trait]
impl PetDataSource for MockDataSource {
    async fn list_pets(&self) -> ApiResult<Vec<Pet>> {
        self.record(MockRequest::ListPets);
        if self.failing_listing {
            return Err(injected("pet listing"));
        }
        Ok(self.pets.values().cloned().collect())
    }

    async fn get_pet(&self, pet_id: i64) -> ApiResult<Pet> {
        self.record(MockRequest::GetPet(pet_id));
        if self.failing_pets.contains(&pet_id) {
            return Err(injected("pet"));
        }
        self.require_pet(pet_id).cloned()
    }

    async fn get_pet_summary(&self, pet_id: i64) -> ApiResult<PetSummary> {
        self.record(MockRequest::GetSummary(pet_id));
        if self.failing_summaries.contains(&pet_id) {
            return Err(injected("summary"));
        }
        self.require_pet(pet_id)?;
        Ok(self
            .summaries
            .get(&pet_id)
            .cloned()
            .unwrap_or_else(|| PetSummary {
                pet_id,
                vet_visit_last: None,
                weight_last: None,
                medication_active: Default::default(),
            }))
    }

    async fn list_vet_visits(
        &self,
        pet_id: i64,
        query: &VetVisitQuery,
    ) -> ApiResult<Page<VetVisit>> {
        let limit = query.limit.unwrap_or(super::DEFAULT_PAGE_SIZE);
        let offset = query.offset.unwrap_or(0);
        self.record(MockRequest::ListVetVisits {
            pet_id,
            limit,
            offset,
        });
        self.require_pet(pet_id)?;

        let matching: Vec<VetVisit> = self
            .visits
            .get(&pet_id)
            .into_iter()
            .flatten()
            .filter(|v| visit_matches(v, query))
            .cloned()
            .collect();
        Ok(self.page_of(pet_id, matching, limit, offset))
    }

    async fn list_medications(
        &self,
        pet_id: i64,
        query: &ListQuery,
    ) -> ApiResult<Page<Medication>> {
        let limit = query.limit.unwrap_or(super::DEFAULT_PAGE_SIZE);
        let offset = query.offset.unwrap_or(0);
        self.record(MockRequest::ListMedications {
            pet_id,
            limit,
            offset,
        });
        self.require_pet(pet_id)?;

        let matching: Vec<Medication> = self
            .medications
            .get(&pet_id)
            .into_iter()
            .flatten()
            .filter(|m| medication_matches(m, query))
            .cloned()
            .collect();
        Ok(self.page_of(pet_id, matching, limit, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_unknown_pet_is_404() {
        let mock = MockDataSource::new();
        let err = block_on(mock.get_pet(3)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(mock.requests(), vec![MockRequest::GetPet(3)]);
    }

    #[test]
    fn test_visits_are_paged() {
        let visits = (1..=5)
            .map(|i| VetVisit::new(i, 1, date("2024-01-01")))
            .collect();
        let mock = MockDataSource::new()
            .with_pet(Pet::new(1, "Mugi"))
            .with_visits(1, visits);

        let page = block_on(mock.list_vet_visits(1, &VetVisitQuery::page(2, 4))).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 5);
    }

    #[test]
    fn test_visit_search_filters() {
        let mut checkup = VetVisit::new(1, 1, date("2024-01-01"));
        checkup.hospital_name = Some("Sakura Animal Clinic".into());
        let mut dermatitis = VetVisit::new(2, 1, date("2024-02-01"));
        dermatitis.diagnosis = Some("Dermatitis".into());
        let mock = MockDataSource::new()
            .with_pet(Pet::new(1, "Mugi"))
            .with_visits(1, vec![checkup, dermatitis]);

        let query = VetVisitQuery {
            q: Some("Derm".into()),
            ..VetVisitQuery::default()
        };
        let page = block_on(mock.list_vet_visits(1, &query)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 2);
    }

    #[test]
    fn test_missing_summary_is_empty() {
        let mock = MockDataSource::new().with_pet(Pet::new(1, "Mugi"));
        let summary = block_on(mock.get_pet_summary(1)).unwrap();
        assert!(summary.vet_visit_last.is_none());
        assert_eq!(summary.medication_active.count, 0);
    }
}
