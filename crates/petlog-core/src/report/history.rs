//! Vet visit history: full fetch, ordering and diagnosis projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::HistoryReport;
use crate::api::{collect_all_pages, PetDataSource};
use crate::models::{VetVisit, VetVisitQuery};
use crate::overview::{LoadError, LoadResult};

/// One row of the diagnosis history table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisEntry {
    /// Vet visit ID
    pub visit_id: i64,
    pub visited_on: NaiveDate,
    /// Trimmed, never empty
    pub diagnosis: String,
    pub hospital_name: Option<String>,
}

/// Fetch every vet visit of a pet, `page_size` at a time.
pub async fn fetch_all_vet_visits<S>(
    source: &S,
    pet_id: i64,
    page_size: u32,
) -> LoadResult<Vec<VetVisit>>
where
    S: PetDataSource + ?Sized,
{
    fetch_vet_visits(source, pet_id, &VetVisitQuery::default(), page_size).await
}

/// Fetch every vet visit matching `filter`. Paging fields on `filter` are
/// ignored; `page_size` drives the requests.
#[instrument(skip(source, filter))]
pub async fn fetch_vet_visits<S>(
    source: &S,
    pet_id: i64,
    filter: &VetVisitQuery,
    page_size: u32,
) -> LoadResult<Vec<VetVisit>>
where
    S: PetDataSource + ?Sized,
{
    let visits = collect_all_pages(page_size, |limit, offset| {
        let query = filter.clone().with_page(limit, offset);
        async move { source.list_vet_visits(pet_id, &query).await }
    })
    .await
    .map_err(|source| LoadError::VetVisits { pet_id, source })?;

    info!(pet_id, visits = visits.len(), "vet visits fetched");
    Ok(visits)
}

/// Newest first. Visits on the same date keep their input order.
pub fn sorted_by_date_descending(mut visits: Vec<VetVisit>) -> Vec<VetVisit> {
    visits.sort_by(|a, b| b.visited_on.cmp(&a.visited_on));
    visits
}

/// Visits carrying a diagnosis, in input order.
///
/// Blank and whitespace-only diagnoses count as absent.
pub fn diagnosis_history(visits: &[VetVisit]) -> Vec<DiagnosisEntry> {
    visits
        .iter()
        .filter_map(|visit| {
            visit.diagnosis_text().map(|diagnosis| DiagnosisEntry {
                visit_id: visit.id,
                visited_on: visit.visited_on,
                diagnosis: diagnosis.to_string(),
                hospital_name: visit.hospital_name.clone(),
            })
        })
        .collect()
}

/// Fetch a pet and all of its visits, then build the report.
#[instrument(skip(source))]
pub async fn load_history_report<S>(
    source: &S,
    pet_id: i64,
    page_size: u32,
    issued_on: NaiveDate,
) -> LoadResult<HistoryReport>
where
    S: PetDataSource + ?Sized,
{
    let (pet, visits) = futures::join!(
        source.get_pet(pet_id),
        fetch_all_vet_visits(source, pet_id, page_size)
    );
    let pet = pet.map_err(|source| LoadError::Pet { pet_id, source })?;

    Ok(HistoryReport::build(&pet, visits?, issued_on))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn visit(id: i64, on: &str, diagnosis: Option<&str>) -> VetVisit {
        let mut v = VetVisit::new(id, 7, date(on));
        v.diagnosis = diagnosis.map(String::from);
        v
    }

    #[test]
    fn test_sorted_newest_first() {
        let visits = vec![
            visit(1, "2024-01-10", None),
            visit(2, "2024-03-01", None),
            visit(3, "2023-12-31", None),
        ];
        let ids: Vec<i64> = sorted_by_date_descending(visits)
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_is_stable_for_same_date() {
        let visits = vec![
            visit(1, "2024-01-10", None),
            visit(2, "2024-02-01", None),
            visit(3, "2024-01-10", None),
            visit(4, "2024-01-10", None),
        ];
        let ids: Vec<i64> = sorted_by_date_descending(visits)
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_diagnosis_history_skips_blank() {
        let visits = vec![
            visit(1, "2024-03-01", Some("Otitis externa")),
            visit(2, "2024-02-01", None),
            visit(3, "2024-01-01", Some("")),
            visit(4, "2023-12-01", Some("   \t")),
            visit(5, "2023-11-01", Some("  Dermatitis  ")),
        ];
        let history = diagnosis_history(&visits);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].visit_id, 1);
        assert_eq!(history[1].diagnosis, "Dermatitis");
    }

    proptest! {
        #[test]
        fn prop_sort_orders_and_is_stable(days in proptest::collection::vec(0u32..20, 0..40)) {
            let base = date("2024-01-01");
            let visits: Vec<VetVisit> = days
                .iter()
                .enumerate()
                .map(|(i, d)| VetVisit::new(i as i64, 7, base + chrono::Days::new(*d as u64)))
                .collect();

            let sorted = sorted_by_date_descending(visits);
            prop_assert_eq!(sorted.len(), days.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].visited_on >= pair[1].visited_on);
                if pair[0].visited_on == pair[1].visited_on {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        #[test]
        fn prop_diagnoses_never_blank(
            diagnoses in proptest::collection::vec(proptest::option::of("[ a-z\t]{0,8}"), 0..20)
        ) {
            let visits: Vec<VetVisit> = diagnoses
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let mut v = VetVisit::new(i as i64, 7, date("2024-01-01"));
                    v.diagnosis = d.clone();
                    v
                })
                .collect();

            for entry in diagnosis_history(&visits) {
                prop_assert!(!entry.diagnosis.trim().is_empty());
            }
        }
    }
}
