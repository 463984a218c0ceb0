//! Summary aggregator integration tests.

use petlog_core::api::{MockDataSource, MockRequest};
use petlog_core::models::{Pet, PetSummary};
use petlog_core::view::HomeView;
use petlog_core::{load_home_overview, load_pet_overview, LoadError};

fn make_summary(pet_id: i64) -> PetSummary {
    serde_json::from_value(serde_json::json!({
        "pet_id": pet_id,
        "vet_visit_last": null,
        "weight_last": {"weight_id": pet_id * 10, "measured_on": "2024-05-01", "weight_kg": "4.30"},
        "medication_active": {"count": 0, "items": []}
    }))
    .unwrap()
}

fn make_source(n: i64) -> MockDataSource {
    let mut source = MockDataSource::new();
    for id in 1..=n {
        source = source
            .with_pet(Pet::new(id, format!("Pet {}", id)))
            .with_summary(make_summary(id));
    }
    source
}

#[tokio::test]
async fn test_one_failing_summary_keeps_every_pet() {
    let source = make_source(5).failing_summary(3);

    let home = load_home_overview(&source).await.unwrap();

    assert_eq!(home.len(), 5);
    let ids: Vec<i64> = home.iter().map(|o| o.pet.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    for overview in &home {
        if overview.pet.id == 3 {
            assert!(overview.summary.is_none());
        } else {
            assert_eq!(overview.summary, Some(make_summary(overview.pet.id)));
        }
    }
}

#[tokio::test]
async fn test_every_summary_failing() {
    let mut source = make_source(3);
    for id in 1..=3 {
        source = source.failing_summary(id);
    }

    let home = load_home_overview(&source).await.unwrap();
    assert_eq!(home.len(), 3);
    assert!(home.iter().all(|o| o.summary.is_none()));
}

#[tokio::test]
async fn test_pet_fetch_failure_falls_back_to_listing() {
    let source = make_source(3).failing_pet(2);

    let home = load_home_overview(&source).await.unwrap();

    assert_eq!(home[1].pet, Pet::new(2, "Pet 2"));
    assert!(home[1].summary.is_none());
    assert!(home[0].summary.is_some());
    assert!(home[2].summary.is_some());
}

#[tokio::test]
async fn test_listing_failure_is_an_error() {
    let source = make_source(2).failing_listing();

    let err = load_home_overview(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Pets(_)));
    assert_eq!(source.requests(), vec![MockRequest::ListPets]);
}

#[tokio::test]
async fn test_each_pet_loaded_once() {
    let source = make_source(3);
    load_home_overview(&source).await.unwrap();

    let requests = source.requests();
    assert_eq!(requests[0], MockRequest::ListPets);
    for id in 1..=3 {
        assert_eq!(
            requests.iter().filter(|r| **r == MockRequest::GetPet(id)).count(),
            1
        );
        assert_eq!(
            requests
                .iter()
                .filter(|r| **r == MockRequest::GetSummary(id))
                .count(),
            1
        );
    }
}

#[tokio::test]
async fn test_pet_overview_not_found() {
    let source = make_source(1);

    let err = load_pet_overview(&source, 42).await.unwrap_err();
    assert!(err.api_error().is_not_found());
}

#[tokio::test]
async fn test_home_view_from_loaded_overviews() {
    let source = make_source(2).failing_summary(2);
    let home = load_home_overview(&source).await.unwrap();

    let view = HomeView::from_overviews(&home);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(
        view.cards[0]
            .summary
            .as_ref()
            .and_then(|s| s.last_weight.as_deref()),
        Some("4.3 kg (2024/05/01)")
    );
    assert!(view.cards[1].summary_unavailable());
}

#[tokio::test]
async fn test_no_pets() {
    let source = MockDataSource::new();
    let home = load_home_overview(&source).await.unwrap();
    assert!(HomeView::from_overviews(&home).is_empty());
}
