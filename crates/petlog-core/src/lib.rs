//! Petlog Core Library
//!
//! Client side of a pet medical history service: REST access, per-pet
//! summaries for the home screen, and print-ready vet history reports.
//!
//! # Architecture
//!
//! ```text
//!                     ClientConfig (base URL)
//!                              │
//!                          ApiClient ──────────── REST backend
//!                              │                 /pets, /summary,
//!                       PetDataSource            /vet-visits, ...
//!                              │
//!          ┌───────────────────┼────────────────────┐
//!          │                   │                    │
//!          ▼                   ▼                    ▼
//!     overview            report::history      models::medication
//!  pet + summary        paginate all visits    active / past split
//!  (concurrent)         sort, diagnoses             │
//!          │                   │                    │
//!          ▼                   ▼                    ▼
//!      HomeView          HistoryReport        MedicationListView
//!                     HTML / text / JSON
//! ```
//!
//! Loads degrade instead of failing where they can: a missing summary
//! never hides its pet, and one pet's failure never hides the others.
//!
//! # Modules
//!
//! - [`api`]: HTTP client, the [`PetDataSource`] seam, pagination, mock
//! - [`config`]: Base URL configuration
//! - [`models`]: Wire types (Pet, VetVisit, Weight, Medication, Record, ...)
//! - [`overview`]: Summary aggregator
//! - [`report`]: History report builder and renderers
//! - [`view`]: Display state for the home and medication screens
//! - [`format`]: Date and currency display helpers

pub mod api;
pub mod config;
pub mod format;
pub mod models;
pub mod overview;
pub mod report;
pub mod view;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, ApiResult, MockDataSource, PetDataSource};
pub use config::ClientConfig;
pub use models::{
    partition_medications, Medication, MedicationPartition, Page, Pet, PetSummary, VetVisit,
};
pub use overview::{
    load_home_overview, load_medications, load_pet_overview, LoadError, PetOverview,
};
pub use report::{fetch_all_vet_visits, HistoryReport};
