//! Pet summary snapshot computed by the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Most recent clinical data points for one pet. Read-only, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetSummary {
    pub pet_id: i64,
    pub vet_visit_last: Option<LastVetVisit>,
    pub weight_last: Option<LastWeight>,
    #[serde(default)]
    pub medication_active: ActiveMedications,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastVetVisit {
    pub visit_id: i64,
    pub visited_on: NaiveDate,
    pub hospital_name: Option<String>,
    pub diagnosis: Option<String>,
    pub cost_yen: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LastWeight {
    pub weight_id: i64,
    pub measured_on: NaiveDate,
    #[serde(deserialize_with = "super::decimal::deserialize")]
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActiveMedications {
    pub count: usize,
    #[serde(default)]
    pub items: Vec<ActiveMedicationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveMedicationItem {
    pub med_id: i64,
    pub name: String,
    pub start_on: Option<NaiveDate>,
    pub end_on: Option<NaiveDate>,
}

impl PetSummary {
    /// Names of the first `n` active medications.
    pub fn medication_names(&self, n: usize) -> Vec<&str> {
        self.medication_active
            .items
            .iter()
            .take(n)
            .map(|m| m.name.as_str())
            .collect()
    }
}
