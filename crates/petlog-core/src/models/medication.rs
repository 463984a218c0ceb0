//! Medication models and the active/past partition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_text, ValidationError};

/// A medication course. No end date means the course is ongoing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: i64,
    pub pet_id: i64,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_on: NaiveDate,
    pub end_on: Option<NaiveDate>,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Medication {
    pub fn new(id: i64, pet_id: i64, name: impl Into<String>, start_on: NaiveDate) -> Self {
        Self {
            id,
            pet_id,
            name: name.into(),
            dosage: None,
            frequency: None,
            start_on,
            end_on: None,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether the course is still running on `today`.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        course_active_on(self.end_on, today)
    }
}

/// A course is active when it has no end date or ends on/after `today`.
pub fn course_active_on(end_on: Option<NaiveDate>, today: NaiveDate) -> bool {
    match end_on {
        None => true,
        Some(end) => end >= today,
    }
}

/// Medications split into running and finished courses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationPartition {
    pub active: Vec<Medication>,
    pub past: Vec<Medication>,
}

impl MedicationPartition {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.past.len()
    }
}

/// Split medications into active and past groups as of `today`.
///
/// Comparison is by calendar date only; input order is kept within each group.
pub fn partition_medications<I>(medications: I, today: NaiveDate) -> MedicationPartition
where
    I: IntoIterator<Item = Medication>,
{
    let (active, past) = medications
        .into_iter()
        .partition(|m| m.is_active_on(today));
    MedicationPartition { active, past }
}

/// Payload for creating or replacing a medication course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationInput {
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub start_on: NaiveDate,
    pub end_on: Option<NaiveDate>,
    pub note: Option<String>,
}

impl MedicationInput {
    pub fn new(name: impl Into<String>, start_on: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dosage: None,
            frequency: None,
            start_on,
            end_on: None,
            note: None,
        }
    }

    /// Check required fields. An end date before the start date is left to the backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}
