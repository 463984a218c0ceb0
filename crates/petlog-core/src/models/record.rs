//! Daily record models.
//!
//! A record binds a date to subjective scores, a memo, and the weights,
//! medications and vet visits entered for that day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MedicationInput, ValidationError, VetVisitInput, WeightInput};

/// An entry embedded in a record. `id` is absent for entries not yet saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordItem<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> RecordItem<T> {
    /// A new, unsaved entry.
    pub fn new(fields: T) -> Self {
        Self { id: None, fields }
    }
}

/// A full daily record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: i64,
    pub pet_id: i64,
    pub recorded_on: NaiveDate,
    pub title: Option<String>,
    /// Overall condition, 1-5
    pub condition_level: Option<u8>,
    /// Appetite, 1-5
    pub appetite_level: Option<u8>,
    /// Stool quality, 1-5
    pub stool_level: Option<u8>,
    #[serde(alias = "note")]
    pub memo: Option<String>,
    #[serde(default)]
    pub weights: Vec<RecordItem<WeightInput>>,
    #[serde(default)]
    pub medications: Vec<RecordItem<MedicationInput>>,
    #[serde(default)]
    pub vet_visits: Vec<RecordItem<VetVisitInput>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Record as it appears in listings: flags instead of embedded entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordListItem {
    pub id: i64,
    pub pet_id: i64,
    pub recorded_on: NaiveDate,
    pub title: Option<String>,
    pub condition_level: Option<u8>,
    #[serde(default)]
    pub has_weights: bool,
    #[serde(default)]
    pub has_medications: bool,
    #[serde(default)]
    pub has_vet_visits: bool,
    pub updated_at: Option<String>,
}

/// Payload for creating or replacing a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordInput {
    pub recorded_on: NaiveDate,
    pub title: Option<String>,
    pub condition_level: Option<u8>,
    pub appetite_level: Option<u8>,
    pub stool_level: Option<u8>,
    pub memo: Option<String>,
    #[serde(default)]
    pub weights: Vec<RecordItem<WeightInput>>,
    #[serde(default)]
    pub medications: Vec<RecordItem<MedicationInput>>,
    #[serde(default)]
    pub vet_visits: Vec<RecordItem<VetVisitInput>>,
}

impl RecordInput {
    pub fn new(recorded_on: NaiveDate) -> Self {
        Self {
            recorded_on,
            title: None,
            condition_level: None,
            appetite_level: None,
            stool_level: None,
            memo: None,
            weights: Vec::new(),
            medications: Vec::new(),
            vet_visits: Vec::new(),
        }
    }

    /// Check required fields of every embedded entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for w in &self.weights {
            w.fields.validate()?;
        }
        for m in &self.medications {
            m.fields.validate()?;
        }
        for v in &self.vet_visits {
            v.fields.validate()?;
        }
        Ok(())
    }
}

impl From<&Record> for RecordInput {
    fn from(record: &Record) -> Self {
        Self {
            recorded_on: record.recorded_on,
            title: record.title.clone(),
            condition_level: record.condition_level,
            appetite_level: record.appetite_level,
            stool_level: record.stool_level,
            memo: record.memo.clone(),
            weights: record.weights.clone(),
            medications: record.medications.clone(),
            vet_visits: record.vet_visits.clone(),
        }
    }
}
