//! Weight measurement models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A body weight measurement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    pub id: i64,
    pub pet_id: i64,
    pub measured_on: NaiveDate,
    /// Weight in kg
    #[serde(deserialize_with = "super::decimal::deserialize")]
    pub weight_kg: f64,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Payload for creating or replacing a weight measurement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightInput {
    pub measured_on: NaiveDate,
    #[serde(deserialize_with = "super::decimal::deserialize")]
    pub weight_kg: f64,
    pub note: Option<String>,
}

impl WeightInput {
    pub fn new(measured_on: NaiveDate, weight_kg: f64) -> Self {
        Self {
            measured_on,
            weight_kg,
            note: None,
        }
    }

    /// Weight must be a positive number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(ValidationError::NotPositive("weight_kg"));
        }
        Ok(())
    }
}
