//! Vet visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A single visit to a veterinary hospital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VetVisit {
    pub id: i64,
    pub pet_id: i64,
    pub visited_on: NaiveDate,
    pub hospital_name: Option<String>,
    pub doctor_name: Option<String>,
    pub chief_complaint: Option<String>,
    pub diagnosis: Option<String>,
    /// Cost in whole yen
    pub cost_yen: Option<i64>,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl VetVisit {
    pub fn new(id: i64, pet_id: i64, visited_on: NaiveDate) -> Self {
        Self {
            id,
            pet_id,
            visited_on,
            hospital_name: None,
            doctor_name: None,
            chief_complaint: None,
            diagnosis: None,
            cost_yen: None,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Diagnosis text, treating whitespace-only values as absent.
    pub fn diagnosis_text(&self) -> Option<&str> {
        self.diagnosis
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Payload for creating or replacing a vet visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VetVisitInput {
    pub visited_on: NaiveDate,
    pub hospital_name: Option<String>,
    pub doctor_name: Option<String>,
    pub chief_complaint: Option<String>,
    pub diagnosis: Option<String>,
    pub cost_yen: Option<i64>,
    pub note: Option<String>,
}

impl VetVisitInput {
    /// Create a payload for a visit on the given date.
    pub fn new(visited_on: NaiveDate) -> Self {
        Self {
            visited_on,
            hospital_name: None,
            doctor_name: None,
            chief_complaint: None,
            diagnosis: None,
            cost_yen: None,
            note: None,
        }
    }

    /// Cost, when given, must not be negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cost_yen.is_some_and(|cost| cost < 0) {
            return Err(ValidationError::Negative("cost_yen"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(diagnosis: Option<&str>) -> VetVisit {
        VetVisit {
            id: 1,
            pet_id: 7,
            visited_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hospital_name: None,
            doctor_name: None,
            chief_complaint: None,
            diagnosis: diagnosis.map(String::from),
            cost_yen: None,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_diagnosis_text() {
        assert_eq!(visit(Some(" Otitis ")).diagnosis_text(), Some("Otitis"));
        assert_eq!(visit(Some("  \t")).diagnosis_text(), None);
        assert_eq!(visit(Some("")).diagnosis_text(), None);
        assert_eq!(visit(None).diagnosis_text(), None);
    }

    #[test]
    fn test_deserialize_visit() {
        let json = r#"{
            "id": 3, "pet_id": 7, "visited_on": "2024-05-10",
            "hospital_name": "Sakura Animal Clinic", "cost_yen": 5400,
            "created_at": "2024-05-10T10:00:00", "updated_at": "2024-05-10T10:00:00"
        }"#;
        let v: VetVisit = serde_json::from_str(json).unwrap();
        assert_eq!(v.cost_yen, Some(5400));
        assert_eq!(v.visited_on.to_string(), "2024-05-10");
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let mut input = VetVisitInput::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert!(input.validate().is_ok());

        input.cost_yen = Some(0);
        assert!(input.validate().is_ok());

        input.cost_yen = Some(-1);
        assert_eq!(input.validate(), Err(ValidationError::Negative("cost_yen")));
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "cost_yen must not be negative"
        );
    }
}
