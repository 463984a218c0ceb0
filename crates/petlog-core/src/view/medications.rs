//! Medication list screen: active courses first, then past ones.

use chrono::NaiveDate;
use serde::Serialize;

use crate::format::format_date;
use crate::models::{partition_medications, Medication};

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MedicationListView {
    pub active: Vec<MedicationRow>,
    pub past: Vec<MedicationRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicationRow {
    pub med_id: i64,
    pub name: String,
    /// `2024/01/01 – ongoing` or `2024/01/01 – 2024/06/01`
    pub period: String,
    /// Dosage and frequency joined with ` / `, when either is set
    pub dosage: Option<String>,
}

impl MedicationListView {
    /// Split `medications` as of `today`, keeping input order in each group.
    pub fn build(medications: Vec<Medication>, today: NaiveDate) -> Self {
        let partition = partition_medications(medications, today);
        Self {
            active: partition.active.iter().map(MedicationRow::from).collect(),
            past: partition.past.iter().map(MedicationRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.past.is_empty()
    }
}

impl From<&Medication> for MedicationRow {
    fn from(med: &Medication) -> Self {
        let period = match med.end_on {
            Some(end) => format!("{} – {}", format_date(med.start_on), format_date(end)),
            None => format!("{} – ongoing", format_date(med.start_on)),
        };

        let dosage: Vec<&str> = [med.dosage.as_deref(), med.frequency.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            med_id: med.id,
            name: med.name.clone(),
            period,
            dosage: (!dosage.is_empty()).then(|| dosage.join(" / ")),
        }
    }
}
