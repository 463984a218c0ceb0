//! Home screen: one card per pet.

use serde::Serialize;

use crate::format::{format_date, format_kg};
use crate::models::PetSummary;
use crate::overview::PetOverview;

/// Number of active medication names shown on a card.
pub const MEDICATION_PREVIEW: usize = 2;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HomeView {
    pub cards: Vec<PetCard>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PetCard {
    pub pet_id: i64,
    pub name: String,
    pub species: Option<String>,
    /// `None` when the summary could not be loaded
    pub summary: Option<CardSummary>,
}

/// Summary block of a card. `None` fields render as "not recorded".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardSummary {
    pub last_visit: Option<VisitLine>,
    /// e.g. `4.3 kg (2024/05/01)`
    pub last_weight: Option<String>,
    pub active_medication_count: usize,
    /// First [`MEDICATION_PREVIEW`] active medication names
    pub medication_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisitLine {
    pub visited_on: String,
    pub hospital_name: Option<String>,
    pub diagnosis: Option<String>,
}

impl HomeView {
    pub fn from_overviews(overviews: &[PetOverview]) -> Self {
        Self {
            cards: overviews.iter().map(PetCard::from_overview).collect(),
        }
    }

    /// No pets registered yet; the screen prompts to add one.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl PetCard {
    pub fn from_overview(overview: &PetOverview) -> Self {
        let pet = &overview.pet;
        Self {
            pet_id: pet.id,
            name: pet.name.clone(),
            species: pet.species.clone().filter(|s| !s.trim().is_empty()),
            summary: overview.summary.as_ref().map(CardSummary::from_summary),
        }
    }

    pub fn summary_unavailable(&self) -> bool {
        self.summary.is_none()
    }
}

impl CardSummary {
    pub fn from_summary(summary: &PetSummary) -> Self {
        let last_visit = summary.vet_visit_last.as_ref().map(|visit| VisitLine {
            visited_on: format_date(visit.visited_on),
            hospital_name: non_blank(visit.hospital_name.as_deref()),
            diagnosis: non_blank(visit.diagnosis.as_deref()),
        });

        let last_weight = summary.weight_last.as_ref().map(|weight| {
            format!(
                "{} ({})",
                format_kg(weight.weight_kg),
                format_date(weight.measured_on)
            )
        });

        Self {
            last_visit,
            last_weight,
            active_medication_count: summary.medication_active.count,
            medication_names: summary
                .medication_names(MEDICATION_PREVIEW)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
