//! Pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_text, ValidationError};

/// A pet as returned by the backend. Every other entity is scoped to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Backend identifier
    pub id: i64,
    /// Pet name
    pub name: String,
    /// Species (e.g., "dog", "cat")
    pub species: Option<String>,
    /// Breed
    pub breed: Option<String>,
    /// Sex ("male", "female", "unknown")
    pub sex: Option<String>,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Photo URL
    pub photo_url: Option<String>,
    /// Creation timestamp
    pub created_at: Option<String>,
    /// Last update timestamp
    pub updated_at: Option<String>,
}

impl Pet {
    /// A pet with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            species: None,
            breed: None,
            sex: None,
            birth_date: None,
            notes: None,
            photo_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Species for display, or an empty string when unknown.
    pub fn species_label(&self) -> &str {
        self.species.as_deref().unwrap_or_default()
    }
}

/// Payload for creating or replacing a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PetInput {
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

impl PetInput {
    /// Create a payload with required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the species.
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

impl From<&Pet> for PetInput {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone(),
            sex: pet.sex.clone(),
            birth_date: pet.birth_date,
            notes: pet.notes.clone(),
            photo_url: pet.photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_pet() {
        let json = r#"{
            "id": 7,
            "name": "Mugi",
            "species": "cat",
            "sex": "female",
            "birth_date": "2019-04-02",
            "photo_url": null,
            "created_at": "2024-01-01T09:00:00",
            "updated_at": "2024-01-02T09:00:00"
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, 7);
        assert_eq!(pet.species_label(), "cat");
        assert_eq!(pet.birth_date, NaiveDate::from_ymd_opt(2019, 4, 2));
        assert!(pet.breed.is_none());
    }

    #[test]
    fn test_input_requires_name() {
        assert!(PetInput::new("Pochi").with_species("dog").validate().is_ok());
        assert_eq!(
            PetInput::new(" ").validate(),
            Err(ValidationError::Missing("name"))
        );
    }

    #[test]
    fn test_input_from_pet_keeps_attributes() {
        let pet: Pet =
            serde_json::from_str(r#"{"id": 1, "name": "Mugi", "breed": "Mix"}"#).unwrap();
        let input = PetInput::from(&pet);
        assert_eq!(input.name, "Mugi");
        assert_eq!(input.breed.as_deref(), Some("Mix"));
    }
}
