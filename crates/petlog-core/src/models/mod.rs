//! Domain models for the petlog client.

mod medication;
mod page;
mod pet;
mod record;
mod summary;
mod vet_visit;
mod weight;

pub use medication::*;
pub use page::*;
pub use pet::*;
pub use record::*;
pub use summary::*;
pub use vet_visit::*;
pub use weight::*;

use thiserror::Error;

/// Input payload rejected before it is sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),
}

/// Reject a required text field that is empty or whitespace-only.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(())
}

/// Decimal values the backend may send either as JSON numbers or as strings.
pub(crate) mod decimal {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Mugi").is_ok());
        assert_eq!(
            require_text("name", "   "),
            Err(ValidationError::Missing("name"))
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Missing("name").to_string(), "name is required");
        assert_eq!(
            ValidationError::NotPositive("weight_kg").to_string(),
            "weight_kg must be greater than zero"
        );
    }
}
