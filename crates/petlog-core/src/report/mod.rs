//! History report builder.

mod history;
mod render;

pub use history::*;
pub use render::*;

use thiserror::Error;

/// Report rendering errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
