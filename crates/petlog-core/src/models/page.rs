//! Response envelopes and list query parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One page of a paginated collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching items on the server at the time of the request
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> Page<T> {
    /// A page holding every item, as the `active` endpoints return.
    pub fn complete(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            total,
            limit: total,
            offset: 0,
        }
    }
}

/// `{ "item": ... }` wrapper used for single entities.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemEnvelope<T> {
    pub item: T,
}

/// `{ "id": ... }` body returned when a record is created or replaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdResponse {
    pub id: i64,
}

/// `{ "items": [...] }` wrapper used for unpaginated listings.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub items: Vec<T>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Paging and date-range filter for weights and medications.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl ListQuery {
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// Vet visit listing filter: paging, date range and free-text search.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VetVisitQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    /// Matches hospital name, diagnosis or chief complaint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl VetVisitQuery {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// Record listing filter. The records endpoint names its range `from_date`/`to_date`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
}
