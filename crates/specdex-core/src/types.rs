//! Catalog entities shared by the store, the refresh path and the API.

use crate::error::{Result, SpecdexError};
use serde::{Deserialize, Serialize};

/// A manufacturer owning zero or more devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A product belonging to exactly one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning brand
    pub brand_id: String,
}

/// One flat `(category, field, value)` fact about a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationRecord {
    /// Section label, e.g. "Display"
    pub category: String,
    /// Field label within the section, e.g. "Size"
    pub field: String,
    /// Raw value, possibly empty
    pub value: String,
}

impl SpecificationRecord {
    /// Build a record from borrowed labels.
    #[must_use]
    pub fn new(category: &str, field: &str, value: &str) -> Self {
        Self {
            category: category.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Trim a device name search and enforce the length cap.
///
/// # Errors
/// Returns `SpecdexError::Validation` if the trimmed query is empty or longer
/// than `max_len` characters.
pub fn normalize_search_query(query: &str, max_len: usize) -> Result<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SpecdexError::Validation(
            "search query must not be empty".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(SpecdexError::Validation(format!(
            "search query must be at most {max_len} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}
