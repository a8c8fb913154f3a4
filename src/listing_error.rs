//! Domain errors raised by the ranking, validation and catalog layers.

use std::collections::BTreeMap;

/// Field name to human readable message, as produced by form validation.
///
/// Ordered so that serialized output and error displays are deterministic.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Validation failed for fields: {}", field_list(.0))]
    ValidationFailed(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),

    #[error("Listing not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn field_list(errors: &FieldErrors) -> String {
    errors.keys().cloned().collect::<Vec<_>>().join(", ")
}

impl ListingError {
    /// Field map carried by a validation failure, if this is one.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ListingError::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}
