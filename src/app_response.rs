use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::listing_error::ListingError;

/// Envelope returned across the FFI boundary, serialized as externally
/// tagged JSON (`{"Ok":"..."}`, `{"NotFound":"..."}`, ...).
#[derive(Debug, Serialize, Deserialize)]
pub enum AppResponse {
    SerializationError(String),
    NotFound(String),
    ValidationError(String),
    BadRequest(String),
    Unauthorized(String),
    Ok(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppResponse::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
        }
    }
}

impl From<SerdeError> for AppResponse {
    fn from(err: SerdeError) -> Self {
        AppResponse::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<ListingError> for AppResponse {
    fn from(err: ListingError) -> Self {
        match err {
            // Payload is the JSON field map.
            ListingError::ValidationFailed(errors) => match serde_json::to_string(&errors) {
                Ok(json) => AppResponse::ValidationError(json),
                Err(e) => AppResponse::from(e),
            },
            ListingError::InvalidSortKey(_) | ListingError::DuplicateId(_) => {
                AppResponse::BadRequest(err.to_string())
            }
            ListingError::Unauthorized(msg) => AppResponse::Unauthorized(msg),
            ListingError::NotFound(id) => AppResponse::NotFound(format!("No listing found with id: {id}")),
            ListingError::Serialization(e) => AppResponse::from(e),
        }
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }

    /// Serializes `value` into an `Ok` envelope.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => AppResponse::Ok(json),
            Err(e) => AppResponse::SerializationError(format!("Failed to serialize result: {e}")),
        }
    }
}
