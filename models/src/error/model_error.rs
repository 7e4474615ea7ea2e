use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown {kind}: '{value}' {location}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        ModelError::UnknownVariant {
            kind,
            value: value.into(),
            location: ErrorLocation::here(),
        }
    }
}
