use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when code tries to push a secret through a serializer.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Secret Serialization Refused: {label} must be read with expose() {location}")]
    SerializationRefused {
        label: &'static str,
        location: ErrorLocation,
    },
}
