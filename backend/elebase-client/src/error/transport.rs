use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Network-level failure. Produced by the transport, never by a remote
/// error status.
#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection Error: {message} {location}")]
    Connect {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Header Error: '{name}': {message} {location}")]
    InvalidHeader {
        name: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        TransportError::InvalidHeader {
            name: name.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Timeouts and refused connections may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TransportError::Timeout { .. } | TransportError::Connect { .. }
        )
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = error.to_string();

        // Categorize before the error is flattened into a string.
        if error.is_timeout() {
            TransportError::Timeout { message, location }
        } else if error.is_connect() {
            TransportError::Connect { message, location }
        } else {
            TransportError::Http { message, location }
        }
    }
}

impl From<url::ParseError> for TransportError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        TransportError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        TransportError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
