use models::HttpMethod;

use common::ErrorLocation;
use thiserror::Error;

/// A call rejected before any network activity.
#[derive(Debug, Error)]
pub enum RequestValidationError {
    #[error(
        "Request Validation Error: invalid API endpoint path '{path}'. Examples: `/entries`, `/geo/feature/types` {location}"
    )]
    InvalidPath {
        path: String,
        location: ErrorLocation,
    },

    #[error("Request Validation Error: missing or invalid `data` body for {method} request {location}")]
    MissingData {
        method: HttpMethod,
        location: ErrorLocation,
    },
}

impl RequestValidationError {
    #[track_caller]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        RequestValidationError::InvalidPath {
            path: path.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn missing_data(method: HttpMethod) -> Self {
        RequestValidationError::MissingData {
            method,
            location: ErrorLocation::here(),
        }
    }
}
