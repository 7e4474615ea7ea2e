pub mod config;
pub mod request;
pub mod request_error;
pub mod transport;

pub use config::ConfigError;
pub use request::RequestValidationError;
pub use request_error::{RequestError, USAGE_LIMIT_INFO_HEADER, USAGE_LIMIT_TIME_HEADER};
pub use transport::TransportError;

use thiserror::Error;

/// Every failure a client verb can surface.
///
/// Exactly one of these or a response is produced per call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] RequestValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// The remote error, if the service answered with status > 304.
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            ClientError::Request(error) => Some(error),
            _ => None,
        }
    }

    /// Whether a caller-side retry could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Request(error) => error.is_retryable(),
            ClientError::Transport(error) => error.is_retryable(),
            ClientError::Config(_) | ClientError::Validation(_) => false,
        }
    }
}
