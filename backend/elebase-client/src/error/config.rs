use models::{ApiTarget, ModelError};

use common::ErrorLocation;
use thiserror::Error;

/// Raised while turning settings into a `ClientConfig`. Never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Validation Error: missing API key/token for {target} client {location}")]
    MissingCredentials {
        target: ApiTarget,
        location: ErrorLocation,
    },

    #[error("Config Validation Error: missing public and/or private API key {location}")]
    IncompleteKeyPair { location: ErrorLocation },

    #[error("Config Validation Error: missing or invalid project ID {location}")]
    InvalidProject { location: ErrorLocation },

    #[error("Config Validation Error: invalid entry phase: {source} {location}")]
    InvalidPhase {
        location: ErrorLocation,
        #[source]
        source: ModelError,
    },

    #[error("Config Validation Error: unknown or unsupported API version '{version}' {location}")]
    UnsupportedVersion {
        version: String,
        location: ErrorLocation,
    },

    #[error("Config Validation Error: invalid base URL '{url}': {reason} {location}")]
    InvalidBaseUrl {
        url: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Config Parse Error: {reason} {location}")]
    ParseError {
        reason: String,
        location: ErrorLocation,
    },
}
