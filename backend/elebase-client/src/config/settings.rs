use crate::error::config::ConfigError;

use models::Headers;

use common::ErrorLocation;

use std::panic::Location;

use serde::Deserialize;

// ============================================
// SETTINGS STRUCTS
// ============================================

/// Public/private key pair as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeySettings {
    #[serde(default)]
    pub public: Option<String>,
    #[serde(default)]
    pub private: Option<String>,
}

/// Transport settings as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpOptions {
    /// Milliseconds; negative values clamp to 0, missing means 20000.
    #[serde(default)]
    pub timeout: Option<i64>,
    #[serde(default)]
    pub logging: Option<bool>,
    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: Headers,
}

/// Unvalidated client settings.
///
/// Every field is optional here; [`super::ClientConfig`] decides what is
/// required for a given API target. Deserializes from the same JSON shape
/// the JavaScript SDK accepts:
///
/// ```json
/// { "token": "...", "project": "p1", "phases": [2, 0], "http": { "logging": true } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub key: Option<KeySettings>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub locales: Option<Vec<String>>,
    #[serde(default)]
    pub phases: Option<Vec<i64>>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Replaces the computed base URL (staging hosts, mock servers).
    #[serde(default, alias = "baseURL")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub http: HttpOptions,
}

impl ClientSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON document.
    #[track_caller]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_key(mut self, public: impl Into<String>, private: impl Into<String>) -> Self {
        self.key = Some(KeySettings {
            public: Some(public.into()),
            private: Some(private.into()),
        });
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_phases(mut self, phases: impl IntoIterator<Item = i64>) -> Self {
        self.phases = Some(phases.into_iter().collect());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout: i64) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    pub fn with_logging(mut self, logging: bool) -> Self {
        self.http.logging = Some(logging);
        self
    }

    pub fn with_default_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.http.headers.insert(name, value);
        self
    }
}
