pub mod settings;

pub use settings::{ClientSettings, HttpOptions, KeySettings};

use crate::auth::Credentials;
use crate::error::config::ConfigError;
use crate::{CONTENT_API_BASE_URL, GEO_API_BASE_URL};

use models::{ApiTarget, ApiVersion, Headers, Phase};

use common::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use log::debug;
use url::Url;

/// Timeout applied when the settings do not name one.
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

// ============================================
// CONFIG STRUCTS
// ============================================

/// Transport settings, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    /// `Duration::ZERO` disables the timeout.
    pub timeout: Duration,
    pub logging: bool,
    pub headers: Headers,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            logging: false,
            headers: Headers::new(),
        }
    }
}

/// Validated, immutable client configuration.
///
/// Built once from [`ClientSettings`]; every field is normalized here so
/// request building never has to re-check it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    target: ApiTarget,
    credentials: Credentials,
    project: Option<String>,
    version: ApiVersion,
    base_url: Url,
    locales: Vec<String>,
    phases: Vec<Phase>,
    user: Option<String>,
    http: HttpSettings,
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// Configuration for the project-scoped content API.
    #[track_caller]
    pub fn content(settings: ClientSettings) -> Result<Self, ConfigError> {
        Self::new(ApiTarget::Content, settings)
    }

    /// Configuration for the geo API.
    #[track_caller]
    pub fn geo(settings: ClientSettings) -> Result<Self, ConfigError> {
        Self::new(ApiTarget::Geo, settings)
    }

    /// Validate `settings` for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - the version is not supported
    /// - no usable credential is present (a token, or for the content API a
    ///   complete key pair)
    /// - the content API project ID is missing
    /// - a phase is outside 0-4
    /// - the base URL override is not an http(s) URL
    #[track_caller]
    pub fn new(target: ApiTarget, settings: ClientSettings) -> Result<Self, ConfigError> {
        let version = match settings.version.as_deref() {
            None => ApiVersion::default(),
            Some(raw) => ApiVersion::from_str(raw).map_err(|_| ConfigError::UnsupportedVersion {
                version: raw.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?,
        };

        let credentials = resolve_credentials(target, &settings)?;

        let project = match target {
            ApiTarget::Content => Some(resolve_project(settings.project.as_deref())?),
            ApiTarget::Geo => non_empty(settings.project),
        };

        let mut phases = settings
            .phases
            .unwrap_or_default()
            .into_iter()
            .map(Phase::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::InvalidPhase {
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;
        phases.sort();

        let base_url = match settings.base_url.as_deref() {
            Some(raw) => parse_base_url(raw)?,
            None => default_base_url(target, project.as_deref(), version)?,
        };

        let http = HttpSettings {
            timeout: resolve_timeout(settings.http.timeout),
            logging: settings.http.logging.unwrap_or(false),
            headers: settings.http.headers,
        };

        debug!(
            "Configured {target} client for {base_url} using {} credentials",
            credentials.scheme()
        );

        Ok(Self {
            target,
            credentials,
            project,
            version,
            base_url,
            locales: settings.locales.unwrap_or_default(),
            phases,
            user: non_empty(settings.user),
            http,
        })
    }

    pub fn target(&self) -> ApiTarget {
        self.target
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default `Accept-Language` locales.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Default entry phase filter, sorted ascending.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Default user identity for the `Authorization` header.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn http(&self) -> &HttpSettings {
        &self.http
    }
}

/// Token wins over a key pair when both are configured.
#[track_caller]
fn resolve_credentials(
    target: ApiTarget,
    settings: &ClientSettings,
) -> Result<Credentials, ConfigError> {
    if let Some(token) = settings.token.as_deref().filter(|t| !t.is_empty()) {
        return Ok(Credentials::token(token));
    }

    match (target, &settings.key) {
        (ApiTarget::Content, Some(key)) => {
            let public = key.public.as_deref().unwrap_or_default();
            let private = key.private.as_deref().unwrap_or_default();

            if public.is_empty() || private.is_empty() {
                return Err(ConfigError::IncompleteKeyPair {
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(Credentials::key_pair(public, private))
        }
        _ => Err(ConfigError::MissingCredentials {
            target,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

#[track_caller]
fn resolve_project(project: Option<&str>) -> Result<String, ConfigError> {
    match project.map(str::trim) {
        Some(project) if !project.is_empty() => Ok(project.to_string()),
        _ => Err(ConfigError::InvalidProject {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn resolve_timeout(timeout_ms: Option<i64>) -> Duration {
    match timeout_ms {
        Some(ms) => Duration::from_millis(ms.max(0) as u64),
        None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
    }
}

#[track_caller]
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
        location: ErrorLocation::from(Location::caller()),
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    Ok(url)
}

/// `https://cdn.elebase.io/{project}/{version}` or the geo host.
#[track_caller]
fn default_base_url(
    target: ApiTarget,
    project: Option<&str>,
    version: ApiVersion,
) -> Result<Url, ConfigError> {
    match target {
        ApiTarget::Geo => parse_base_url(GEO_API_BASE_URL),
        ApiTarget::Content => {
            let mut url = parse_base_url(CONTENT_API_BASE_URL)?;
            let project = project.unwrap_or_default();

            url.path_segments_mut()
                .map_err(|()| ConfigError::InvalidBaseUrl {
                    url: CONTENT_API_BASE_URL.to_string(),
                    reason: "cannot be a base".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?
                .pop_if_empty()
                .push(project)
                .push(version.as_str());

            Ok(url)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
