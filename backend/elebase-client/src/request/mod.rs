//! Turns a [`RequestDescriptor`] into a [`TransportRequest`].
//!
//! The builder owns every per-target decision made before the network:
//! path normalization, body validation, credential placement, locale and
//! default phase injection. Content and geo requests share one code path
//! that branches on [`ApiTarget`].

pub mod query;

use crate::auth;
use crate::config::ClientConfig;
use crate::error::request::RequestValidationError;

use models::{ApiTarget, Headers, Phase, RequestDescriptor, RequestOptions, TransportRequest};

use log::debug;
use serde_json::{Map, Value};

pub const ACCEPT_LANGUAGE_HEADER: &str = "Accept-Language";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Path that receives the configured default phase filter.
const ENTRIES_PATH: &str = "/entries";
const PHASE_PARAM: &str = "phase";
const TOKEN_FIELD: &str = "token";

/// Builds transport requests against one validated configuration.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a ClientConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// Validate and normalize one call.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError`] if:
    /// - the method is POST/PUT and the body is missing or not a JSON object
    /// - the path is empty after trimming, or starts with a scheme (`http...`)
    #[track_caller]
    pub fn build(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<TransportRequest, RequestValidationError> {
        let RequestDescriptor {
            method,
            path,
            options,
        } = descriptor;
        let RequestOptions {
            body,
            mut params,
            headers: overrides,
            locales,
            user,
            ..
        } = options;

        // GET and DELETE bodies are dropped, never validated.
        let mut body = if method.requires_body() {
            match body {
                Some(Value::Object(map)) => Some(Value::Object(map)),
                _ => return Err(RequestValidationError::missing_data(method)),
            }
        } else {
            None
        };

        let url = normalize_path(&path)?;
        let mut headers = Headers::new();

        match self.config.target() {
            ApiTarget::Geo => {
                let token = Value::from(self.config.credentials().as_token().unwrap_or_default());
                match body.as_mut() {
                    Some(Value::Object(fields)) => {
                        fields.insert(TOKEN_FIELD.to_string(), token);
                    }
                    _ => {
                        params.insert(TOKEN_FIELD.to_string(), token);
                    }
                }
            }
            ApiTarget::Content => {
                let locales = locales.as_deref().unwrap_or(self.config.locales());
                if !locales.is_empty() {
                    let language = locales
                        .iter()
                        .map(|locale| locale.trim())
                        .collect::<Vec<_>>()
                        .join(",");
                    headers.insert(ACCEPT_LANGUAGE_HEADER, language);
                }

                let user = user.as_deref().or(self.config.user());
                headers.insert(
                    AUTHORIZATION_HEADER,
                    auth::authorization(self.config.credentials(), body.as_ref(), user),
                );

                inject_default_phases(&url, &mut params, self.config.phases());
            }
        }

        headers.merge(&overrides);

        debug!(
            "Built {method} {url} for {} API ({} params)",
            self.config.target(),
            params.len()
        );

        Ok(TransportRequest {
            method,
            url,
            headers,
            params,
            body,
        })
    }
}

/// Trim, force a single leading `/`, strip one trailing `/`.
///
/// A bare `/` becomes the empty path, i.e. the base URL.
#[track_caller]
pub fn normalize_path(path: &str) -> Result<String, RequestValidationError> {
    let trimmed = path.trim();
    let has_scheme = trimmed
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"));

    if trimmed.is_empty() || has_scheme {
        return Err(RequestValidationError::invalid_path(path));
    }

    let mut url = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    // `/` collapses to "", which addresses the base URL itself.
    if url.ends_with('/') {
        url.pop();
    }

    Ok(url)
}

fn inject_default_phases(url: &str, params: &mut Map<String, Value>, phases: &[Phase]) {
    let explicit = params.get(PHASE_PARAM).is_some_and(|phase| !phase.is_null());

    if url == ENTRIES_PATH && !explicit && !phases.is_empty() {
        params.insert(PHASE_PARAM.to_string(), Value::from(Phase::join(phases)));
    }
}
