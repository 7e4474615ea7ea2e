//! Errors reported by the remote service.
//!
//! The content and geo APIs disagree on the shape of their error bodies:
//!
//! - content: `{"error": {"id": "...", "data": ...}}`
//! - geo: `{"error": {"code": ..., "info": ..., "type": "..."}}`
//!
//! Both are folded into one [`RequestError`] tagged by origin. Either way
//! the usage-limit headers are carried so callers can back off.

use models::{ApiTarget, NormalizedResponse};

use common::{ErrorLocation, HttpStatusCode};

use std::collections::BTreeMap;

use serde_json::{Value, json};
use thiserror::Error;

/// Remaining request allowance reported by the service.
pub const USAGE_LIMIT_INFO_HEADER: &str = "X-Usage-Limit-Info";

/// When the usage allowance resets.
pub const USAGE_LIMIT_TIME_HEADER: &str = "X-Usage-Limit-Time";

const UNKNOWN: &str = "unknown";

/// The service answered with a status above 304.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error("Content API Error: HTTP {status} [{id}] {message} {location}")]
    Content {
        status: HttpStatusCode,
        id: String,
        data: Option<Value>,
        message: String,
        headers: BTreeMap<String, String>,
        location: ErrorLocation,
    },

    #[error("Geo API Error: HTTP {status} [{code}] {error_type} {location}")]
    Geo {
        status: HttpStatusCode,
        code: String,
        info: Option<Value>,
        error_type: String,
        headers: BTreeMap<String, String>,
        location: ErrorLocation,
    },
}

impl RequestError {
    /// Build the error from an already-normalized response.
    ///
    /// The response is the only input: the error body is read from its
    /// `data` (an error body has no `data` envelope, so it is left intact)
    /// and the usage-limit headers from its headers.
    #[track_caller]
    pub fn from_response(target: ApiTarget, response: &NormalizedResponse) -> Self {
        let body = response.data.get("error").unwrap_or(&Value::Null);
        let headers = usage_limit_headers(response);
        let status = response.status;
        let location = ErrorLocation::here();

        match target {
            ApiTarget::Content => {
                let id = truthy_text(body.get("id"));
                let data = truthy_value(body.get("data"));
                let message = match &id {
                    Some(id) => format!("API error: {}", json!({ "id": id, "data": data })),
                    None => String::new(),
                };

                RequestError::Content {
                    status,
                    id: id.unwrap_or_else(|| UNKNOWN.to_string()),
                    data,
                    message,
                    headers,
                    location,
                }
            }
            ApiTarget::Geo => RequestError::Geo {
                status,
                code: truthy_text(body.get("code")).unwrap_or_else(|| UNKNOWN.to_string()),
                info: truthy_value(body.get("info")),
                error_type: truthy_text(body.get("type")).unwrap_or_else(|| UNKNOWN.to_string()),
                headers,
                location,
            },
        }
    }

    pub fn target(&self) -> ApiTarget {
        match self {
            RequestError::Content { .. } => ApiTarget::Content,
            RequestError::Geo { .. } => ApiTarget::Geo,
        }
    }

    pub fn status(&self) -> HttpStatusCode {
        match self {
            RequestError::Content { status, .. } | RequestError::Geo { status, .. } => *status,
        }
    }

    /// Usage-limit headers copied from the response. Absent headers have no key.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        match self {
            RequestError::Content { headers, .. } | RequestError::Geo { headers, .. } => headers,
        }
    }

    pub fn usage_limit_info(&self) -> Option<&str> {
        self.headers().get(USAGE_LIMIT_INFO_HEADER).map(String::as_str)
    }

    pub fn usage_limit_time(&self) -> Option<&str> {
        self.headers().get(USAGE_LIMIT_TIME_HEADER).map(String::as_str)
    }

    /// Status-based hint only; the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        self.status().is_retryable()
    }
}

fn usage_limit_headers(response: &NormalizedResponse) -> BTreeMap<String, String> {
    [USAGE_LIMIT_INFO_HEADER, USAGE_LIMIT_TIME_HEADER]
        .into_iter()
        .filter_map(|name| {
            response
                .headers
                .get(name)
                .filter(|value| !value.is_empty())
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect()
}

/// Text form of a field, skipping values JSON callers would treat as falsy.
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match truthy_value(value)? {
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn truthy_value(value: Option<&Value>) -> Option<Value> {
    value.filter(|value| is_truthy(value)).cloned()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
