//! Human-readable transaction logging through an injected sink.
//!
//! Every entry is labelled `"{METHOD} {url}?{query} ({status})"` and is
//! redacted before any sink sees it, so a custom sink cannot leak what the
//! default one hides.

use crate::error::request_error::RequestError;
use crate::request::AUTHORIZATION_HEADER;
use crate::request::query::stringify_sorted;
use crate::response::NormalizedTransaction;

use models::{NormalizedResponse, RequestEcho};

use common::HttpStatusCode;

use log::{error, info};
use serde::Serialize;
use serde_json::Value;

/// Replacement for redacted values.
pub const REDACTED_MASK: &str = "***********";

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "elebase::http";

const SENSITIVE_BODY_FIELD: &str = "pwd";

/// How the call ended.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success(NormalizedResponse),
    Failure(RequestError),
}

/// One redacted, labelled transaction ready for output.
#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub label: String,
    pub request: RequestEcho,
    pub outcome: Outcome,
}

impl DiagnosticEntry {
    /// Label and redact `transaction`. The transaction itself is not modified.
    pub fn from_transaction(transaction: &NormalizedTransaction) -> Self {
        let outcome = match &transaction.error {
            Some(error) => Outcome::Failure(error.clone()),
            None => Outcome::Success(transaction.response.clone()),
        };

        Self {
            label: label(&transaction.request, transaction.response.status),
            request: redact(&transaction.request),
            outcome,
        }
    }
}

/// Destination for diagnostics. Injected into the client so tests can
/// capture output and applications can route it anywhere.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, entry: &DiagnosticEntry);
}

/// Default sink writing through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn record(&self, entry: &DiagnosticEntry) {
        info!(target: LOG_TARGET, "{}", entry.label);

        match &entry.outcome {
            Outcome::Success(response) => {
                info!(target: LOG_TARGET, "  request: {}", to_json(&entry.request));
                info!(target: LOG_TARGET, "  response: {}", to_json(response));
            }
            Outcome::Failure(request_error) => {
                error!(target: LOG_TARGET, "  {request_error}");
            }
        }
    }
}

/// `"{METHOD} {url}{?query} ({status})"`, query sorted and unencoded.
pub fn label(request: &RequestEcho, status: HttpStatusCode) -> String {
    let query = stringify_sorted(&request.params);
    let separator = if query.is_empty() { "" } else { "?" };

    format!(
        "{} {}{separator}{query} ({status})",
        request.method, request.url
    )
}

/// Copy of `request` with the body `pwd` field and the Authorization
/// header masked. Bodies without `pwd` are copied unchanged.
pub fn redact(request: &RequestEcho) -> RequestEcho {
    let mut redacted = request.clone();

    if let Some(Value::Object(body)) = redacted.body.as_mut() {
        if let Some(pwd) = body.get_mut(SENSITIVE_BODY_FIELD) {
            *pwd = Value::from(REDACTED_MASK);
        }
    }

    if redacted.headers.contains(AUTHORIZATION_HEADER) {
        redacted.headers.insert(AUTHORIZATION_HEADER, REDACTED_MASK);
    }

    redacted
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
