//! Shared fixtures for unit tests.

use crate::config::{ClientConfig, ClientSettings};
use crate::diagnostics::{DiagnosticEntry, DiagnosticsSink};
use crate::error::TransportError;
use crate::transport::Transport;

use models::{Headers, RawResponse, TransportRequest};

use common::HttpStatusCode;

use std::sync::{Arc, Mutex};

use serde_json::Value;

pub const PROJECT: &str = "project-1";

pub fn token_settings() -> ClientSettings {
    ClientSettings::new()
        .with_token("tok")
        .with_project(PROJECT)
}

pub fn content_config(settings: ClientSettings) -> ClientConfig {
    ClientConfig::content(settings).expect("valid content config")
}

pub fn geo_config() -> ClientConfig {
    ClientConfig::geo(ClientSettings::new().with_token("geo-token")).expect("valid geo config")
}

pub fn raw_response(status: u16, data: Value) -> RawResponse {
    RawResponse {
        status: HttpStatusCode(status),
        headers: Headers::new(),
        data,
    }
}

/// Transport answering every request with one canned response and
/// remembering what it was sent.
#[derive(Clone)]
pub struct StubTransport {
    response: RawResponse,
    pub sent: Arc<Mutex<Vec<TransportRequest>>>,
}

impl StubTransport {
    pub fn new(response: RawResponse) -> Self {
        Self {
            response,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// Sink keeping every entry for inspection.
#[derive(Clone, Default)]
pub struct CaptureSink {
    pub entries: Arc<Mutex<Vec<DiagnosticEntry>>>,
}

impl DiagnosticsSink for CaptureSink {
    fn record(&self, entry: &DiagnosticEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}
