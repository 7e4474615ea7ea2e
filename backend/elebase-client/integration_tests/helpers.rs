//! Test helpers for client integration tests.
//!
//! Each test starts its own `wiremock` server standing in for an Elebase API
//! and points the client at it through the base URL override.

use elebase_client::{ClientSettings, ElebaseClient};

use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";
pub const TEST_PROJECT: &str = "project-1";

/// Path prefix mirroring the real `/{project}/{version}` layout.
pub const CONTENT_PREFIX: &str = "/project-1/v1";

/// Content API settings against `server`, token auth.
pub fn content_settings(server: &MockServer) -> ClientSettings {
    ClientSettings::new()
        .with_token(TEST_TOKEN)
        .with_project(TEST_PROJECT)
        .with_base_url(format!("{}{CONTENT_PREFIX}", server.uri()))
}

pub fn content_client(settings: ClientSettings) -> ElebaseClient {
    ElebaseClient::content(settings).expect("Failed to build content client")
}

pub fn geo_client(server: &MockServer) -> ElebaseClient {
    ElebaseClient::geo(
        ClientSettings::new()
            .with_token(TEST_TOKEN)
            .with_base_url(server.uri()),
    )
    .expect("Failed to build geo client")
}

/// `{CONTENT_PREFIX}{endpoint}`.
pub fn content_path(endpoint: &str) -> String {
    format!("{CONTENT_PREFIX}{endpoint}")
}
