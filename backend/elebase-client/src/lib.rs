//! Client for the Elebase content and geo APIs.
//!
//! ```no_run
//! use elebase_client::{ClientSettings, ElebaseClient, RequestOptions};
//!
//! # async fn run() -> Result<(), elebase_client::ClientError> {
//! let client = ElebaseClient::content(
//!     ClientSettings::new()
//!         .with_token("api-token")
//!         .with_project("my-project")
//!         .with_phases([2, 0]),
//! )?;
//!
//! let entry = client
//!     .get("/entries", RequestOptions::new().with_first(true))
//!     .await?;
//! println!("{}", entry.data);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod tests;

pub use auth::{Credentials, KeyPair};
pub use client::ElebaseClient;
pub use config::{ClientConfig, ClientSettings, HttpSettings};
pub use diagnostics::{DiagnosticEntry, DiagnosticsSink, LogSink, Outcome};
pub use error::{ClientError, ConfigError, RequestError, RequestValidationError, TransportError};
pub use request::RequestBuilder;
pub use response::NormalizedTransaction;
pub use transport::{ReqwestTransport, Transport};

pub use models::{
    ApiTarget, ApiVersion, Headers, HttpMethod, NormalizedResponse, Phase, RequestDescriptor,
    RequestOptions,
};

pub const CONTENT_API_BASE_URL: &str = "https://cdn.elebase.io";
pub const GEO_API_BASE_URL: &str = "https://geo.elebase.io";
pub const SDK_USER_AGENT: &str =
    const_format::concatcp!("elebase/rust-sdk/", env!("CARGO_PKG_VERSION"));
