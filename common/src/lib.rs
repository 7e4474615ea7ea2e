//! Shared primitives for the Elebase client workspace.
//!
//! This crate holds the small building blocks every other crate leans on:
//! error locations, secrets that refuse to leak into logs, and HTTP status
//! classification. It has no knowledge of the Elebase APIs themselves.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Pure data structures for requests and responses
//! - **elebase-client**: Signing, request building, normalization and the client façade

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
