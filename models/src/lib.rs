//! Data model for the Elebase client.
//!
//! Pure data structures describing what flows through the client: the
//! closed sets (targets, methods, phases, versions), per-call request
//! options, the transport-level request and the normalized response
//! shapes. Validation of closed sets lives here; signing, building and
//! normalization live in `elebase-client`.

pub mod error;
pub mod headers;
pub mod method;
pub mod phase;
pub mod request;
pub mod response;
pub mod target;
pub mod version;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use headers::Headers;
pub use method::HttpMethod;
pub use phase::{ENTRY_PHASES, Phase};
pub use request::descriptor::RequestDescriptor;
pub use request::options::RequestOptions;
pub use request::transport::TransportRequest;
pub use response::{EchoContext, NormalizedResponse, RawResponse, RequestEcho};
pub use target::ApiTarget;
pub use version::ApiVersion;
