//! Response-side data: what the transport returns and what callers see.

use crate::{ApiTarget, Headers};

use common::HttpStatusCode;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Response exactly as the transport received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: HttpStatusCode,
    pub headers: Headers,
    pub data: Value,
}

/// Response returned to callers, with the `data` envelope removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse {
    pub status: HttpStatusCode,
    pub headers: Headers,
    pub data: Value,
}

impl NormalizedResponse {
    /// Deserialize the payload into a caller-defined type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }
}

/// Call context echoed alongside the sent request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoContext {
    pub target: ApiTarget,
    /// Path as the caller passed it, before normalization.
    pub path: String,
    pub first: bool,
}

/// Echo of what was actually sent, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEcho {
    pub context: EchoContext,
    pub headers: Headers,
    pub body: Option<Value>,
    pub method: String,
    pub params: Map<String, Value>,
    pub url: String,
}
