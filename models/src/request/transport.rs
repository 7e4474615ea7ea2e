use crate::{Headers, HttpMethod};

use serde::Serialize;
use serde_json::{Map, Value};

/// Fully-formed request handed to the transport.
///
/// `url` is relative to the client's base URL: it always starts with `/`,
/// never ends with `/` and never carries a scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub params: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}
