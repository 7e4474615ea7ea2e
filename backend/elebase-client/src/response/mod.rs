//! Maps a raw transport response into a [`NormalizedTransaction`].

use crate::error::request_error::RequestError;
use crate::transport::request_headers;

use models::{
    ApiTarget, EchoContext, Headers, NormalizedResponse, RawResponse, RequestEcho,
    TransportRequest,
};

use serde_json::{Map, Value};

/// Envelope key wrapping the real payload.
const DATA_ENVELOPE: &str = "data";

/// Everything known about one completed call.
#[derive(Debug, Clone)]
pub struct NormalizedTransaction {
    pub request: RequestEcho,
    pub response: NormalizedResponse,
    /// Present only when the status is above 304.
    pub error: Option<RequestError>,
}

impl NormalizedTransaction {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Layer `defaults` beneath the echoed per-call headers so the echo
    /// matches what went over the wire. Per-call headers win on collision.
    pub fn with_default_headers(mut self, defaults: &Headers) -> Self {
        let mut headers = defaults.clone();
        headers.merge(&self.request.headers);
        self.request.headers = headers;
        self
    }

    /// Split into the caller-visible outcome.
    pub fn into_result(self) -> Result<NormalizedResponse, RequestError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.response),
        }
    }
}

/// Normalize `raw`, the answer to `sent`.
///
/// The response is built first; the error, if any, is then derived from
/// that finished response.
pub fn normalize(
    raw: RawResponse,
    sent: &TransportRequest,
    context: EchoContext,
) -> NormalizedTransaction {
    let target: ApiTarget = context.target;
    let request = echo_request(sent, context);
    let response = normalize_response(raw);

    let error = response
        .status
        .is_error()
        .then(|| RequestError::from_response(target, &response));

    NormalizedTransaction {
        request,
        response,
        error,
    }
}

fn echo_request(sent: &TransportRequest, context: EchoContext) -> RequestEcho {
    RequestEcho {
        context,
        headers: request_headers(sent),
        body: sent.body.clone(),
        method: sent.method.as_str().to_ascii_uppercase(),
        params: sent.params.clone(),
        url: sent.url.clone(),
    }
}

/// Unwrap a `{"data": ...}` envelope one level when it holds an object or
/// array; non-object bodies become `{}`.
pub fn normalize_response(raw: RawResponse) -> NormalizedResponse {
    let data = match raw.data {
        Value::Object(mut body) => match body.remove(DATA_ENVELOPE) {
            Some(inner @ (Value::Object(_) | Value::Array(_))) => inner,
            Some(other) => {
                body.insert(DATA_ENVELOPE.to_string(), other);
                Value::Object(body)
            }
            None => Value::Object(body),
        },
        _ => Value::Object(Map::new()),
    };

    NormalizedResponse {
        status: raw.status,
        headers: raw.headers,
        data,
    }
}
