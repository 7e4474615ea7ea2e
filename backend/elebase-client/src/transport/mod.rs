//! The seam between the client and the HTTP stack.
//!
//! The client only needs "send this request, give me status, headers and
//! body". Pooling, TLS and proxying stay inside `reqwest`. Non-2xx statuses
//! are ordinary responses here; deciding what is an error belongs to
//! response normalization.

use crate::SDK_USER_AGENT;
use crate::auth::serialize_body;
use crate::config::HttpSettings;
use crate::error::transport::TransportError;
use crate::request::query;

use models::{Headers, HttpMethod, RawResponse, TransportRequest};

use common::HttpStatusCode;

use std::future::Future;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Sends one [`TransportRequest`] and returns the raw response.
///
/// Implementations must not fail on error statuses; only network-level
/// problems are errors.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &TransportRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport with base URL, timeout and default headers
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: Url,
    client: Client,
}

impl ReqwestTransport {
    pub fn new(base_url: Url, http: &HttpSettings) -> Result<Self, TransportError> {
        let mut builder =
            Client::builder().default_headers(to_header_map(&default_headers(http))?);
        if !http.timeout.is_zero() {
            builder = builder.timeout(http.timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `request`, with its params percent-encoded.
    pub fn endpoint(&self, request: &TransportRequest) -> Result<Url, TransportError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", request.url))?;

        let pairs = query::to_pairs(&request.params);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        let url = self.endpoint(request)?;
        debug!("Sending {} {url}", request.method);

        let mut builder = self
            .client
            .request(to_method(request.method), url)
            .headers(to_header_map(&request_headers(request))?);

        if let Some(body) = &request.body {
            builder = builder.body(serialize_body(body)?);
        }

        let response = builder.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let headers = from_header_map(response.headers());
        let bytes = response.bytes().await?;

        debug!("Received HTTP {status} ({} bytes)", bytes.len());

        Ok(RawResponse {
            status,
            headers,
            data: parse_body(&bytes),
        })
    }
}

/// Headers sent on every request: `Accept`, `User-Agent`, then the
/// configured defaults.
pub fn default_headers(http: &HttpSettings) -> Headers {
    let mut headers = Headers::new()
        .with(ACCEPT.as_str(), JSON_MEDIA_TYPE)
        .with(USER_AGENT.as_str(), SDK_USER_AGENT);
    headers.merge(&http.headers);
    headers
}

/// Per-call headers as sent. Requests with a body get a JSON
/// `Content-Type` unless the call already names one.
pub fn request_headers(request: &TransportRequest) -> Headers {
    let mut headers = request.headers.clone();

    if request.body.is_some() && !headers.contains(CONTENT_TYPE.as_str()) {
        headers.insert(CONTENT_TYPE.as_str(), JSON_MEDIA_TYPE);
    }

    headers
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[track_caller]
fn to_header_map(headers: &Headers) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers.iter() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TransportError::invalid_header(name, e.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| TransportError::invalid_header(name, e.to_string()))?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

/// Repeated headers are joined with `", "`; non-UTF-8 values are skipped.
fn from_header_map(map: &HeaderMap) -> Headers {
    let mut headers = Headers::new();

    for name in map.keys() {
        let values = map
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>();

        if !values.is_empty() {
            headers.insert(name.as_str(), values.join(", "));
        }
    }

    headers
}

/// Empty bodies become `null`; bodies that are not JSON become a JSON string.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
