use crate::Headers;

use serde_json::{Map, Value};

/// Per-call options accepted by every client verb.
///
/// Everything is optional; an empty `RequestOptions` is a plain request with
/// the client's configured defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// JSON body. Required (as an object) for POST and PUT, ignored otherwise.
    pub body: Option<Value>,
    /// Query parameters.
    pub params: Map<String, Value>,
    /// Header overrides, applied last.
    pub headers: Headers,
    /// Overrides the configured `Accept-Language` locales for this call.
    pub locales: Option<Vec<String>>,
    /// Overrides the configured user identity for this call.
    pub user: Option<String>,
    /// Unwrap a paged list response (`{index: [...]}`) to its first item.
    pub first: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Replace all params. Anything other than a JSON object resets them to `{}`.
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_first(mut self, first: bool) -> Self {
        self.first = first;
        self
    }
}
