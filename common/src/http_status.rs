//! HTTP status classification used by response normalization.

use serde::Serialize;

/// Highest status that still counts as a successful exchange.
///
/// 304 Not Modified is a success for a caching client, so anything above it
/// is treated as a remote error.
pub const LAST_SUCCESS_STATUS: u16 = 304;

/// HTTP status code carried on normalized responses and request errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    #[inline]
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Status above 304.
    pub fn is_error(&self) -> bool {
        self.0 > LAST_SUCCESS_STATUS
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// 429 Too Many Requests. Pair with the usage-limit headers for backoff.
    pub fn is_rate_limited(&self) -> bool {
        self.0 == 429
    }

    /// Codes that indicate transient failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self.0, 429 | 502 | 503 | 504)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
