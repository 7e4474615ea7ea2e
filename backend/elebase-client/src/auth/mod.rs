//! Authorization header signing for the content API.
//!
//! Two mutually exclusive schemes:
//! - **Basic**: `Basic base64("{user}:{token}")` for a pre-issued token.
//! - **Elebase HMAC**: `Elebase {public}:{hmac}:{timestamp}:{user}`, where the
//!   HMAC-SHA256 (keyed by the private key) covers the JSON body followed by
//!   the Unix timestamp. The server checks the timestamp against a window,
//!   which bounds replay.
//!
//! Which scheme applies is decided once, when the [`Credentials`] are built.

pub mod credentials;

pub use credentials::{Credentials, KeyPair};

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use log::warn;
use serde_json::Value;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const BASIC_SCHEME: &str = "Basic";
const HMAC_SCHEME: &str = "Elebase";

/// Authorization header value for the configured credential mode.
pub fn authorization(credentials: &Credentials, body: Option<&Value>, user: Option<&str>) -> String {
    match credentials {
        Credentials::Token(token) => sign_basic(token.expose(), user),
        Credentials::KeyPair(key) => sign_hmac(key, body, user),
    }
}

/// `Basic` header value, or an empty string when there is no token.
///
/// The body is not part of Basic signing.
pub fn sign_basic(token: &str, user: Option<&str>) -> String {
    if token.is_empty() {
        return String::new();
    }

    let credentials = format!("{}:{token}", user.unwrap_or_default());
    format!("{BASIC_SCHEME} {}", BASE64.encode(credentials))
}

/// `Elebase` HMAC header value signed at the current time.
pub fn sign_hmac(key: &KeyPair, body: Option<&Value>, user: Option<&str>) -> String {
    sign_hmac_at(key, body, user, unix_timestamp())
}

/// `Elebase` HMAC header value signed at `timestamp` (Unix seconds).
///
/// Returns an empty string when either half of the key pair is missing.
/// Empty segments (typically the user) are left out rather than rendered
/// as `::`.
pub fn sign_hmac_at(
    key: &KeyPair,
    body: Option<&Value>,
    user: Option<&str>,
    timestamp: u64,
) -> String {
    if !key.is_complete() {
        return String::new();
    }

    let timestamp = timestamp.to_string();

    let mut message = match body {
        Some(body) => match serialize_body(body) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to serialize request body for signing: {e}");
                return String::new();
            }
        },
        None => Vec::new(),
    };
    message.extend_from_slice(timestamp.as_bytes());

    let Ok(mut mac) = HmacSha256::new_from_slice(key.private().expose().as_bytes()) else {
        warn!("Rejected private key while initializing HMAC");
        return String::new();
    };
    mac.update(&message);
    let signature = hex::encode(mac.finalize().into_bytes());

    let segments = [
        key.public(),
        signature.as_str(),
        timestamp.as_str(),
        user.unwrap_or_default(),
    ];
    let joined = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(":");

    format!("{HMAC_SCHEME} {joined}")
}

/// Wire encoding of a JSON body. The transport sends exactly these bytes,
/// so the signature covers what the server receives.
pub fn serialize_body(body: &Value) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(body)
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| (elapsed.as_millis() as u64 + 500) / 1000)
        .unwrap_or_default()
}
