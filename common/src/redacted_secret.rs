//! Credential material with redacted Debug/Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// Placeholder written wherever a secret would otherwise be printed.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// An API token or private key that never exposes its value in logs.
///
/// The inner value is zeroized on drop. Serialization is refused so a secret
/// cannot end up in a diagnostics dump by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedSecret {
    label: &'static str,
    inner: String,
}

impl RedactedSecret {
    /// Wrap a secret. `label` names it in debug output (e.g. `"token"`).
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            inner: value.into(),
        }
    }

    /// The raw secret, for signing or for putting on the wire.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedSecret({}: {REDACTED_PLACEHOLDER})", self.label)
    }
}

impl fmt::Display for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_PLACEHOLDER)
    }
}

impl Drop for RedactedSecret {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl serde::Serialize for RedactedSecret {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::SerializationRefused {
            label: self.label,
            location: ErrorLocation::here(),
        }))
    }
}
