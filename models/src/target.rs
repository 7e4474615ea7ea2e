use crate::ModelError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which Elebase service a client talks to.
///
/// The two services differ in authentication (headers vs. a `token` field)
/// and in the shape of their error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiTarget {
    /// Project-scoped content API (entries, assets).
    #[serde(alias = "api")]
    Content,
    /// Token-only geo API.
    Geo,
}

impl ApiTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiTarget::Content => "content",
            ApiTarget::Geo => "geo",
        }
    }
}

impl fmt::Display for ApiTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiTarget {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "content" | "api" => Ok(ApiTarget::Content),
            "geo" => Ok(ApiTarget::Geo),
            _ => Err(ModelError::unknown_variant("API target", value)),
        }
    }
}
