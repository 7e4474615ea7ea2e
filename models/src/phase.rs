//! Entry publication phases.

use crate::{ErrorLocation, ModelError};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every phase value the content API understands.
pub const ENTRY_PHASES: [u8; 5] = [0, 1, 2, 3, 4];

/// Publication phase of an entry, used as the default `phase` filter on
/// `/entries` requests. Always one of [`ENTRY_PHASES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Phase(u8);

impl Phase {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Comma-join phases for the `phase` query parameter, e.g. `"0,2,3"`.
    pub fn join(phases: &[Phase]) -> String {
        phases
            .iter()
            .map(|phase| phase.0.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl TryFrom<i64> for Phase {
    type Error = ModelError;

    #[track_caller]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|candidate| ENTRY_PHASES.contains(candidate))
            .map(Phase)
            .ok_or_else(|| ModelError::Validation {
                message: format!("Invalid entry phase: {value} (expected 0-4)"),
                location: ErrorLocation::here(),
            })
    }
}

impl TryFrom<u8> for Phase {
    type Error = ModelError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Phase::try_from(i64::from(value))
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.0
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
