//! Internship posting status.

use super::ParseInternshipStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether students may still apply to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternshipStatus {
    /// Accepting applications.
    Open,
    /// Closed by its owner.
    Closed,
}

impl InternshipStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns whether the posting accepts new applications.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns whether the status can move to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!((self, target), (Self::Open, Self::Closed))
    }
}

impl fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InternshipStatus {
    type Error = ParseInternshipStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseInternshipStatusError(value.to_owned())),
        }
    }
}
