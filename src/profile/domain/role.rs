//! Marketplace roles.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to a profile at sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Browses internships, applies, and submits task deliverables.
    Student,
    /// Posts internships, reviews applications, and assigns tasks.
    Company,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "student" => Ok(Self::Student),
            "company" => Ok(Self::Company),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
