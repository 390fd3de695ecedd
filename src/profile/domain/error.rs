//! Error types for profile validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing profiles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileDomainError {
    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// A company name was required but is empty after trimming.
    #[error("company name must not be empty")]
    EmptyCompanyName,
}

/// Error returned while parsing a role from persistence or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
