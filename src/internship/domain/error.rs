//! Error types for internship validation and parsing.

use thiserror::Error;

/// Errors returned while posting or changing internships.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InternshipDomainError {
    /// One or more required posting fields are blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// The requested status cannot be reached from the current status.
    #[error("invalid internship status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Current status.
        from: String,
        /// Requested status.
        to: String,
    },
}

/// Error returned while parsing an internship status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown internship status: {0}")]
pub struct ParseInternshipStatusError(pub String);
