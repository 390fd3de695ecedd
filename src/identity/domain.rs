//! Identity value types.

use crate::profile::domain::{ProfileId, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Normalized sign-in email: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidEmail`] unless the input has the form
    /// `local@domain` without whitespace.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let normalized = raw.trim().to_lowercase();
        let well_formed = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !normalized.chars().any(char::is_whitespace);
        if !well_formed {
            return Err(IdentityError::InvalidEmail(raw.to_owned()));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authenticated identity returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    id: ProfileId,
    email: Email,
    full_name: String,
}

impl IdentityUser {
    /// Creates an identity record.
    #[must_use]
    pub fn new(id: ProfileId, email: Email, full_name: impl Into<String>) -> Self {
        Self {
            id,
            email,
            full_name: full_name.into(),
        }
    }

    /// Returns the identifier shared with the profile.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the sign-in email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the name given at sign-up.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

/// Sign-up form: credentials plus the profile metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    email: String,
    password: String,
    full_name: String,
    role: Role,
}

impl SignUpRequest {
    /// Creates a sign-up request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
            role,
        }
    }

    /// Returns the raw email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the chosen role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Errors returned by identity gateways.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,

    /// An identity with this email already exists.
    #[error("an account already exists for {0}")]
    EmailTaken(Email),

    /// The email and password do not match a known identity.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No identity with this identifier is registered.
    #[error("identity {0} is not registered")]
    UnknownIdentity(ProfileId),

    /// The identity has no active session.
    #[error("identity {0} is not signed in")]
    NotSignedIn(ProfileId),

    /// The identity provider could not be reached.
    #[error("identity provider unavailable: {0}")]
    Unavailable(std::sync::Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(std::sync::Arc::new(err))
    }
}
