//! Port contract for the identity provider.

use super::domain::{IdentityError, IdentityUser, SignUpRequest};
use async_trait::async_trait;

/// Result type for identity gateway operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Authentication contract consumed by the session manager.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Registers a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidEmail`], [`IdentityError::WeakPassword`]
    /// or [`IdentityError::EmailTaken`] for rejected sign-ups.
    async fn sign_up(&self, request: &SignUpRequest) -> IdentityResult<IdentityUser>;

    /// Authenticates an identity and opens a session for it.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when the email and
    /// password do not match.
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<IdentityUser>;

    /// Removes an identity registered by [`IdentityGateway::sign_up`] whose
    /// sign-up could not be completed.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UnknownIdentity`] when no such identity is
    /// registered.
    async fn cancel_sign_up(&self, user: &IdentityUser) -> IdentityResult<()>;

    /// Ends the identity's session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotSignedIn`] when no session is open.
    async fn sign_out(&self, user: &IdentityUser) -> IdentityResult<()>;
}
