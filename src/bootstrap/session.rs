//! Sign-up, sign-in, and role resolution.

use crate::error::MarketplaceError;
use crate::identity::domain::{IdentityError, IdentityUser, SignUpRequest};
use crate::identity::ports::IdentityGateway;
use crate::lifecycle::Actor;
use crate::profile::domain::{ProfileId, Role};
use crate::profile::services::ProfileService;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Signed-in identity with its role resolved once at sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: IdentityUser,
    role: Role,
}

impl Session {
    /// Returns the signed-in identity.
    #[must_use]
    pub const fn user(&self) -> &IdentityUser {
        &self.user
    }

    /// Returns the cached role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the actor used for authorization.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        Actor::new(self.user.id(), self.role)
    }
}

/// Errors raised while opening or closing a session.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The identity provider rejected the request.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The identity has no profile carrying a role.
    #[error("Role not assigned. Please contact support.")]
    RoleNotAssigned(ProfileId),

    /// The profile store failed.
    #[error(transparent)]
    Marketplace(#[from] MarketplaceError),
}

/// Identity gateway front that resolves roles from profiles.
pub struct SessionManager<C>
where
    C: Clock + Send + Sync,
{
    gateway: Arc<dyn IdentityGateway>,
    profiles: ProfileService<C>,
}

impl<C> SessionManager<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a session manager over `gateway`.
    #[must_use]
    pub const fn new(gateway: Arc<dyn IdentityGateway>, profiles: ProfileService<C>) -> Self {
        Self { gateway, profiles }
    }

    /// Registers an identity, records its profile with the chosen role, and
    /// opens a session for it. A failed profile write cancels the
    /// registration so the sign-up can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Identity`] when the gateway rejects the
    /// sign-up, and [`SessionError::Marketplace`] when the profile cannot
    /// be stored.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Session, SessionError> {
        let registered = self.gateway.sign_up(request).await?;
        if let Err(err) = self
            .profiles
            .create(
                registered.id(),
                request.role(),
                registered.full_name(),
                registered.email().as_str(),
            )
            .await
        {
            warn!(
                profile_id = %registered.id(),
                error = %err,
                "profile creation failed, cancelling sign-up"
            );
            if let Err(rollback) = self.gateway.cancel_sign_up(&registered).await {
                warn!(
                    profile_id = %registered.id(),
                    error = %rollback,
                    "sign-up cancellation failed"
                );
            }
            return Err(err.into());
        }
        info!(profile_id = %registered.id(), role = %request.role(), "identity signed up");

        let user = self
            .gateway
            .sign_in(request.email(), request.password())
            .await?;
        Ok(Session {
            user,
            role: request.role(),
        })
    }

    /// Authenticates an identity and resolves its role from the profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Identity`] for rejected credentials and
    /// [`SessionError::RoleNotAssigned`] when the identity has no profile.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let user = self.gateway.sign_in(email, password).await?;
        let profile = match self.profiles.find(user.id()).await {
            Ok(profile) => profile,
            Err(MarketplaceError::NotFound { .. }) => {
                warn!(profile_id = %user.id(), "signed-in identity has no profile");
                return Err(SessionError::RoleNotAssigned(user.id()));
            }
            Err(err) => return Err(err.into()),
        };
        info!(profile_id = %user.id(), role = %profile.role(), "session opened");
        Ok(Session {
            role: profile.role(),
            user,
        })
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Identity`] when the gateway has no open
    /// session for the identity.
    #[expect(
        clippy::needless_pass_by_value,
        reason = "signing out ends the session for the caller"
    )]
    pub async fn sign_out(&self, session: Session) -> Result<(), SessionError> {
        self.gateway.sign_out(&session.user).await?;
        info!(profile_id = %session.user.id(), "session closed");
        Ok(())
    }
}
