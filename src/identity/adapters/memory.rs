//! In-memory identity provider storing salted SHA-256 password digests.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::identity::{
    domain::{Email, IdentityError, IdentityUser, MIN_PASSWORD_LENGTH, SignUpRequest},
    ports::{IdentityGateway, IdentityResult},
};
use crate::profile::domain::ProfileId;

#[derive(Debug, Clone)]
struct Account {
    user: IdentityUser,
    salt: [u8; 16],
    digest: [u8; 32],
}

#[derive(Debug, Default)]
struct State {
    accounts: HashMap<Email, Account>,
    signed_in: HashSet<ProfileId>,
}

/// Thread-safe in-memory identity gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityGateway {
    state: Arc<RwLock<State>>,
}

impl InMemoryIdentityGateway {
    /// Creates a gateway with no registered identities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> IdentityError {
    IdentityError::unavailable(std::io::Error::other(err.to_string()))
}

fn password_digest(salt: &[u8; 16], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[async_trait]
impl IdentityGateway for InMemoryIdentityGateway {
    async fn sign_up(&self, request: &SignUpRequest) -> IdentityResult<IdentityUser> {
        let email = Email::parse(request.email())?;
        if request.password().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IdentityError::WeakPassword);
        }

        let mut state = self.state.write().map_err(lock_error)?;
        if state.accounts.contains_key(&email) {
            return Err(IdentityError::EmailTaken(email));
        }

        let salt = *Uuid::new_v4().as_bytes();
        let user = IdentityUser::new(ProfileId::new(), email.clone(), request.full_name().trim());
        state.accounts.insert(
            email,
            Account {
                user: user.clone(),
                salt,
                digest: password_digest(&salt, request.password()),
            },
        );
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<IdentityUser> {
        let parsed = Email::parse(email).map_err(|_| IdentityError::InvalidCredentials)?;
        let mut state = self.state.write().map_err(lock_error)?;
        let account = state
            .accounts
            .get(&parsed)
            .filter(|account| password_digest(&account.salt, password) == account.digest)
            .ok_or(IdentityError::InvalidCredentials)?;
        let user = account.user.clone();
        state.signed_in.insert(user.id());
        Ok(user)
    }

    async fn cancel_sign_up(&self, user: &IdentityUser) -> IdentityResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let registered = state
            .accounts
            .get(user.email())
            .is_some_and(|account| account.user.id() == user.id());
        if !registered {
            return Err(IdentityError::UnknownIdentity(user.id()));
        }
        state.accounts.remove(user.email());
        state.signed_in.remove(&user.id());
        Ok(())
    }

    async fn sign_out(&self, user: &IdentityUser) -> IdentityResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.signed_in.remove(&user.id()) {
            return Err(IdentityError::NotSignedIn(user.id()));
        }
        Ok(())
    }
}
