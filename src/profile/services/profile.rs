//! Service layer for profile creation, lookup, and owner self-edits.

use crate::error::{Entity, MarketplaceError, MarketplaceResult};
use crate::lifecycle::{Action, Actor, Ownership, authorize};
use crate::profile::domain::{Profile, ProfileChanges, ProfileId, Role};
use crate::store::Store;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Profile orchestration service.
#[derive(Clone)]
pub struct ProfileService<C>
where
    C: Clock + Send + Sync,
{
    store: Store,
    clock: Arc<C>,
}

impl<C> ProfileService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new profile service.
    #[must_use]
    pub const fn new(store: Store, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Records the profile of a freshly signed-up identity.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Validation`] for a malformed email and
    /// [`MarketplaceError::PreconditionFailed`] when the identity already has
    /// a profile.
    pub async fn create(
        &self,
        id: ProfileId,
        role: Role,
        full_name: &str,
        email: &str,
    ) -> MarketplaceResult<Profile> {
        let profile = Profile::new(id, role, full_name, email, &*self.clock)?;
        self.store.profiles().store(&profile).await?;
        info!(profile_id = %id, role = %role, "profile created");
        Ok(profile)
    }

    /// Returns the profile with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] when no such profile exists.
    pub async fn find(&self, id: ProfileId) -> MarketplaceResult<Profile> {
        debug!(profile_id = %id, "loading profile");
        self.store
            .profiles()
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Profile, id))
    }

    /// Applies an owner's self-edit to a profile.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Unauthorized`] unless `actor` owns the
    /// profile, and [`MarketplaceError::Validation`] when the changes are
    /// rejected.
    pub async fn update(
        &self,
        actor: &Actor,
        id: ProfileId,
        changes: ProfileChanges,
    ) -> MarketplaceResult<Profile> {
        let mut profile = self.find(id).await?;
        authorize(actor, Action::EditProfile, Ownership::profile(&profile))?;
        profile.apply_changes(changes, &*self.clock)?;
        self.store.profiles().update(&profile).await?;
        info!(profile_id = %id, "profile updated");
        Ok(profile)
    }
}
