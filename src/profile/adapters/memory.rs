//! In-memory profile repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::profile::{
    domain::{Profile, ProfileId},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};

/// Thread-safe in-memory profile repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<ProfileId, Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ProfileRepositoryError {
    ProfileRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(lock_error)?;
        if profiles.contains_key(&profile.id()) {
            return Err(ProfileRepositoryError::DuplicateProfile(profile.id()));
        }
        profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let mut profiles = self.profiles.write().map_err(lock_error)?;
        let stored = profiles
            .get_mut(&profile.id())
            .ok_or(ProfileRepositoryError::NotFound(profile.id()))?;
        *stored = profile.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>> {
        let profiles = self.profiles.read().map_err(lock_error)?;
        Ok(profiles.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ProfileId]) -> ProfileRepositoryResult<Vec<Profile>> {
        let profiles = self.profiles.read().map_err(lock_error)?;
        Ok(ids
            .iter()
            .filter_map(|id| profiles.get(id).cloned())
            .collect())
    }
}
