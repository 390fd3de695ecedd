//! Repository port for profile persistence and lookup.

use crate::profile::domain::{Profile, ProfileId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for profile repository operations.
pub type ProfileRepositoryResult<T> = Result<T, ProfileRepositoryError>;

/// Profile persistence contract.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::DuplicateProfile`] when a profile
    /// with the same identifier already exists.
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()>;

    /// Persists owner edits to an existing profile. The role column is never
    /// rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileRepositoryError::NotFound`] when the profile does not
    /// exist.
    async fn update(&self, profile: &Profile) -> ProfileRepositoryResult<()>;

    /// Finds a profile by identifier.
    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>>;

    /// Returns the profiles matching any of the given identifiers.
    ///
    /// Unknown identifiers are skipped; the result order is unspecified.
    async fn find_by_ids(&self, ids: &[ProfileId]) -> ProfileRepositoryResult<Vec<Profile>>;
}

/// Errors returned by profile repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate profile identifier: {0}")]
    DuplicateProfile(ProfileId),

    /// The profile was not found.
    #[error("profile not found: {0}")]
    NotFound(ProfileId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted profile data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProfileRepositoryError {
    /// Wraps persisted-data decoding failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
