//! Repository port for internship persistence and browsing.

use crate::internship::domain::{Internship, InternshipFilter, InternshipId};
use crate::profile::domain::ProfileId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for internship repository operations.
pub type InternshipRepositoryResult<T> = Result<T, InternshipRepositoryError>;

/// Internship persistence contract.
#[async_trait]
pub trait InternshipRepository: Send + Sync {
    /// Stores a new internship.
    ///
    /// # Errors
    ///
    /// Returns [`InternshipRepositoryError::DuplicateInternship`] when an
    /// internship with the same identifier already exists.
    async fn store(&self, internship: &Internship) -> InternshipRepositoryResult<()>;

    /// Persists the status of an existing internship.
    ///
    /// # Errors
    ///
    /// Returns [`InternshipRepositoryError::NotFound`] when the internship
    /// does not exist.
    async fn update(&self, internship: &Internship) -> InternshipRepositoryResult<()>;

    /// Finds an internship by identifier.
    async fn find_by_id(&self, id: InternshipId) -> InternshipRepositoryResult<Option<Internship>>;

    /// Returns the internships matching any of the given identifiers.
    async fn find_by_ids(&self, ids: &[InternshipId])
    -> InternshipRepositoryResult<Vec<Internship>>;

    /// Lists open internships matching `filter`, newest first.
    async fn list_open(&self, filter: &InternshipFilter)
    -> InternshipRepositoryResult<Vec<Internship>>;

    /// Lists every internship owned by a company, newest first.
    async fn list_by_company(
        &self,
        company_id: ProfileId,
    ) -> InternshipRepositoryResult<Vec<Internship>>;
}

/// Errors returned by internship repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InternshipRepositoryError {
    /// An internship with the same identifier already exists.
    #[error("duplicate internship identifier: {0}")]
    DuplicateInternship(InternshipId),

    /// The internship was not found.
    #[error("internship not found: {0}")]
    NotFound(InternshipId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted internship data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InternshipRepositoryError {
    /// Wraps persisted-data decoding failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
