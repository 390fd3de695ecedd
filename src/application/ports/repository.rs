//! Repository port for application persistence and lookup.

use crate::application::domain::{Application, ApplicationId, ApplicationStatus};
use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application repository operations.
pub type ApplicationRepositoryResult<T> = Result<T, ApplicationRepositoryError>;

/// Application persistence contract.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Stores a new application.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::DuplicateApplication`] when the
    /// student already applied to the internship, and
    /// [`ApplicationRepositoryError::DuplicateId`] on an identifier clash.
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()>;

    /// Writes the application's status only if the stored status still
    /// equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::StatusConflict`] when the stored
    /// status differs from `expected`, and
    /// [`ApplicationRepositoryError::NotFound`] when the row is absent.
    async fn update_status(
        &self,
        application: &Application,
        expected: ApplicationStatus,
    ) -> ApplicationRepositoryResult<()>;

    /// Finds an application by identifier.
    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>>;

    /// Finds the application of `student_id` to `internship_id`, if any.
    async fn find_by_pair(
        &self,
        internship_id: InternshipId,
        student_id: ProfileId,
    ) -> ApplicationRepositoryResult<Option<Application>>;

    /// Lists a student's applications, newest first.
    async fn list_by_student(
        &self,
        student_id: ProfileId,
    ) -> ApplicationRepositoryResult<Vec<Application>>;

    /// Lists applications to any of the given internships, newest first.
    async fn list_by_internships(
        &self,
        internship_ids: &[InternshipId],
    ) -> ApplicationRepositoryResult<Vec<Application>>;

    /// Counts applications to the given internships that have `status`.
    async fn count_with_status(
        &self,
        internship_ids: &[InternshipId],
        status: ApplicationStatus,
    ) -> ApplicationRepositoryResult<usize>;
}

/// Errors returned by application repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationRepositoryError {
    /// The student already applied to the internship.
    #[error("student {student_id} already applied to internship {internship_id}")]
    DuplicateApplication {
        /// Internship applied to.
        internship_id: InternshipId,
        /// Applying student.
        student_id: ProfileId,
    },

    /// An application with the same identifier already exists.
    #[error("duplicate application identifier: {0}")]
    DuplicateId(ApplicationId),

    /// The application was not found.
    #[error("application not found: {0}")]
    NotFound(ApplicationId),

    /// The stored status changed since it was read.
    #[error(
        "application {id} status is {actual}, expected {expected} before moving to {requested}"
    )]
    StatusConflict {
        /// Application whose write was refused.
        id: ApplicationId,
        /// Status the write was conditioned on.
        expected: ApplicationStatus,
        /// Status actually stored.
        actual: ApplicationStatus,
        /// Status that was being written.
        requested: ApplicationStatus,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted application data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationRepositoryError {
    /// Wraps persisted-data decoding failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
