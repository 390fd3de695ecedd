//! Repository port for task persistence and lookup.

use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Writes the task's status, submission link, and feedback only if the
    /// stored status still equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StatusConflict`] when the stored status
    /// differs from `expected`, and [`TaskRepositoryError::NotFound`] when the
    /// row is absent.
    async fn update_progress(&self, task: &Task, expected: TaskStatus) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Lists a student's tasks by due date.
    async fn list_by_student(&self, student_id: ProfileId) -> TaskRepositoryResult<Vec<Task>>;

    /// Lists tasks on any of the given internships by due date.
    async fn list_by_internships(
        &self,
        internship_ids: &[InternshipId],
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks on the given internships that have `status`.
    async fn count_with_status(
        &self,
        internship_ids: &[InternshipId],
        status: TaskStatus,
    ) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored status changed since it was read.
    #[error("task {id} status is {actual}, expected {expected} before moving to {requested}")]
    StatusConflict {
        /// Task whose write was refused.
        id: TaskId,
        /// Status the write was conditioned on.
        expected: TaskStatus,
        /// Status actually stored.
        actual: TaskStatus,
        /// Status that was being written.
        requested: TaskStatus,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted task data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps persisted-data decoding failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
