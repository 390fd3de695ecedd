//! Service-level error taxonomy shared by the lifecycle engine, posting and
//! profile services, and the view boundary.

use crate::{
    application::{domain::ApplicationDomainError, ports::ApplicationRepositoryError},
    internship::{
        domain::{InternshipDomainError, InternshipId},
        ports::InternshipRepositoryError,
    },
    lifecycle::Action,
    profile::{
        domain::{ProfileDomainError, ProfileId},
        ports::ProfileRepositoryError,
    },
    task::{domain::TaskDomainError, ports::TaskRepositoryError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Stored entity named by an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A user profile.
    Profile,
    /// An internship posting.
    Internship,
    /// A student application.
    Application,
    /// An intern task.
    Task,
}

impl Entity {
    /// Returns the lower-case entity name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Internship => "internship",
            Self::Application => "application",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse error category reported at the view boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The actor does not own, and is not the subject of, the entity.
    Unauthorized,
    /// The requested status is unreachable from the current status.
    InvalidTransition,
    /// The student already applied to the internship.
    DuplicateApplication,
    /// A required prior state is missing.
    PreconditionFailed,
    /// A referenced entity is absent.
    NotFound,
    /// The data store could not be reached or returned corrupt data.
    StoreUnavailable,
    /// The supplied input was rejected.
    Validation,
}

/// Errors returned by marketplace services.
#[derive(Debug, Clone, Error)]
pub enum MarketplaceError {
    /// The actor is not allowed to perform the action on this entity.
    #[error("profile {actor} is not permitted to {action}")]
    Unauthorized {
        /// Acting profile.
        actor: ProfileId,
        /// Attempted action.
        action: Action,
    },

    /// The target status cannot be reached from the current status.
    #[error("invalid {entity} status transition: {from} -> {to}")]
    InvalidTransition {
        /// Entity whose status was being changed.
        entity: Entity,
        /// Status found on the entity.
        from: String,
        /// Requested status.
        to: String,
    },

    /// An application already exists for this internship and student.
    #[error("student {student_id} has already applied to internship {internship_id}")]
    DuplicateApplication {
        /// Internship applied to.
        internship_id: InternshipId,
        /// Applying student.
        student_id: ProfileId,
    },

    /// A required prior state does not hold.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind.
        entity: Entity,
        /// Identifier that was looked up.
        id: Uuid,
    },

    /// The data store failed.
    #[error("data store unavailable: {0}")]
    StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Input validation failed.
    #[error("{0}")]
    Validation(String),
}

/// Result type for marketplace service operations.
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

impl MarketplaceError {
    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::DuplicateApplication { .. } => ErrorKind::DuplicateApplication,
            Self::PreconditionFailed(_) => ErrorKind::PreconditionFailed,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Builds a not-found error for the given entity.
    #[must_use]
    pub fn not_found(entity: Entity, id: impl AsRef<Uuid>) -> Self {
        Self::NotFound {
            entity,
            id: *id.as_ref(),
        }
    }
}

impl From<ProfileDomainError> for MarketplaceError {
    fn from(err: ProfileDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<InternshipDomainError> for MarketplaceError {
    fn from(err: InternshipDomainError) -> Self {
        match err {
            InternshipDomainError::InvalidStatusTransition { from, to } => {
                Self::InvalidTransition {
                    entity: Entity::Internship,
                    from,
                    to,
                }
            }
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<ApplicationDomainError> for MarketplaceError {
    fn from(err: ApplicationDomainError) -> Self {
        match err {
            ApplicationDomainError::InvalidStatusTransition { from, to } => {
                Self::InvalidTransition {
                    entity: Entity::Application,
                    from,
                    to,
                }
            }
        }
    }
}

impl From<TaskDomainError> for MarketplaceError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::InvalidStatusTransition { from, to } => Self::InvalidTransition {
                entity: Entity::Task,
                from,
                to,
            },
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<ProfileRepositoryError> for MarketplaceError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound(id) => Self::not_found(Entity::Profile, id),
            ProfileRepositoryError::DuplicateProfile(id) => {
                Self::PreconditionFailed(format!("profile {id} already exists"))
            }
            ProfileRepositoryError::InvalidPersistedData(source)
            | ProfileRepositoryError::Persistence(source) => Self::StoreUnavailable(source),
        }
    }
}

impl From<InternshipRepositoryError> for MarketplaceError {
    fn from(err: InternshipRepositoryError) -> Self {
        match err {
            InternshipRepositoryError::NotFound(id) => Self::not_found(Entity::Internship, id),
            InternshipRepositoryError::DuplicateInternship(id) => {
                Self::PreconditionFailed(format!("internship {id} already exists"))
            }
            InternshipRepositoryError::InvalidPersistedData(source)
            | InternshipRepositoryError::Persistence(source) => Self::StoreUnavailable(source),
        }
    }
}

impl From<ApplicationRepositoryError> for MarketplaceError {
    fn from(err: ApplicationRepositoryError) -> Self {
        match err {
            ApplicationRepositoryError::NotFound(id) => Self::not_found(Entity::Application, id),
            ApplicationRepositoryError::DuplicateApplication {
                internship_id,
                student_id,
            } => Self::DuplicateApplication {
                internship_id,
                student_id,
            },
            ApplicationRepositoryError::DuplicateId(id) => {
                Self::PreconditionFailed(format!("application {id} already exists"))
            }
            ApplicationRepositoryError::StatusConflict {
                actual, requested, ..
            } => Self::InvalidTransition {
                entity: Entity::Application,
                from: actual.as_str().to_owned(),
                to: requested.as_str().to_owned(),
            },
            ApplicationRepositoryError::InvalidPersistedData(source)
            | ApplicationRepositoryError::Persistence(source) => Self::StoreUnavailable(source),
        }
    }
}

impl From<TaskRepositoryError> for MarketplaceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::not_found(Entity::Task, id),
            TaskRepositoryError::DuplicateTask(id) => {
                Self::PreconditionFailed(format!("task {id} already exists"))
            }
            TaskRepositoryError::StatusConflict {
                actual, requested, ..
            } => Self::InvalidTransition {
                entity: Entity::Task,
                from: actual.as_str().to_owned(),
                to: requested.as_str().to_owned(),
            },
            TaskRepositoryError::InvalidPersistedData(source)
            | TaskRepositoryError::Persistence(source) => Self::StoreUnavailable(source),
        }
    }
}
