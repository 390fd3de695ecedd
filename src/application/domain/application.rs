//! Application aggregate root.

use super::{ApplicationDomainError, ApplicationId, ApplicationStatus};
use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A student's request to be considered for an internship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    internship_id: InternshipId,
    student_id: ProfileId,
    status: ApplicationStatus,
    applied_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedApplicationData {
    /// Persisted application identifier.
    pub id: ApplicationId,
    /// Internship applied to.
    pub internship_id: InternshipId,
    /// Applying student.
    pub student_id: ProfileId,
    /// Persisted status.
    pub status: ApplicationStatus,
    /// Submission timestamp.
    pub applied_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Creates a pending application.
    #[must_use]
    pub fn submit(internship_id: InternshipId, student_id: ProfileId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ApplicationId::new(),
            internship_id,
            student_id,
            status: ApplicationStatus::Pending,
            applied_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an application from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedApplicationData) -> Self {
        Self {
            id: data.id,
            internship_id: data.internship_id,
            student_id: data.student_id,
            status: data.status,
            applied_at: data.applied_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the internship applied to.
    #[must_use]
    pub const fn internship_id(&self) -> InternshipId {
        self.internship_id
    }

    /// Returns the applying student.
    #[must_use]
    pub const fn student_id(&self) -> ProfileId {
        self.student_id
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the application to `target`, returning the status it left.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::InvalidStatusTransition`] when
    /// `target` is unreachable from the current status.
    pub fn transition_to(
        &mut self,
        target: ApplicationStatus,
        clock: &impl Clock,
    ) -> Result<ApplicationStatus, ApplicationDomainError> {
        let previous = self.status;
        if !previous.can_transition_to(target) {
            return Err(ApplicationDomainError::InvalidStatusTransition {
                from: previous.as_str().to_owned(),
                to: target.as_str().to_owned(),
            });
        }
        self.status = target;
        self.updated_at = clock.utc();
        Ok(previous)
    }
}
