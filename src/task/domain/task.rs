//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus};
use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Assignment details for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    internship_id: InternshipId,
    student_id: ProfileId,
    title: String,
    description: String,
    due_date: NaiveDate,
}

impl NewTask {
    /// Creates assignment details for the intern `student_id` on
    /// `internship_id`.
    #[must_use]
    pub fn new(
        internship_id: InternshipId,
        student_id: ProfileId,
        title: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            internship_id,
            student_id,
            title: title.into(),
            description: String::new(),
            due_date,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the internship the task belongs to.
    #[must_use]
    pub const fn internship_id(&self) -> InternshipId {
        self.internship_id
    }

    /// Returns the assigned student.
    #[must_use]
    pub const fn student_id(&self) -> ProfileId {
        self.student_id
    }
}

/// Work assigned by a company to an accepted intern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    internship_id: InternshipId,
    student_id: ProfileId,
    title: String,
    description: String,
    due_date: NaiveDate,
    status: TaskStatus,
    submission_link: Option<String>,
    feedback: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Internship the task belongs to.
    pub internship_id: InternshipId,
    /// Assigned student.
    pub student_id: ProfileId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted submission link.
    pub submission_link: Option<String>,
    /// Persisted review feedback.
    pub feedback: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn assign(new_task: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            internship_id: new_task.internship_id,
            student_id: new_task.student_id,
            title: title.to_owned(),
            description: new_task.description.trim().to_owned(),
            due_date: new_task.due_date,
            status: TaskStatus::Pending,
            submission_link: None,
            feedback: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            internship_id: data.internship_id,
            student_id: data.student_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            submission_link: data.submission_link,
            feedback: data.feedback,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the internship the task belongs to.
    #[must_use]
    pub const fn internship_id(&self) -> InternshipId {
        self.internship_id
    }

    /// Returns the assigned student.
    #[must_use]
    pub const fn student_id(&self) -> ProfileId {
        self.student_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the submitted deliverable link, if any.
    #[must_use]
    pub fn submission_link(&self) -> Option<&str> {
        self.submission_link.as_deref()
    }

    /// Returns the review feedback, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records a deliverable and moves the task to `submitted`, returning the
    /// status it left.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubmissionLink`] for a blank link and
    /// [`TaskDomainError::InvalidStatusTransition`] unless the task is
    /// pending.
    pub fn submit(
        &mut self,
        submission_link: &str,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let link = submission_link.trim();
        if link.is_empty() {
            return Err(TaskDomainError::EmptySubmissionLink);
        }
        let previous = self.advance_to(TaskStatus::Submitted)?;
        self.submission_link = Some(link.to_owned());
        self.touch(clock);
        Ok(previous)
    }

    /// Marks a submitted task completed with optional reviewer feedback,
    /// returning the status it left. Blank feedback is stored as none.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] unless the task
    /// is submitted.
    pub fn complete(
        &mut self,
        feedback: Option<&str>,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let previous = self.advance_to(TaskStatus::Completed)?;
        self.feedback = feedback
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        self.touch(clock);
        Ok(previous)
    }

    fn advance_to(&mut self, target: TaskStatus) -> Result<TaskStatus, TaskDomainError> {
        let previous = self.status;
        if !previous.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                from: previous.as_str().to_owned(),
                to: target.as_str().to_owned(),
            });
        }
        self.status = target;
        Ok(previous)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
