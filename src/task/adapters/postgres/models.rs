//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Row shape shared by reads and inserts of task records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Internship the task belongs to.
    pub internship_id: uuid::Uuid,
    /// Assigned student.
    pub student_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
    /// Task status.
    pub status: String,
    /// Submitted deliverable link.
    pub submission_link: Option<String>,
    /// Reviewer feedback.
    pub feedback: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Columns written by a task status change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskProgressChangeset {
    /// New status.
    pub status: String,
    /// Submitted deliverable link.
    pub submission_link: Option<String>,
    /// Reviewer feedback.
    pub feedback: Option<String>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}
