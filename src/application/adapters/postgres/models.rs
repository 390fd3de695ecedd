//! Diesel row models for application persistence.

use super::schema::applications;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row shape shared by reads and inserts of application records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    /// Application identifier.
    pub id: uuid::Uuid,
    /// Internship applied to.
    pub internship_id: uuid::Uuid,
    /// Applying student.
    pub student_id: uuid::Uuid,
    /// Review status.
    pub status: String,
    /// Submission timestamp.
    pub applied_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
