//! Diesel row models for internship persistence.

use super::schema::internships;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for internship records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = internships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InternshipRow {
    /// Internship identifier.
    pub id: uuid::Uuid,
    /// Owning company profile.
    pub company_id: uuid::Uuid,
    /// Posting title.
    pub title: String,
    /// Role label.
    pub role: String,
    /// Posting description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Duration label.
    pub duration: String,
    /// Stipend label.
    pub stipend: String,
    /// Required skills.
    pub skills_required: Vec<String>,
    /// Posting status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for internship records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = internships)]
pub struct NewInternshipRow {
    /// Internship identifier.
    pub id: uuid::Uuid,
    /// Owning company profile.
    pub company_id: uuid::Uuid,
    /// Posting title.
    pub title: String,
    /// Role label.
    pub role: String,
    /// Posting description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Duration label.
    pub duration: String,
    /// Stipend label.
    pub stipend: String,
    /// Required skills.
    pub skills_required: Vec<String>,
    /// Posting status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
