//! Diesel row models for profile persistence.

use super::schema::profiles;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Role name.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional location.
    pub location: Option<String>,
    /// Optional resume link.
    pub resume_url: Option<String>,
    /// Optional portfolio link.
    pub portfolio_url: Option<String>,
    /// Declared skills.
    pub skills: Vec<String>,
    /// Optional company name.
    pub company_name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Role name.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional location.
    pub location: Option<String>,
    /// Optional resume link.
    pub resume_url: Option<String>,
    /// Optional portfolio link.
    pub portfolio_url: Option<String>,
    /// Declared skills.
    pub skills: Vec<String>,
    /// Optional company name.
    pub company_name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Owner-editable columns; `role` is deliberately absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = profiles)]
#[diesel(treat_none_as_null = true)]
pub struct ProfileChangesetRow {
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional location.
    pub location: Option<String>,
    /// Optional resume link.
    pub resume_url: Option<String>,
    /// Optional portfolio link.
    pub portfolio_url: Option<String>,
    /// Declared skills.
    pub skills: Vec<String>,
    /// Optional company name.
    pub company_name: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
