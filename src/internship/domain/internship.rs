//! Internship aggregate root.

use super::{InternshipDomainError, InternshipId, InternshipStatus};
use crate::profile::domain::{ProfileId, parse_skills};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Posting form submitted by a company.
///
/// Company name, title, role, and description are required; the remaining
/// fields default to empty. Skills are given as a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternshipDraft {
    company_name: String,
    title: String,
    role: String,
    description: String,
    location: String,
    duration: String,
    stipend: String,
    skills_required: String,
}

impl InternshipDraft {
    /// Creates a draft with the required fields.
    #[must_use]
    pub fn new(
        company_name: impl Into<String>,
        title: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            title: title.into(),
            role: role.into(),
            description: description.into(),
            location: String::new(),
            duration: String::new(),
            stipend: String::new(),
            skills_required: String::new(),
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the duration label, for example `"3 months"`.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the stipend label.
    #[must_use]
    pub fn with_stipend(mut self, stipend: impl Into<String>) -> Self {
        self.stipend = stipend.into();
        self
    }

    /// Sets the comma-separated required skills.
    #[must_use]
    pub fn with_skills_required(mut self, skills: impl Into<String>) -> Self {
        self.skills_required = skills.into();
        self
    }

    /// Returns the trimmed company name shown on the posting.
    #[must_use]
    pub fn company_name(&self) -> &str {
        self.company_name.trim()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("company name", &self.company_name),
            ("title", &self.title),
            ("role", &self.role),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Posting created by a company describing an available position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    id: InternshipId,
    company_id: ProfileId,
    title: String,
    role: String,
    description: String,
    location: String,
    duration: String,
    stipend: String,
    skills_required: Vec<String>,
    status: InternshipStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted internship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInternshipData {
    /// Persisted internship identifier.
    pub id: InternshipId,
    /// Owning company profile.
    pub company_id: ProfileId,
    /// Persisted title.
    pub title: String,
    /// Persisted role label.
    pub role: String,
    /// Persisted description.
    pub description: String,
    /// Persisted location.
    pub location: String,
    /// Persisted duration label.
    pub duration: String,
    /// Persisted stipend label.
    pub stipend: String,
    /// Persisted required skills.
    pub skills_required: Vec<String>,
    /// Persisted status.
    pub status: InternshipStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Internship {
    /// Creates an open internship owned by `company_id` from a posting form.
    ///
    /// # Errors
    ///
    /// Returns [`InternshipDomainError::MissingRequiredFields`] naming every
    /// blank required field.
    pub fn post(
        company_id: ProfileId,
        draft: &InternshipDraft,
        clock: &impl Clock,
    ) -> Result<Self, InternshipDomainError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(InternshipDomainError::MissingRequiredFields(missing));
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: InternshipId::new(),
            company_id,
            title: draft.title.trim().to_owned(),
            role: draft.role.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            location: draft.location.trim().to_owned(),
            duration: draft.duration.trim().to_owned(),
            stipend: draft.stipend.trim().to_owned(),
            skills_required: parse_skills(&draft.skills_required),
            status: InternshipStatus::Open,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs an internship from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInternshipData) -> Self {
        Self {
            id: data.id,
            company_id: data.company_id,
            title: data.title,
            role: data.role,
            description: data.description,
            location: data.location,
            duration: data.duration,
            stipend: data.stipend,
            skills_required: data.skills_required,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the internship identifier.
    #[must_use]
    pub const fn id(&self) -> InternshipId {
        self.id
    }

    /// Returns the owning company profile.
    #[must_use]
    pub const fn company_id(&self) -> ProfileId {
        self.company_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the role label.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location; empty when not given.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the duration label.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Returns the stipend label.
    #[must_use]
    pub fn stipend(&self) -> &str {
        &self.stipend
    }

    /// Returns the required skills.
    #[must_use]
    pub fn skills_required(&self) -> &[String] {
        &self.skills_required
    }

    /// Returns the posting status.
    #[must_use]
    pub const fn status(&self) -> InternshipStatus {
        self.status
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

    /// Closes the posting to new applications.
    ///
    /// # Errors
    ///
    /// Returns [`InternshipDomainError::InvalidStatusTransition`] when the
    /// posting is already closed.
    pub fn close(&mut self, clock: &impl Clock) -> Result<(), InternshipDomainError> {
        let target = InternshipStatus::Closed;
        if !self.status.can_transition_to(target) {
            return Err(InternshipDomainError::InvalidStatusTransition {
                from: self.status.as_str().to_owned(),
                to: target.as_str().to_owned(),
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
