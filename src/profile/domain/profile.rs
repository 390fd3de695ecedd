//! Profile aggregate root.

use super::{ProfileDomainError, ProfileId, Role, parse_skills};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Identity-linked user record carrying role and role-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    role: Role,
    full_name: String,
    email: String,
    phone: Option<String>,
    location: Option<String>,
    resume_url: Option<String>,
    portfolio_url: Option<String>,
    skills: Vec<String>,
    company_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProfileData {
    /// Persisted profile identifier.
    pub id: ProfileId,
    /// Persisted role.
    pub role: Role,
    /// Persisted display name.
    pub full_name: String,
    /// Persisted contact email.
    pub email: String,
    /// Persisted phone number.
    pub phone: Option<String>,
    /// Persisted location.
    pub location: Option<String>,
    /// Persisted resume link.
    pub resume_url: Option<String>,
    /// Persisted portfolio link.
    pub portfolio_url: Option<String>,
    /// Persisted skills.
    pub skills: Vec<String>,
    /// Persisted company name.
    pub company_name: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Self-edit form submitted by a profile owner.
///
/// Blank optional fields clear the stored value; skills are given in the
/// comma-separated form shown by the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    full_name: String,
    email: String,
    phone: String,
    location: String,
    resume_url: String,
    portfolio_url: String,
    skills: String,
}

impl ProfileChanges {
    /// Creates a change set with the required name and email.
    #[must_use]
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: String::new(),
            location: String::new(),
            resume_url: String::new(),
            portfolio_url: String::new(),
            skills: String::new(),
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the address or location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the resume link.
    #[must_use]
    pub fn with_resume_url(mut self, resume_url: impl Into<String>) -> Self {
        self.resume_url = resume_url.into();
        self
    }

    /// Sets the portfolio link.
    #[must_use]
    pub fn with_portfolio_url(mut self, portfolio_url: impl Into<String>) -> Self {
        self.portfolio_url = portfolio_url.into();
        self
    }

    /// Sets the comma-separated skills list.
    #[must_use]
    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }
}

impl Profile {
    /// Creates the profile recorded when an identity signs up.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::InvalidEmail`] when the email is
    /// malformed.
    pub fn new(
        id: ProfileId,
        role: Role,
        full_name: impl Into<String>,
        email: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ProfileDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id,
            role,
            full_name: full_name.into().trim().to_owned(),
            email: validated_email(email.into())?,
            phone: None,
            location: None,
            resume_url: None,
            portfolio_url: None,
            skills: Vec::new(),
            company_name: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProfileData) -> Self {
        Self {
            id: data.id,
            role: data.role,
            full_name: data.full_name,
            email: data.email,
            phone: data.phone,
            location: data.location,
            resume_url: data.resume_url,
            portfolio_url: data.portfolio_url,
            skills: data.skills,
            company_name: data.company_name,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the role chosen at sign-up.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the location, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the resume link, if any.
    #[must_use]
    pub fn resume_url(&self) -> Option<&str> {
        self.resume_url.as_deref()
    }

    /// Returns the portfolio link, if any.
    #[must_use]
    pub fn portfolio_url(&self) -> Option<&str> {
        self.portfolio_url.as_deref()
    }

    /// Returns the declared skills.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the company name, if any.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
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

    /// Applies an owner's self-edit. The role is never changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::InvalidEmail`] when the new email is
    /// malformed; the profile is left untouched in that case.
    pub fn apply_changes(
        &mut self,
        changes: ProfileChanges,
        clock: &impl Clock,
    ) -> Result<(), ProfileDomainError> {
        let email = validated_email(changes.email)?;
        self.full_name = changes.full_name.trim().to_owned();
        self.email = email;
        self.phone = non_blank(changes.phone);
        self.location = non_blank(changes.location);
        self.resume_url = non_blank(changes.resume_url);
        self.portfolio_url = non_blank(changes.portfolio_url);
        self.skills = parse_skills(&changes.skills);
        self.touch(clock);
        Ok(())
    }

    /// Sets the company name shown on postings.
    ///
    /// Returns `true` when the stored name changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDomainError::EmptyCompanyName`] when the name is blank.
    pub fn rename_company(
        &mut self,
        company_name: &str,
        clock: &impl Clock,
    ) -> Result<bool, ProfileDomainError> {
        let trimmed = company_name.trim();
        if trimmed.is_empty() {
            return Err(ProfileDomainError::EmptyCompanyName);
        }
        if self.company_name.as_deref() == Some(trimmed) {
            return Ok(false);
        }
        self.company_name = Some(trimmed.to_owned());
        self.touch(clock);
        Ok(true)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn validated_email(raw: String) -> Result<String, ProfileDomainError> {
    let trimmed = raw.trim();
    let is_valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        })
        && !trimmed.chars().any(char::is_whitespace);
    if !is_valid {
        return Err(ProfileDomainError::InvalidEmail(raw));
    }
    Ok(trimmed.to_owned())
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
