//! User-visible notices returned by every view action.
//!
//! Messages are rendered from `minijinja` templates. A template that fails
//! to render falls back to the plain error text, so a notice is always
//! produced.

use crate::error::{ErrorKind, MarketplaceError};
use minijinja::{Environment, Value, context};
use std::fmt;

/// Outcome severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// The action failed; state is unchanged.
    Error,
}

/// Message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    level: NoticeLevel,
    kind: Option<ErrorKind>,
    message: String,
}

impl Notice {
    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        self.level
    }

    /// Returns whether the action succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.level, NoticeLevel::Success)
    }

    /// Returns the error category for failed actions.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Successful view action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A student applied to an internship.
    ApplicationSubmitted,
    /// A company accepted an application.
    ApplicationAccepted,
    /// A company rejected an application.
    ApplicationRejected,
    /// A company posted an internship.
    InternshipPosted,
    /// A company closed an internship.
    InternshipClosed,
    /// A company assigned a task.
    TaskAssigned,
    /// A student submitted a task.
    TaskSubmitted,
    /// A company completed a task review.
    TaskCompleted,
    /// A profile owner saved their profile.
    ProfileUpdated,
}

impl Event {
    const fn template(self) -> &'static str {
        match self {
            Self::ApplicationSubmitted => "Application submitted for {{ title }}.",
            Self::ApplicationAccepted => "Application from {{ applicant }} accepted.",
            Self::ApplicationRejected => "Application from {{ applicant }} rejected.",
            Self::InternshipPosted => "Internship \"{{ title }}\" posted.",
            Self::InternshipClosed => "Internship \"{{ title }}\" closed.",
            Self::TaskAssigned => "Task \"{{ title }}\" assigned, due {{ due_date }}.",
            Self::TaskSubmitted => "Task \"{{ title }}\" submitted.",
            Self::TaskCompleted => "Task \"{{ title }}\" marked completed.",
            Self::ProfileUpdated => "Profile updated.",
        }
    }
}

const fn error_template(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Unauthorized => "You are not allowed to {{ action }}.",
        ErrorKind::InvalidTransition => {
            "This {{ entity }} is {{ from }} and cannot become {{ to }}."
        }
        ErrorKind::DuplicateApplication => "You have already applied to this internship.",
        ErrorKind::PreconditionFailed => "Action not possible: {{ reason }}.",
        ErrorKind::NotFound => "The requested {{ entity }} was not found.",
        ErrorKind::StoreUnavailable => {
            "The service is temporarily unavailable. Please try again later."
        }
        ErrorKind::Validation => "Please check your input: {{ reason }}.",
    }
}

/// Template catalogue rendering success and error notices.
#[derive(Debug, Default)]
pub struct NoticeCatalog {
    environment: Environment<'static>,
}

impl NoticeCatalog {
    /// Creates a catalogue with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the success notice for `event` with template variables from
    /// `ctx`.
    #[must_use]
    pub fn success(&self, event: Event, ctx: Value) -> Notice {
        let message = self
            .environment
            .render_str(event.template(), ctx)
            .unwrap_or_else(|_| String::from("Done."));
        Notice {
            level: NoticeLevel::Success,
            kind: None,
            message,
        }
    }

    /// Renders the error notice for `err`.
    #[must_use]
    pub fn error(&self, err: &MarketplaceError) -> Notice {
        let ctx = match err {
            MarketplaceError::Unauthorized { action, .. } => context! { action => action.as_str() },
            MarketplaceError::InvalidTransition { entity, from, to } => {
                context! { entity => entity.as_str(), from => from, to => to }
            }
            MarketplaceError::NotFound { entity, .. } => context! { entity => entity.as_str() },
            MarketplaceError::PreconditionFailed(reason) | MarketplaceError::Validation(reason) => {
                context! { reason => reason }
            }
            MarketplaceError::DuplicateApplication { .. }
            | MarketplaceError::StoreUnavailable(_) => {
                context! {}
            }
        };
        let message = self
            .environment
            .render_str(error_template(err.kind()), ctx)
            .unwrap_or_else(|_| err.to_string());
        Notice {
            level: NoticeLevel::Error,
            kind: Some(err.kind()),
            message,
        }
    }
}
