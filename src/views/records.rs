//! Typed join records read by the role views.

use crate::application::domain::Application;
use crate::internship::domain::Internship;
use crate::profile::domain::{Profile, ProfileId};
use crate::task::domain::Task;
use chrono::NaiveDate;

/// Open internship as listed to a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternshipListing {
    /// The posting.
    pub internship: Internship,
    /// Name of the owning company.
    pub company_name: String,
    /// Whether the viewing student already applied.
    pub already_applied: bool,
}

/// Student-side application row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationWithInternship {
    /// The application.
    pub application: Application,
    /// The internship applied to.
    pub internship: Internship,
    /// Name of the owning company.
    pub company_name: String,
}

/// Contact details of an applicant shown to the reviewing company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantCard {
    /// Applicant profile.
    pub id: ProfileId,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Resume link.
    pub resume_url: Option<String>,
    /// Portfolio link.
    pub portfolio_url: Option<String>,
    /// Declared skills.
    pub skills: Vec<String>,
}

impl From<&Profile> for ApplicantCard {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id(),
            full_name: profile.full_name().to_owned(),
            email: profile.email().to_owned(),
            phone: profile.phone().map(str::to_owned),
            location: profile.location().map(str::to_owned),
            resume_url: profile.resume_url().map(str::to_owned),
            portfolio_url: profile.portfolio_url().map(str::to_owned),
            skills: profile.skills().to_vec(),
        }
    }
}

/// Company-side application row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationWithApplicant {
    /// The application.
    pub application: Application,
    /// Title of the internship applied to.
    pub internship_title: String,
    /// The applicant's contact card.
    pub applicant: ApplicantCard,
}

/// Task row with the title of its internship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskWithInternship {
    /// The task.
    pub task: Task,
    /// Title of the internship.
    pub internship_title: String,
}

/// Student dashboard contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDashboard {
    /// Own applications, newest first.
    pub applications: Vec<ApplicationWithInternship>,
    /// Own tasks by due date.
    pub tasks: Vec<TaskWithInternship>,
}

/// Company dashboard counts, restricted to owned internships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanyDashboard {
    /// Owned internships that are open.
    pub open_internships: usize,
    /// Pending applications on owned internships.
    pub pending_applications: usize,
    /// Pending tasks on owned internships.
    pub pending_tasks: usize,
}

/// Task assignment form submitted by a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
}

impl TaskForm {
    /// Creates a form with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
