//! Role-scoped navigation menus.

use std::fmt;

/// Student navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentMenu {
    /// Own applications and tasks.
    Dashboard,
    /// Open internships.
    BrowseInternships,
    /// Profile self-edit.
    Profile,
}

impl StudentMenu {
    /// Every entry, in display order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::BrowseInternships, Self::Profile];

    /// Returns the entry label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::BrowseInternships => "Browse Internships",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for StudentMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Company navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyMenu {
    /// Aggregate counts.
    Dashboard,
    /// Internship posting form.
    PostInternship,
    /// Incoming applications.
    ManageApplications,
    /// Accepted interns and their tasks.
    AssignTasks,
}

impl CompanyMenu {
    /// Every entry, in display order.
    pub const ALL: [Self; 4] = [
        Self::Dashboard,
        Self::PostInternship,
        Self::ManageApplications,
        Self::AssignTasks,
    ];

    /// Returns the entry label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::PostInternship => "Post Internship",
            Self::ManageApplications => "Manage Applications",
            Self::AssignTasks => "Assign Tasks",
        }
    }
}

impl fmt::Display for CompanyMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
