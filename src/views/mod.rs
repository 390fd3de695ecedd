//! Role-scoped view models.
//!
//! A view wraps the marketplace for one signed-in actor. Actions return a
//! [`Notice`]; reads return typed join records or an error notice.

mod company;
mod joins;
mod menu;
mod notice;
mod records;
mod student;

pub use company::CompanyView;
pub use menu::{CompanyMenu, StudentMenu};
pub use notice::{Event, Notice, NoticeCatalog, NoticeLevel};
pub use records::{
    ApplicantCard, ApplicationWithApplicant, ApplicationWithInternship, CompanyDashboard,
    InternshipListing, StudentDashboard, TaskForm, TaskWithInternship,
};
pub use student::StudentView;
