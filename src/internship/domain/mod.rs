//! Domain model for internship postings.

mod error;
mod filter;
mod ids;
mod internship;
mod status;

pub use error::{InternshipDomainError, ParseInternshipStatusError};
pub use filter::InternshipFilter;
pub use ids::InternshipId;
pub use internship::{Internship, InternshipDraft, PersistedInternshipData};
pub use status::InternshipStatus;
