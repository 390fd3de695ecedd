//! Port contracts for internship persistence.

pub mod repository;

pub use repository::{InternshipRepository, InternshipRepositoryError, InternshipRepositoryResult};
