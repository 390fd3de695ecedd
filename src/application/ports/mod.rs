//! Port contracts for application persistence.

pub mod repository;

pub use repository::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult,
};
