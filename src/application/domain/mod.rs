//! Domain model for applications.

mod application;
mod error;
mod ids;
mod status;

pub use application::{Application, PersistedApplicationData};
pub use error::{ApplicationDomainError, ParseApplicationStatusError};
pub use ids::ApplicationId;
pub use status::ApplicationStatus;
