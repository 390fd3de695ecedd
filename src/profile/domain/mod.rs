//! Domain model for user profiles.

mod error;
mod ids;
mod profile;
mod role;
mod skills;

pub use error::{ParseRoleError, ProfileDomainError};
pub use ids::ProfileId;
pub use profile::{PersistedProfileData, Profile, ProfileChanges};
pub use role::Role;
pub use skills::{join_skills, parse_skills};
