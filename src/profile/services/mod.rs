//! Application services for profile management.

mod profile;

pub use profile::ProfileService;
