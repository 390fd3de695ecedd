//! `PostgreSQL` adapter for internship persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresInternshipRepository;
