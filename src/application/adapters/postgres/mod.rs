//! `PostgreSQL` adapter for application persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresApplicationRepository;
