//! Explicitly constructed data store client.
//!
//! A [`Store`] bundles one repository per entity. It is built once per
//! process and cloned into every service; clones share the same backing
//! state or connection pool.

use crate::application::{
    adapters::{memory::InMemoryApplicationRepository, postgres::PostgresApplicationRepository},
    ports::ApplicationRepository,
};
use crate::db::PgPool;
use crate::internship::{
    adapters::{memory::InMemoryInternshipRepository, postgres::PostgresInternshipRepository},
    ports::InternshipRepository,
};
use crate::profile::{
    adapters::{memory::InMemoryProfileRepository, postgres::PostgresProfileRepository},
    ports::ProfileRepository,
};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};
use std::fmt;
use std::sync::Arc;

/// Shared handle to the four entity repositories.
#[derive(Clone)]
pub struct Store {
    profiles: Arc<dyn ProfileRepository>,
    internships: Arc<dyn InternshipRepository>,
    applications: Arc<dyn ApplicationRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl Store {
    /// Bundles explicitly supplied repositories.
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        internships: Arc<dyn InternshipRepository>,
        applications: Arc<dyn ApplicationRepository>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            profiles,
            internships,
            applications,
            tasks,
        }
    }

    /// Builds an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(InMemoryInternshipRepository::new()),
            Arc::new(InMemoryApplicationRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
        )
    }

    /// Builds a store whose repositories share one `PostgreSQL` pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self::new(
            Arc::new(PostgresProfileRepository::new(pool.clone())),
            Arc::new(PostgresInternshipRepository::new(pool.clone())),
            Arc::new(PostgresApplicationRepository::new(pool.clone())),
            Arc::new(PostgresTaskRepository::new(pool.clone())),
        )
    }

    /// Returns the profile repository.
    #[must_use]
    pub fn profiles(&self) -> &dyn ProfileRepository {
        self.profiles.as_ref()
    }

    /// Returns the internship repository.
    #[must_use]
    pub fn internships(&self) -> &dyn InternshipRepository {
        self.internships.as_ref()
    }

    /// Returns the application repository.
    #[must_use]
    pub fn applications(&self) -> &dyn ApplicationRepository {
        self.applications.as_ref()
    }

    /// Returns the task repository.
    #[must_use]
    pub fn tasks(&self) -> &dyn TaskRepository {
        self.tasks.as_ref()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
