//! Marketplace wiring.

use super::{Session, SessionManager};
use crate::config::DatabaseConfig;
use crate::db::{DatabaseError, build_pool};
use crate::identity::ports::IdentityGateway;
use crate::internship::services::PostingService;
use crate::lifecycle::LifecycleEngine;
use crate::profile::domain::Role;
use crate::profile::services::ProfileService;
use crate::store::Store;
use crate::views::{CompanyMenu, CompanyView, NoticeCatalog, StudentMenu, StudentView};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Shared services over one data store.
pub struct Marketplace<C>
where
    C: Clock + Send + Sync,
{
    store: Store,
    profiles: ProfileService<C>,
    postings: PostingService<C>,
    lifecycle: LifecycleEngine<C>,
    notices: NoticeCatalog,
    clock: Arc<C>,
}

impl<C> Marketplace<C>
where
    C: Clock + Send + Sync,
{
    /// Wires every service to `store`.
    #[must_use]
    pub fn new(store: Store, clock: Arc<C>) -> Self {
        Self {
            profiles: ProfileService::new(store.clone(), Arc::clone(&clock)),
            postings: PostingService::new(store.clone(), Arc::clone(&clock)),
            lifecycle: LifecycleEngine::new(store.clone(), Arc::clone(&clock)),
            notices: NoticeCatalog::new(),
            store,
            clock,
        }
    }

    /// Builds a marketplace over fresh in-memory repositories.
    #[must_use]
    pub fn in_memory(clock: Arc<C>) -> Self {
        Self::new(Store::in_memory(), clock)
    }

    /// Builds a marketplace over one `PostgreSQL` pool shared by every
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Pool`] when the pool cannot connect.
    pub fn connect(config: &DatabaseConfig, clock: Arc<C>) -> Result<Self, DatabaseError> {
        let pool = build_pool(config)?;
        info!(
            max_connections = config.max_connections,
            "connected marketplace store"
        );
        Ok(Self::new(Store::postgres(&pool), clock))
    }

    /// Returns the shared store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the profile service.
    #[must_use]
    pub const fn profiles(&self) -> &ProfileService<C> {
        &self.profiles
    }

    /// Returns the internship posting service.
    #[must_use]
    pub const fn postings(&self) -> &PostingService<C> {
        &self.postings
    }

    /// Returns the lifecycle engine.
    #[must_use]
    pub const fn lifecycle(&self) -> &LifecycleEngine<C> {
        &self.lifecycle
    }

    /// Returns the notice template catalogue.
    #[must_use]
    pub const fn notices(&self) -> &NoticeCatalog {
        &self.notices
    }

    /// Builds a session manager that records profiles in this store.
    #[must_use]
    pub fn sessions(&self, gateway: Arc<dyn IdentityGateway>) -> SessionManager<C> {
        SessionManager::new(
            gateway,
            ProfileService::new(self.store.clone(), Arc::clone(&self.clock)),
        )
    }

    /// Opens the view matching the session's resolved role.
    #[must_use]
    pub const fn open_view(&self, session: &Session) -> RoleView<'_, C> {
        match session.role() {
            Role::Student => RoleView::Student(StudentView::new(self, session.actor())),
            Role::Company => RoleView::Company(CompanyView::new(self, session.actor())),
        }
    }
}

/// View opened for a signed-in session.
pub enum RoleView<'a, C>
where
    C: Clock + Send + Sync,
{
    /// Student actions and reads.
    Student(StudentView<'a, C>),
    /// Company actions and reads.
    Company(CompanyView<'a, C>),
}

impl<'a, C> RoleView<'a, C>
where
    C: Clock + Send + Sync,
{
    /// Returns the student view, if the session is a student's.
    #[must_use]
    pub const fn as_student(&self) -> Option<&StudentView<'a, C>> {
        match self {
            Self::Student(view) => Some(view),
            Self::Company(_) => None,
        }
    }

    /// Returns the company view, if the session is a company's.
    #[must_use]
    pub const fn as_company(&self) -> Option<&CompanyView<'a, C>> {
        match self {
            Self::Company(view) => Some(view),
            Self::Student(_) => None,
        }
    }

    /// Returns the navigation labels for the view.
    #[must_use]
    pub fn menu_labels(&self) -> Vec<&'static str> {
        match self {
            Self::Student(view) => view.menu().into_iter().map(StudentMenu::label).collect(),
            Self::Company(view) => view.menu().into_iter().map(CompanyMenu::label).collect(),
        }
    }
}
