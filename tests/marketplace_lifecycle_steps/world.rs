//! Shared world state for marketplace lifecycle BDD scenarios.

use std::sync::Arc;

use internhub::bootstrap::{Marketplace, RoleView, Session, SessionManager};
use internhub::identity::adapters::memory::InMemoryIdentityGateway;
use internhub::internship::domain::InternshipId;
use internhub::task::domain::TaskId;
use internhub::views::{CompanyView, Notice, StudentView};
use mockable::DefaultClock;
use rstest::fixture;

/// Password used for every scenario account.
pub const PASSWORD: &str = "correct-horse";

/// Scenario world for marketplace lifecycle behaviour tests.
pub struct MarketplaceWorld {
    pub marketplace: Marketplace<DefaultClock>,
    pub sessions: SessionManager<DefaultClock>,
    pub company: Option<Session>,
    pub student: Option<Session>,
    pub internship_id: Option<InternshipId>,
    pub task_id: Option<TaskId>,
    pub last_notice: Option<Notice>,
}

impl MarketplaceWorld {
    /// Creates a world over an empty in-memory marketplace.
    #[must_use]
    pub fn new() -> Self {
        let marketplace = Marketplace::in_memory(Arc::new(DefaultClock));
        let sessions = marketplace.sessions(Arc::new(InMemoryIdentityGateway::new()));
        Self {
            marketplace,
            sessions,
            company: None,
            student: None,
            internship_id: None,
            task_id: None,
            last_notice: None,
        }
    }

    /// Opens the signed-in student's view.
    pub fn student_view(&self) -> Result<StudentView<'_, DefaultClock>, eyre::Report> {
        let session = self
            .student
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing student session in scenario world"))?;
        match self.marketplace.open_view(session) {
            RoleView::Student(view) => Ok(view),
            RoleView::Company(_) => Err(eyre::eyre!("student session opened a company view")),
        }
    }

    /// Opens the signed-in company's view.
    pub fn company_view(&self) -> Result<CompanyView<'_, DefaultClock>, eyre::Report> {
        let session = self
            .company
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing company session in scenario world"))?;
        match self.marketplace.open_view(session) {
            RoleView::Company(view) => Ok(view),
            RoleView::Student(_) => Err(eyre::eyre!("company session opened a student view")),
        }
    }

    /// Returns the posted internship.
    pub fn internship_id(&self) -> Result<InternshipId, eyre::Report> {
        self.internship_id
            .ok_or_else(|| eyre::eyre!("missing internship in scenario world"))
    }
}

impl Default for MarketplaceWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MarketplaceWorld {
    MarketplaceWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
