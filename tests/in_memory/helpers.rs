//! Shared fixtures for in-memory marketplace tests.

use internhub::bootstrap::{Marketplace, Session, SessionManager};
use internhub::identity::adapters::memory::InMemoryIdentityGateway;
use internhub::identity::domain::SignUpRequest;
use internhub::identity::ports::IdentityGateway;
use internhub::internship::domain::{Internship, InternshipDraft};
use internhub::profile::domain::Role;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Password shared by every seeded account.
pub const PASSWORD: &str = "correct-horse";

/// Marketplace plus the session manager signing users into it.
pub struct Scene {
    pub marketplace: Marketplace<DefaultClock>,
    pub sessions: SessionManager<DefaultClock>,
    pub gateway: Arc<InMemoryIdentityGateway>,
}

impl Scene {
    /// Signs up an account and returns its open session.
    pub async fn sign_up(&self, email: &str, full_name: &str, role: Role) -> Session {
        self.sessions
            .sign_up(&SignUpRequest::new(email, PASSWORD, full_name, role))
            .await
            .expect("sign-up should succeed")
    }

    /// Signs up a company account.
    pub async fn company(&self, email: &str) -> Session {
        self.sign_up(email, "Hiring Manager", Role::Company).await
    }

    /// Signs up a student account.
    pub async fn student(&self, email: &str, full_name: &str) -> Session {
        self.sign_up(email, full_name, Role::Student).await
    }

    /// Posts an open internship owned by `company`.
    pub async fn post(
        &self,
        company: &Session,
        company_name: &str,
        title: &str,
        location: &str,
    ) -> Internship {
        let draft = InternshipDraft::new(company_name, title, "Engineering", "Ship features")
            .with_location(location)
            .with_skills_required("rust, sql");
        self.marketplace
            .postings()
            .post(&company.actor(), &draft)
            .await
            .expect("posting should succeed")
    }
}

/// Provides a fresh in-memory marketplace.
#[fixture]
pub fn scene() -> Scene {
    let marketplace = Marketplace::in_memory(Arc::new(DefaultClock));
    let gateway = Arc::new(InMemoryIdentityGateway::new());
    let sessions = marketplace.sessions(Arc::clone(&gateway) as Arc<dyn IdentityGateway>);
    Scene {
        marketplace,
        sessions,
        gateway,
    }
}
