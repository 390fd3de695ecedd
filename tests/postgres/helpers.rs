//! Shared fixtures for `PostgreSQL` integration tests.

use chrono::NaiveDate;
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use internhub::application::domain::Application;
use internhub::db::{self, PgPool};
use internhub::internship::domain::{Internship, InternshipDraft};
use internhub::profile::domain::{Profile, ProfileId, Role};
use internhub::store::Store;
use internhub::task::domain::{NewTask, Task};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use std::future::Future;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Template database holding the migrated marketplace schema.
pub const TEMPLATE_DB: &str = "internhub_test_template";

/// Drops a test database once every connection to it is closed.
struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(self.db_name.as_str()) {
            tracing::warn!(
                database = %self.db_name,
                error = %err,
                "test database cleanup failed"
            );
        }
    }
}

/// Per-test database cloned from [`TEMPLATE_DB`].
///
/// Fields drop in declaration order, so the pool closes before the
/// database is dropped.
pub struct TestDatabase {
    pub store: Store,
    pub pool: PgPool,
    runtime: Runtime,
    _cleanup: CleanupGuard,
}

/// Ensures the template database exists with the marketplace schema.
fn ensure_template(cluster: &TestCluster) {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut connection =
                PgConnection::establish(&url).map_err(|err| eyre::eyre!("{err}"))?;
            connection
                .batch_execute(db::SCHEMA_SQL)
                .map_err(|err| eyre::eyre!("schema failed to apply: {err}"))?;
            Ok(())
        })
        .expect("template database should be created");
}

/// Creates a tokio runtime for driving the async repositories.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

impl TestDatabase {
    /// Creates a fresh database from the migrated template.
    pub fn from_template(cluster: &'static TestCluster) -> Self {
        ensure_template(cluster);
        let db_name = format!("internhub_test_{}", Uuid::new_v4().simple());
        cluster
            .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
            .expect("test database should be created");
        let cleanup = CleanupGuard { cluster, db_name };

        let url = cluster.connection().database_url(&cleanup.db_name);
        let pool = Pool::builder()
            .max_size(1)
            .build(ConnectionManager::<PgConnection>::new(url))
            .expect("test database should accept connections");
        Self {
            store: Store::postgres(&pool),
            pool,
            runtime: test_runtime(),
            _cleanup: cleanup,
        }
    }

    /// Drives `future` to completion on the test runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Stores a profile with the given role.
    pub async fn profile(&self, role: Role, email: &str) -> Profile {
        let profile = Profile::new(ProfileId::new(), role, "Pat Example", email, &DefaultClock)
            .expect("valid profile");
        self.store
            .profiles()
            .store(&profile)
            .await
            .expect("profile stored");
        profile
    }

    /// Stores an open internship owned by `company`.
    pub async fn internship(&self, company: &Profile, title: &str, location: &str) -> Internship {
        let draft = InternshipDraft::new("Acme", title, "Engineering", "Ship features")
            .with_location(location)
            .with_skills_required("rust, sql");
        let internship =
            Internship::post(company.id(), &draft, &DefaultClock).expect("valid draft");
        self.store
            .internships()
            .store(&internship)
            .await
            .expect("internship stored");
        internship
    }

    /// Stores a pending application.
    pub async fn application(&self, internship: &Internship, student: &Profile) -> Application {
        let application = Application::submit(internship.id(), student.id(), &DefaultClock);
        self.store
            .applications()
            .store(&application)
            .await
            .expect("application stored");
        application
    }

    /// Stores a pending task.
    pub async fn task(&self, internship: &Internship, student: &Profile, title: &str) -> Task {
        let due = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let task = Task::assign(
            NewTask::new(internship.id(), student.id(), title, due),
            &DefaultClock,
        )
        .expect("valid task");
        self.store.tasks().store(&task).await.expect("task stored");
        task
    }
}
