//! Lifecycle flow over the shared `PostgreSQL` pool.

use super::helpers::TestDatabase;
use internhub::application::domain::ApplicationStatus;
use internhub::bootstrap::Marketplace;
use internhub::db;
use internhub::error::ErrorKind;
use internhub::lifecycle::Actor;
use internhub::profile::domain::Role;
use internhub::task::domain::NewTask;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn engine_flow_persists_every_step(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let marketplace = Marketplace::new(database.store.clone(), Arc::new(DefaultClock));
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let student = database.profile(Role::Student, "sam@example.com").await;
        let internship = database.internship(&company, "Backend Intern", "Berlin").await;
        let company_actor = Actor::new(company.id(), Role::Company);
        let student_actor = Actor::new(student.id(), Role::Student);
        let engine = marketplace.lifecycle();

        let application = engine
            .apply(&student_actor, internship.id())
            .await
            .expect("student applies");
        let duplicate = engine.apply(&student_actor, internship.id()).await;
        assert_eq!(
            duplicate.map_err(|err| err.kind()).err(),
            Some(ErrorKind::DuplicateApplication)
        );

        let accepted = engine
            .accept(&company_actor, application.id())
            .await
            .expect("owner accepts");
        assert_eq!(accepted.status(), ApplicationStatus::Accepted);

        let due = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let task = engine
            .assign_task(
                &company_actor,
                NewTask::new(internship.id(), student.id(), "Write docs", due),
            )
            .await
            .expect("owner assigns");
        engine
            .submit_task(&student_actor, task.id(), "http://x")
            .await
            .expect("student submits");

        let stored = database
            .store
            .tasks()
            .find_by_id(task.id())
            .await
            .expect("lookup succeeds")
            .expect("task exists");
        assert_eq!(stored.submission_link(), Some("http://x"));
    });
}

#[rstest]
fn schema_reapplies_over_a_migrated_database(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        db::apply_schema(&database.pool)
            .await
            .expect("schema statements are idempotent");
        db::ping(&database.pool).await.expect("database answers");

        let company = database.profile(Role::Company, "hr@acme.test").await;
        let stored = database
            .store
            .profiles()
            .find_by_id(company.id())
            .await
            .expect("lookup succeeds");
        assert_eq!(stored.map(|profile| profile.role()), Some(Role::Company));
    });
}
