//! Application repository against `PostgreSQL`.

use super::helpers::TestDatabase;
use internhub::application::domain::{Application, ApplicationStatus};
use internhub::application::ports::ApplicationRepositoryError;
use internhub::profile::domain::Role;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

#[rstest]
fn pair_constraint_rejects_second_application(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let student = database.profile(Role::Student, "sam@example.com").await;
        let internship = database.internship(&company, "Backend Intern", "Berlin").await;
        database.application(&internship, &student).await;

        let second = Application::submit(internship.id(), student.id(), &DefaultClock);
        let result = database.store.applications().store(&second).await;

        assert!(matches!(
            result,
            Err(ApplicationRepositoryError::DuplicateApplication { internship_id, student_id })
                if internship_id == internship.id() && student_id == student.id()
        ));
        assert_eq!(
            database
                .store
                .applications()
                .list_by_student(student.id())
                .await
                .expect("listing succeeds")
                .len(),
            1
        );
    });
}

#[rstest]
fn stale_status_write_reports_conflict(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let student = database.profile(Role::Student, "sam@example.com").await;
        let internship = database.internship(&company, "Backend Intern", "Berlin").await;
        let stored = database.application(&internship, &student).await;

        let mut rejecting = stored.clone();
        let mut accepting = stored;
        let expected = rejecting
            .transition_to(ApplicationStatus::Rejected, &DefaultClock)
            .expect("pending can be rejected");
        accepting
            .transition_to(ApplicationStatus::Accepted, &DefaultClock)
            .expect("pending can be accepted");
        database
            .store
            .applications()
            .update_status(&rejecting, expected)
            .await
            .expect("first write wins");

        let result = database
            .store
            .applications()
            .update_status(&accepting, expected)
            .await;

        assert!(matches!(
            result,
            Err(ApplicationRepositoryError::StatusConflict {
                actual: ApplicationStatus::Rejected,
                requested: ApplicationStatus::Accepted,
                ..
            })
        ));
    });
}

#[rstest]
fn counts_are_scoped_to_given_internships(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let rival = database.profile(Role::Company, "hr@rival.test").await;
        let sam = database.profile(Role::Student, "sam@example.com").await;
        let kim = database.profile(Role::Student, "kim@example.com").await;
        let owned = database.internship(&company, "Backend Intern", "Berlin").await;
        let foreign = database.internship(&rival, "Rival Intern", "Paris").await;
        database.application(&owned, &sam).await;
        database.application(&owned, &kim).await;
        database.application(&foreign, &sam).await;

        let applications = database.store.applications();
        assert_eq!(
            applications
                .count_with_status(&[owned.id()], ApplicationStatus::Pending)
                .await
                .expect("count succeeds"),
            2
        );
        assert_eq!(
            applications
                .count_with_status(&[], ApplicationStatus::Pending)
                .await
                .expect("empty count succeeds"),
            0
        );
        assert_eq!(
            applications
                .list_by_internships(&[owned.id()])
                .await
                .expect("listing succeeds")
                .len(),
            2
        );
    });
}
