//! Task repository against `PostgreSQL`.

use super::helpers::TestDatabase;
use internhub::profile::domain::Role;
use internhub::task::domain::TaskStatus;
use internhub::task::ports::TaskRepositoryError;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

#[rstest]
fn progress_round_trips_link_and_feedback(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let student = database.profile(Role::Student, "sam@example.com").await;
        let internship = database.internship(&company, "Backend Intern", "Berlin").await;
        let mut task = database.task(&internship, &student, "Write docs").await;

        let before_submit = task
            .submit("https://git.example/pr/1", &DefaultClock)
            .expect("pending task submits");
        database
            .store
            .tasks()
            .update_progress(&task, before_submit)
            .await
            .expect("submission stored");
        let before_complete = task
            .complete(Some("Great"), &DefaultClock)
            .expect("submitted task completes");
        database
            .store
            .tasks()
            .update_progress(&task, before_complete)
            .await
            .expect("completion stored");

        let stored = database
            .store
            .tasks()
            .find_by_id(task.id())
            .await
            .expect("lookup succeeds")
            .expect("task exists");
        assert_eq!(stored.status(), TaskStatus::Completed);
        assert_eq!(stored.submission_link(), Some("https://git.example/pr/1"));
        assert_eq!(stored.feedback(), Some("Great"));
        assert_eq!(stored.due_date(), task.due_date());
    });
}

#[rstest]
fn stale_progress_write_reports_conflict(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let student = database.profile(Role::Student, "sam@example.com").await;
        let internship = database.internship(&company, "Backend Intern", "Berlin").await;
        let mut task = database.task(&internship, &student, "Write docs").await;
        let previous = task
            .submit("https://git.example/pr/1", &DefaultClock)
            .expect("pending task submits");
        database
            .store
            .tasks()
            .update_progress(&task, previous)
            .await
            .expect("submission stored");

        let result = database.store.tasks().update_progress(&task, previous).await;

        assert!(matches!(
            result,
            Err(TaskRepositoryError::StatusConflict {
                actual: TaskStatus::Submitted,
                ..
            })
        ));
    });
}

#[rstest]
fn student_tasks_are_ordered_by_due_date(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let company = database.profile(Role::Company, "hr@acme.test").await;
        let student = database.profile(Role::Student, "sam@example.com").await;
        let internship = database.internship(&company, "Backend Intern", "Berlin").await;
        database.task(&internship, &student, "First").await;
        database.task(&internship, &student, "Second").await;

        let tasks = database
            .store
            .tasks()
            .list_by_student(student.id())
            .await
            .expect("listing succeeds");
        let titles: Vec<&str> = tasks.iter().map(|task| task.title()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(
            database
                .store
                .tasks()
                .count_with_status(&[internship.id()], TaskStatus::Pending)
                .await
                .expect("count succeeds"),
            2
        );
    });
}
