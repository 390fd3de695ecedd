//! Application and task lifecycle driven through the role views.

use super::helpers::{Scene, scene};
use chrono::NaiveDate;
use internhub::application::domain::ApplicationStatus;
use internhub::bootstrap::Session;
use internhub::error::ErrorKind;
use internhub::internship::domain::Internship;
use internhub::task::domain::TaskStatus;
use internhub::views::{CompanyView, StudentView, TaskForm};
use mockable::DefaultClock;
use rstest::rstest;

fn student_view<'a>(scene: &'a Scene, session: &Session) -> StudentView<'a, DefaultClock> {
    match scene.marketplace.open_view(session) {
        internhub::bootstrap::RoleView::Student(view) => view,
        internhub::bootstrap::RoleView::Company(_) => panic!("expected a student session"),
    }
}

fn company_view<'a>(scene: &'a Scene, session: &Session) -> CompanyView<'a, DefaultClock> {
    match scene.marketplace.open_view(session) {
        internhub::bootstrap::RoleView::Company(view) => view,
        internhub::bootstrap::RoleView::Student(_) => panic!("expected a company session"),
    }
}

struct Posted {
    company: Session,
    student: Session,
    internship: Internship,
}

async fn posted(scene: &Scene) -> Posted {
    let company = scene.company("hr@acme.test").await;
    let student = scene.student("sam@example.com", "Sam Student").await;
    let internship = scene.post(&company, "Acme", "Backend Intern", "Berlin").await;
    Posted {
        company,
        student,
        internship,
    }
}

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_accept_assign_submit_complete(scene: Scene) {
    let Posted {
        company,
        student,
        internship,
    } = posted(&scene).await;
    let students = student_view(&scene, &student);
    let companies = company_view(&scene, &company);

    let applied = students.apply(internship.id()).await;
    assert!(applied.is_success(), "{applied}");
    assert_eq!(applied.message(), "Application submitted for Backend Intern.");

    let incoming = companies.applications().await.expect("applications load");
    assert_eq!(incoming.len(), 1);
    let application_id = incoming
        .first()
        .map(|row| row.application.id())
        .expect("one application");

    let accepted = companies.accept(application_id).await;
    assert_eq!(accepted.message(), "Application from Sam Student accepted.");

    let assigned = companies
        .assign_task(
            application_id,
            TaskForm::new("Write onboarding doc", due()).with_description("Two pages"),
        )
        .await;
    assert_eq!(
        assigned.message(),
        "Task \"Write onboarding doc\" assigned, due 2025-01-01."
    );

    let dashboard = students.dashboard().await.expect("dashboard loads");
    let task_id = dashboard
        .tasks
        .first()
        .map(|row| row.task.id())
        .expect("one task");
    assert_eq!(
        dashboard
            .applications
            .first()
            .map(|row| row.application.status()),
        Some(ApplicationStatus::Accepted)
    );

    let submitted = students.submit_task(task_id, "http://x").await;
    assert!(submitted.is_success(), "{submitted}");

    let reviewed = companies.review_task(task_id, Some("  Nice work ")).await;
    assert!(reviewed.is_success(), "{reviewed}");

    let tasks = companies.tasks().await.expect("tasks load");
    let task = &tasks.first().expect("one task").task;
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.submission_link(), Some("http://x"));
    assert_eq!(task.feedback(), Some("Nice work"));
    assert_eq!(
        tasks.first().map(|row| row.internship_title.as_str()),
        Some("Backend Intern")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_application_is_rejected_and_not_stored(scene: Scene) {
    let Posted {
        student,
        internship,
        ..
    } = posted(&scene).await;
    let students = student_view(&scene, &student);

    assert!(students.apply(internship.id()).await.is_success());
    let again = students.apply(internship.id()).await;

    assert_eq!(again.kind(), Some(ErrorKind::DuplicateApplication));
    assert_eq!(again.message(), "You have already applied to this internship.");
    let applications = scene
        .marketplace
        .store()
        .applications()
        .list_by_student(student.user().id())
        .await
        .expect("list succeeds");
    assert_eq!(applications.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rival_company_cannot_review(scene: Scene) {
    let Posted {
        student,
        internship,
        ..
    } = posted(&scene).await;
    let rival = scene.company("hr@rival.test").await;
    student_view(&scene, &student).apply(internship.id()).await;
    let application = scene
        .marketplace
        .store()
        .applications()
        .find_by_pair(internship.id(), student.user().id())
        .await
        .expect("lookup succeeds")
        .expect("application exists");

    let notice = company_view(&scene, &rival).accept(application.id()).await;

    assert_eq!(notice.kind(), Some(ErrorKind::Unauthorized));
    let stored = scene
        .marketplace
        .store()
        .applications()
        .find_by_id(application.id())
        .await
        .expect("lookup succeeds")
        .expect("application exists");
    assert_eq!(stored.status(), ApplicationStatus::Pending);
    assert!(
        company_view(&scene, &rival)
            .applications()
            .await
            .expect("applications load")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn decided_application_cannot_change(scene: Scene) {
    let Posted {
        company,
        student,
        internship,
    } = posted(&scene).await;
    student_view(&scene, &student).apply(internship.id()).await;
    let companies = company_view(&scene, &company);
    let application_id = companies
        .applications()
        .await
        .expect("applications load")
        .first()
        .map(|row| row.application.id())
        .expect("one application");

    assert!(companies.reject(application_id).await.is_success());
    let notice = companies.accept(application_id).await;

    assert_eq!(notice.kind(), Some(ErrorKind::InvalidTransition));
    assert_eq!(
        notice.message(),
        "This application is rejected and cannot become accepted."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_needs_accepted_application(scene: Scene) {
    let Posted {
        company,
        student,
        internship,
    } = posted(&scene).await;
    student_view(&scene, &student).apply(internship.id()).await;
    let companies = company_view(&scene, &company);
    let application_id = companies
        .applications()
        .await
        .expect("applications load")
        .first()
        .map(|row| row.application.id())
        .expect("one application");

    let notice = companies
        .assign_task(application_id, TaskForm::new("Too early", due()))
        .await;

    assert_eq!(notice.kind(), Some(ErrorKind::PreconditionFailed));
    assert!(companies.tasks().await.expect("tasks load").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_submission_link_leaves_task_pending(scene: Scene) {
    let Posted {
        company,
        student,
        internship,
    } = posted(&scene).await;
    let students = student_view(&scene, &student);
    let companies = company_view(&scene, &company);
    students.apply(internship.id()).await;
    let application_id = companies
        .applications()
        .await
        .expect("applications load")
        .first()
        .map(|row| row.application.id())
        .expect("one application");
    companies.accept(application_id).await;
    companies
        .assign_task(application_id, TaskForm::new("Write tests", due()))
        .await;
    let task_id = students
        .dashboard()
        .await
        .expect("dashboard loads")
        .tasks
        .first()
        .map(|row| row.task.id())
        .expect("one task");

    let notice = students.submit_task(task_id, "   ").await;

    assert_eq!(notice.kind(), Some(ErrorKind::Validation));
    let task = scene
        .marketplace
        .store()
        .tasks()
        .find_by_id(task_id)
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.submission_link(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_internship_refuses_applications(scene: Scene) {
    let Posted {
        company,
        student,
        internship,
    } = posted(&scene).await;

    let closed = company_view(&scene, &company)
        .close_internship(internship.id())
        .await;
    assert_eq!(closed.message(), "Internship \"Backend Intern\" closed.");

    let notice = student_view(&scene, &student).apply(internship.id()).await;
    assert_eq!(notice.kind(), Some(ErrorKind::PreconditionFailed));
}
