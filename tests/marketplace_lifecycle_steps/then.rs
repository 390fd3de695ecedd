//! Then steps for marketplace lifecycle BDD scenarios.

use super::world::{MarketplaceWorld, run_async};
use internhub::application::domain::ApplicationStatus;
use internhub::error::ErrorKind;
use internhub::task::domain::{Task, TaskStatus};
use rstest_bdd_macros::then;

fn stored_task(world: &MarketplaceWorld) -> Result<Task, eyre::Report> {
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(world.marketplace.store().tasks().find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} not stored"))
}

#[then(r#"the application status is "{status}""#)]
fn application_status_is(world: &MarketplaceWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ApplicationStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let dashboard = run_async(world.student_view()?.dashboard())
        .map_err(|notice| eyre::eyre!("dashboard failed: {notice}"))?;
    let actual = dashboard
        .applications
        .first()
        .map(|row| row.application.status())
        .ok_or_else(|| eyre::eyre!("student has no applications"))?;
    eyre::ensure!(actual == expected, "expected {expected}, found {actual}");
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &MarketplaceWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = stored_task(world)?.status();
    eyre::ensure!(actual == expected, "expected {expected}, found {actual}");
    Ok(())
}

#[then(r#"the task submission link is "{link}""#)]
fn submission_link_is(world: &MarketplaceWorld, link: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.submission_link() == Some(link.as_str()),
        "expected link {link}, found {:?}",
        task.submission_link()
    );
    Ok(())
}

#[then(r#"the task feedback is "{feedback}""#)]
fn feedback_is(world: &MarketplaceWorld, feedback: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.feedback() == Some(feedback.as_str()),
        "expected feedback {feedback}, found {:?}",
        task.feedback()
    );
    Ok(())
}

#[then(r#"the last notice reports "{kind}""#)]
fn last_notice_reports(world: &MarketplaceWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = match kind.as_str() {
        "duplicate application" => ErrorKind::DuplicateApplication,
        "invalid transition" => ErrorKind::InvalidTransition,
        "precondition failed" => ErrorKind::PreconditionFailed,
        "unauthorized" => ErrorKind::Unauthorized,
        other => return Err(eyre::eyre!("unknown error kind in scenario: {other}")),
    };
    let notice = world
        .last_notice
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no action has run"))?;
    eyre::ensure!(
        notice.kind() == Some(expected),
        "expected {expected:?} notice, got {:?}: {notice}",
        notice.kind()
    );
    Ok(())
}

#[then("the student has {count:usize} application")]
fn student_application_count(world: &MarketplaceWorld, count: usize) -> Result<(), eyre::Report> {
    let dashboard = run_async(world.student_view()?.dashboard())
        .map_err(|notice| eyre::eyre!("dashboard failed: {notice}"))?;
    eyre::ensure!(
        dashboard.applications.len() == count,
        "expected {count} applications, found {}",
        dashboard.applications.len()
    );
    Ok(())
}

#[then("the student has no tasks")]
fn student_has_no_tasks(world: &MarketplaceWorld) -> Result<(), eyre::Report> {
    let dashboard = run_async(world.student_view()?.dashboard())
        .map_err(|notice| eyre::eyre!("dashboard failed: {notice}"))?;
    eyre::ensure!(
        dashboard.tasks.is_empty(),
        "expected no tasks, found {}",
        dashboard.tasks.len()
    );
    Ok(())
}
