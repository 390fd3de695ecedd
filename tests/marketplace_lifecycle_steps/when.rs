//! When steps for marketplace lifecycle BDD scenarios.

use super::world::{MarketplaceWorld, run_async};
use chrono::NaiveDate;
use internhub::application::domain::ApplicationId;
use internhub::views::TaskForm;
use rstest_bdd_macros::when;

fn application_id(world: &MarketplaceWorld) -> Result<ApplicationId, eyre::Report> {
    let student_id = world
        .student
        .as_ref()
        .map(|session| session.user().id())
        .ok_or_else(|| eyre::eyre!("missing student session in scenario world"))?;
    let application = run_async(
        world
            .marketplace
            .store()
            .applications()
            .find_by_pair(world.internship_id()?, student_id),
    )?
    .ok_or_else(|| eyre::eyre!("student has not applied"))?;
    Ok(application.id())
}

#[when("the student applies to the internship")]
fn student_applies(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let notice = run_async(world.student_view()?.apply(world.internship_id()?));
    world.last_notice = Some(notice);
    Ok(())
}

#[when("the company accepts the application")]
fn company_accepts(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let id = application_id(world)?;
    let notice = run_async(world.company_view()?.accept(id));
    world.last_notice = Some(notice);
    Ok(())
}

#[when("the company rejects the application")]
fn company_rejects(world: &mut MarketplaceWorld) -> Result<(), eyre::Report> {
    let id = application_id(world)?;
    let notice = run_async(world.company_view()?.reject(id));
    world.last_notice = Some(notice);
    Ok(())
}

#[when(r#"the company assigns task "{title}" due "{due_date}""#)]
fn company_assigns(
    world: &mut MarketplaceWorld,
    title: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    let due = NaiveDate::parse_from_str(&due_date, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid due date in scenario: {err}"))?;
    let id = application_id(world)?;
    let notice = run_async(
        world
            .company_view()?
            .assign_task(id, TaskForm::new(title, due)),
    );
    let tasks = run_async(world.student_view()?.dashboard())
        .map_err(|notice| eyre::eyre!("dashboard failed: {notice}"))?
        .tasks;
    world.task_id = tasks.first().map(|row| row.task.id());
    world.last_notice = Some(notice);
    Ok(())
}

#[when(r#"the student submits the task with link "{link}""#)]
fn student_submits(world: &mut MarketplaceWorld, link: String) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let notice = run_async(world.student_view()?.submit_task(task_id, &link));
    world.last_notice = Some(notice);
    Ok(())
}

#[when(r#"the company completes the task with feedback "{feedback}""#)]
fn company_completes(world: &mut MarketplaceWorld, feedback: String) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let notice = run_async(
        world
            .company_view()?
            .review_task(task_id, Some(feedback.as_str())),
    );
    world.last_notice = Some(notice);
    Ok(())
}
