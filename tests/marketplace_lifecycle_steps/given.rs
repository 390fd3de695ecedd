//! Given steps for marketplace lifecycle BDD scenarios.

use super::world::{MarketplaceWorld, PASSWORD, run_async};
use eyre::WrapErr;
use internhub::identity::domain::SignUpRequest;
use internhub::internship::domain::InternshipDraft;
use internhub::profile::domain::Role;
use rstest_bdd_macros::given;

#[given(r#"a company "{email}" posting "{title}""#)]
fn company_posting(
    world: &mut MarketplaceWorld,
    email: String,
    title: String,
) -> Result<(), eyre::Report> {
    let session = run_async(world.sessions.sign_up(&SignUpRequest::new(
        email,
        PASSWORD,
        "Hiring Manager",
        Role::Company,
    )))
    .wrap_err("sign up company for scenario")?;
    let draft = InternshipDraft::new("Acme", title, "Engineering", "Ship features");
    let internship = run_async(world.marketplace.postings().post(&session.actor(), &draft))
        .wrap_err("post internship for scenario")?;
    world.internship_id = Some(internship.id());
    world.company = Some(session);
    Ok(())
}

#[given(r#"a student "{email}" named "{full_name}""#)]
fn student_named(
    world: &mut MarketplaceWorld,
    email: String,
    full_name: String,
) -> Result<(), eyre::Report> {
    let session = run_async(world.sessions.sign_up(&SignUpRequest::new(
        email,
        PASSWORD,
        full_name,
        Role::Student,
    )))
    .wrap_err("sign up student for scenario")?;
    world.student = Some(session);
    Ok(())
}
