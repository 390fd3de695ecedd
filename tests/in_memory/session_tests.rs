//! Sign-up, sign-in, and role resolution.

use super::helpers::{PASSWORD, Scene, scene};
use internhub::bootstrap::{RoleView, SessionError};
use internhub::identity::domain::{IdentityError, SignUpRequest};
use internhub::identity::ports::IdentityGateway;
use internhub::profile::domain::Role;
use rstest::rstest;

#[rstest]
#[case(Role::Student, vec!["Dashboard", "Browse Internships", "Profile"])]
#[case(
    Role::Company,
    vec!["Dashboard", "Post Internship", "Manage Applications", "Assign Tasks"]
)]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_resolves_role_and_opens_matching_view(
    scene: Scene,
    #[case] role: Role,
    #[case] labels: Vec<&'static str>,
) {
    scene.sign_up("user@example.com", "Pat", role).await;

    let session = scene
        .sessions
        .sign_in("USER@example.com", PASSWORD)
        .await
        .expect("sign-in should succeed");
    assert_eq!(session.role(), role);
    assert_eq!(session.actor().role(), role);

    let view = scene.marketplace.open_view(&session);
    assert_eq!(view.menu_labels(), labels);
    match (role, &view) {
        (Role::Student, RoleView::Student(_)) | (Role::Company, RoleView::Company(_)) => {}
        _ => panic!("view does not match role {role}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_records_profile_with_chosen_role(scene: Scene) {
    let session = scene.company("hr@acme.test").await;

    let profile = scene
        .marketplace
        .profiles()
        .find(session.user().id())
        .await
        .expect("profile should exist");
    assert_eq!(profile.role(), Role::Company);
    assert_eq!(profile.email(), "hr@acme.test");
    assert_eq!(profile.full_name(), "Hiring Manager");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_is_rejected(scene: Scene) {
    scene.student("sam@example.com", "Sam").await;

    let result = scene.sessions.sign_in("sam@example.com", "not-it").await;
    assert!(matches!(
        result,
        Err(SessionError::Identity(IdentityError::InvalidCredentials))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identity_without_profile_has_no_role(scene: Scene) {
    let orphan = scene
        .gateway
        .sign_up(&SignUpRequest::new(
            "orphan@example.com",
            PASSWORD,
            "Orphan",
            Role::Student,
        ))
        .await
        .expect("gateway sign-up should succeed");

    let result = scene.sessions.sign_in("orphan@example.com", PASSWORD).await;
    let Err(err) = result else {
        panic!("expected sign-in without a profile to fail");
    };
    assert!(matches!(err, SessionError::RoleNotAssigned(id) if id == orphan.id()));
    assert_eq!(err.to_string(), "Role not assigned. Please contact support.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn weak_password_creates_no_profile(scene: Scene) {
    let result = scene
        .sessions
        .sign_up(&SignUpRequest::new(
            "short@example.com",
            "abc",
            "Short",
            Role::Student,
        ))
        .await;
    assert!(matches!(
        result,
        Err(SessionError::Identity(IdentityError::WeakPassword))
    ));
    assert!(matches!(
        scene.sessions.sign_in("short@example.com", "abc").await,
        Err(SessionError::Identity(IdentityError::InvalidCredentials))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signing_out_twice_fails(scene: Scene) {
    let session = scene.student("sam@example.com", "Sam").await;
    let copy = session.clone();

    scene
        .sessions
        .sign_out(session)
        .await
        .expect("first sign-out should succeed");
    assert!(matches!(
        scene.sessions.sign_out(copy).await,
        Err(SessionError::Identity(IdentityError::NotSignedIn(_)))
    ));
}
