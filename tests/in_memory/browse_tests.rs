//! Student browsing of open internships.

use super::helpers::{Scene, scene};
use internhub::bootstrap::RoleView;
use internhub::internship::domain::InternshipFilter;
use rstest::rstest;

async fn seeded_titles(scene: &Scene, filter: InternshipFilter) -> Vec<String> {
    let company = scene.company("hr@acme.test").await;
    scene.post(&company, "Acme", "Backend Intern", "Berlin").await;
    scene.post(&company, "Acme", "Data Analyst", "Remote").await;
    scene.post(&company, "Acme", "Frontend Intern", "Berlin, DE").await;
    let student = scene.student("sam@example.com", "Sam").await;

    let RoleView::Student(view) = scene.marketplace.open_view(&student) else {
        panic!("expected a student view");
    };
    let mut titles: Vec<String> = view
        .browse(&filter)
        .await
        .expect("browse succeeds")
        .into_iter()
        .map(|listing| listing.internship.title().to_owned())
        .collect();
    titles.sort();
    titles
}

const ALL_OPEN: &[&str] = &["Backend Intern", "Data Analyst", "Frontend Intern"];

#[rstest]
#[case(InternshipFilter::new(), ALL_OPEN)]
#[case(InternshipFilter::new().with_search("INTERN"), &["Backend Intern", "Frontend Intern"])]
#[case(InternshipFilter::new().with_search("engineering"), ALL_OPEN)]
#[case(InternshipFilter::new().with_location("berlin"), &["Backend Intern", "Frontend Intern"])]
#[case(InternshipFilter::new().with_search("backend").with_location("remote"), &[])]
#[case(InternshipFilter::new().with_search("   "), ALL_OPEN)]
#[tokio::test(flavor = "multi_thread")]
async fn filter_narrows_open_listings(
    scene: Scene,
    #[case] filter: InternshipFilter,
    #[case] expected: &[&str],
) {
    assert_eq!(seeded_titles(&scene, filter).await, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_carry_company_name_and_applied_flag(scene: Scene) {
    let company = scene.company("hr@acme.test").await;
    let applied_to = scene.post(&company, "Acme Labs", "Backend Intern", "Berlin").await;
    scene.post(&company, "Acme Labs", "Data Analyst", "Remote").await;
    let student = scene.student("sam@example.com", "Sam").await;
    let RoleView::Student(view) = scene.marketplace.open_view(&student) else {
        panic!("expected a student view");
    };
    assert!(view.apply(applied_to.id()).await.is_success());

    let listings = view
        .browse(&InternshipFilter::new())
        .await
        .expect("browse succeeds");

    assert_eq!(listings.len(), 2);
    for listing in &listings {
        assert_eq!(listing.company_name, "Acme Labs");
        assert_eq!(
            listing.already_applied,
            listing.internship.id() == applied_to.id()
        );
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_postings_are_hidden(scene: Scene) {
    let company = scene.company("hr@acme.test").await;
    let closing = scene.post(&company, "Acme", "Backend Intern", "Berlin").await;
    scene.post(&company, "Acme", "Data Analyst", "Remote").await;
    scene
        .marketplace
        .postings()
        .close(&company.actor(), closing.id())
        .await
        .expect("owner can close");
    let student = scene.student("sam@example.com", "Sam").await;
    let RoleView::Student(view) = scene.marketplace.open_view(&student) else {
        panic!("expected a student view");
    };

    let listings = view
        .browse(&InternshipFilter::new())
        .await
        .expect("browse succeeds");

    assert_eq!(listings.len(), 1);
    assert!(listings.iter().all(|listing| listing.internship.id() != closing.id()));
}
