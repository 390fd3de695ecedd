//! Profile repository against `PostgreSQL`.

use super::helpers::TestDatabase;
use internhub::profile::domain::{ProfileChanges, ProfileId, Role};
use internhub::profile::ports::ProfileRepositoryError;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

#[rstest]
fn edits_round_trip_and_keep_role(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let mut profile = database.profile(Role::Student, "sam@example.com").await;

        profile
            .apply_changes(
                ProfileChanges::new("Sam Student", "sam@example.com")
                    .with_location("Berlin")
                    .with_skills("rust, sql"),
                &DefaultClock,
            )
            .expect("valid changes");
        database
            .store
            .profiles()
            .update(&profile)
            .await
            .expect("update succeeds");

        let stored = database
            .store
            .profiles()
            .find_by_id(profile.id())
            .await
            .expect("lookup succeeds")
            .expect("profile exists");
        assert_eq!(stored.role(), Role::Student);
        assert_eq!(stored.full_name(), "Sam Student");
        assert_eq!(stored.location(), Some("Berlin"));
        assert_eq!(stored.skills(), ["rust", "sql"]);
        assert_eq!(stored.phone(), None);
    });
}

#[rstest]
fn duplicate_identifier_is_rejected(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let profile = database.profile(Role::Company, "hr@acme.test").await;

        let result = database.store.profiles().store(&profile).await;
        assert!(matches!(
            result,
            Err(ProfileRepositoryError::DuplicateProfile(id)) if id == profile.id()
        ));
    });
}

#[rstest]
fn batched_lookup_skips_unknown_ids(shared_test_cluster: &'static TestCluster) {
    let database = TestDatabase::from_template(shared_test_cluster);
    database.block_on(async {
        let first = database.profile(Role::Student, "a@example.com").await;
        let second = database.profile(Role::Student, "b@example.com").await;

        let mut found: Vec<ProfileId> = database
            .store
            .profiles()
            .find_by_ids(&[first.id(), ProfileId::new(), second.id()])
            .await
            .expect("lookup succeeds")
            .iter()
            .map(|profile| profile.id())
            .collect();
        found.sort_by_key(|id| id.into_inner());
        let mut expected = vec![first.id(), second.id()];
        expected.sort_by_key(|id| id.into_inner());
        assert_eq!(found, expected);

        assert!(
            database
                .store
                .profiles()
                .find_by_ids(&[])
                .await
                .expect("empty lookup succeeds")
                .is_empty()
        );
    });
}
