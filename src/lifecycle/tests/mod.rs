//! Unit tests for the lifecycle engine.


use std::sync::Arc;

use crate::internship::domain::{Internship, InternshipDraft};
use crate::lifecycle::{Actor, LifecycleEngine};
use crate::profile::domain::{Profile, ProfileId, Role};
use crate::store::Store;
use mockable::DefaultClock;

/// Engine wired to an in-memory store holding one company, one student, and
/// one open internship owned by the company.
struct Harness {
    store: Store,
    engine: LifecycleEngine<DefaultClock>,
    company: Actor,
    student: Actor,
    internship: Internship,
}

impl Harness {
    async fn seeded() -> Self {
        let store = Store::in_memory();
        let company = seed_profile(&store, Role::Company, "acme@example.com").await;
        let student = seed_profile(&store, Role::Student, "sam@example.com").await;

        let draft = InternshipDraft::new("Acme", "Backend Intern", "Engineering", "Build APIs");
        let internship =
            Internship::post(company.id(), &draft, &DefaultClock).expect("valid draft");
        store
            .internships()
            .store(&internship)
            .await
            .expect("internship stored");

        Self {
            engine: LifecycleEngine::new(store.clone(), Arc::new(DefaultClock)),
            store,
            company,
            student,
            internship,
        }
    }

    async fn another(&self, role: Role, email: &str) -> Actor {
        seed_profile(&self.store, role, email).await
    }
}

async fn seed_profile(store: &Store, role: Role, email: &str) -> Actor {
    let profile = Profile::new(ProfileId::new(), role, "Test User", email, &DefaultClock)
        .expect("valid profile");
    store
        .profiles()
        .store(&profile)
        .await
        .expect("profile stored");
    Actor::new(profile.id(), role)
}
