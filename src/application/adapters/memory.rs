//! In-memory application repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::application::{
    domain::{Application, ApplicationId, ApplicationStatus},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};
use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;

/// Thread-safe in-memory application repository.
///
/// The write lock is held across each uniqueness check and status
/// comparison, so both behave like the database constraints.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRepository {
    applications: Arc<RwLock<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_newest_first(
        &self,
        predicate: impl Fn(&Application) -> bool,
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        let applications = self.applications.read().map_err(lock_error)?;
        let mut matching: Vec<Application> = applications
            .values()
            .filter(|application| predicate(application))
            .cloned()
            .collect();
        matching.sort_by_key(|application| std::cmp::Reverse(application.applied_at()));
        Ok(matching)
    }
}

fn lock_error(err: impl ToString) -> ApplicationRepositoryError {
    ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let mut applications = self.applications.write().map_err(lock_error)?;
        if applications.contains_key(&application.id()) {
            return Err(ApplicationRepositoryError::DuplicateId(application.id()));
        }
        let pair_taken = applications.values().any(|existing| {
            existing.internship_id() == application.internship_id()
                && existing.student_id() == application.student_id()
        });
        if pair_taken {
            return Err(ApplicationRepositoryError::DuplicateApplication {
                internship_id: application.internship_id(),
                student_id: application.student_id(),
            });
        }
        applications.insert(application.id(), application.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        application: &Application,
        expected: ApplicationStatus,
    ) -> ApplicationRepositoryResult<()> {
        let mut applications = self.applications.write().map_err(lock_error)?;
        let stored = applications
            .get_mut(&application.id())
            .ok_or(ApplicationRepositoryError::NotFound(application.id()))?;
        if stored.status() != expected {
            return Err(ApplicationRepositoryError::StatusConflict {
                id: application.id(),
                expected,
                actual: stored.status(),
                requested: application.status(),
            });
        }
        *stored = application.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let applications = self.applications.read().map_err(lock_error)?;
        Ok(applications.get(&id).cloned())
    }

    async fn find_by_pair(
        &self,
        internship_id: InternshipId,
        student_id: ProfileId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let applications = self.applications.read().map_err(lock_error)?;
        Ok(applications
            .values()
            .find(|application| {
                application.internship_id() == internship_id
                    && application.student_id() == student_id
            })
            .cloned())
    }

    async fn list_by_student(
        &self,
        student_id: ProfileId,
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        self.collect_newest_first(|application| application.student_id() == student_id)
    }

    async fn list_by_internships(
        &self,
        internship_ids: &[InternshipId],
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        self.collect_newest_first(|application| {
            internship_ids.contains(&application.internship_id())
        })
    }

    async fn count_with_status(
        &self,
        internship_ids: &[InternshipId],
        status: ApplicationStatus,
    ) -> ApplicationRepositoryResult<usize> {
        let applications = self.applications.read().map_err(lock_error)?;
        Ok(applications
            .values()
            .filter(|application| {
                application.status() == status
                    && internship_ids.contains(&application.internship_id())
            })
            .count())
    }
}
