//! In-memory internship repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::internship::{
    domain::{Internship, InternshipFilter, InternshipId},
    ports::{InternshipRepository, InternshipRepositoryError, InternshipRepositoryResult},
};
use crate::profile::domain::ProfileId;

/// Thread-safe in-memory internship repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInternshipRepository {
    internships: Arc<RwLock<HashMap<InternshipId, Internship>>>,
}

impl InMemoryInternshipRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_newest_first(
        &self,
        predicate: impl Fn(&Internship) -> bool,
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        let internships = self.internships.read().map_err(lock_error)?;
        let mut matching: Vec<Internship> = internships
            .values()
            .filter(|internship| predicate(internship))
            .cloned()
            .collect();
        matching.sort_by_key(|internship| std::cmp::Reverse(internship.created_at()));
        Ok(matching)
    }
}

fn lock_error(err: impl ToString) -> InternshipRepositoryError {
    InternshipRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl InternshipRepository for InMemoryInternshipRepository {
    async fn store(&self, internship: &Internship) -> InternshipRepositoryResult<()> {
        let mut internships = self.internships.write().map_err(lock_error)?;
        if internships.contains_key(&internship.id()) {
            return Err(InternshipRepositoryError::DuplicateInternship(
                internship.id(),
            ));
        }
        internships.insert(internship.id(), internship.clone());
        Ok(())
    }

    async fn update(&self, internship: &Internship) -> InternshipRepositoryResult<()> {
        let mut internships = self.internships.write().map_err(lock_error)?;
        let stored = internships
            .get_mut(&internship.id())
            .ok_or(InternshipRepositoryError::NotFound(internship.id()))?;
        *stored = internship.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: InternshipId) -> InternshipRepositoryResult<Option<Internship>> {
        let internships = self.internships.read().map_err(lock_error)?;
        Ok(internships.get(&id).cloned())
    }

    async fn find_by_ids(
        &self,
        ids: &[InternshipId],
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        let internships = self.internships.read().map_err(lock_error)?;
        Ok(ids
            .iter()
            .filter_map(|id| internships.get(id).cloned())
            .collect())
    }

    async fn list_open(
        &self,
        filter: &InternshipFilter,
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        self.collect_newest_first(|internship| {
            internship.status().is_open() && filter.matches(internship)
        })
    }

    async fn list_by_company(
        &self,
        company_id: ProfileId,
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        self.collect_newest_first(|internship| internship.company_id() == company_id)
    }
}
