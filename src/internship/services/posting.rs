//! Service layer for posting, closing, and browsing internships.
//!
//! Posting is a direct write by the company; only the status of an existing
//! posting is ever changed afterwards, and only by its owner.

use crate::error::{Entity, MarketplaceError, MarketplaceResult};
use crate::internship::domain::{Internship, InternshipDraft, InternshipFilter, InternshipId};
use crate::lifecycle::{Action, Actor, Ownership, authorize};
use crate::store::Store;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Internship posting orchestration service.
#[derive(Clone)]
pub struct PostingService<C>
where
    C: Clock + Send + Sync,
{
    store: Store,
    clock: Arc<C>,
}

impl<C> PostingService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new posting service.
    #[must_use]
    pub const fn new(store: Store, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Publishes an open internship for the acting company.
    ///
    /// The company profile's name is updated when the form carries a
    /// different one.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Unauthorized`] for non-company actors,
    /// [`MarketplaceError::Validation`] when required fields are blank, and
    /// [`MarketplaceError::NotFound`] when the company profile is missing.
    pub async fn post(
        &self,
        actor: &Actor,
        draft: &InternshipDraft,
    ) -> MarketplaceResult<Internship> {
        authorize(actor, Action::PostInternship, Ownership::company(actor.id()))?;
        let internship = Internship::post(actor.id(), draft, &*self.clock)?;

        let mut company = self
            .store
            .profiles()
            .find_by_id(actor.id())
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Profile, actor.id()))?;
        if company.rename_company(draft.company_name(), &*self.clock)? {
            self.store.profiles().update(&company).await?;
            info!(company_id = %actor.id(), "company name updated from posting");
        }

        self.store.internships().store(&internship).await?;
        info!(
            internship_id = %internship.id(),
            company_id = %actor.id(),
            "internship posted"
        );
        Ok(internship)
    }

    /// Closes an owned internship to new applications.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Unauthorized`] unless `actor` owns the
    /// internship and [`MarketplaceError::InvalidTransition`] when it is
    /// already closed.
    pub async fn close(&self, actor: &Actor, id: InternshipId) -> MarketplaceResult<Internship> {
        let mut internship = self.find(id).await?;
        authorize(
            actor,
            Action::CloseInternship,
            Ownership::company(internship.company_id()),
        )?;
        internship.close(&*self.clock)?;
        self.store.internships().update(&internship).await?;
        info!(internship_id = %id, company_id = %actor.id(), "internship closed");
        Ok(internship)
    }

    /// Returns the internship with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] when no such internship exists.
    pub async fn find(&self, id: InternshipId) -> MarketplaceResult<Internship> {
        self.store
            .internships()
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Internship, id))
    }

    /// Lists open internships matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::StoreUnavailable`] when the store fails.
    pub async fn browse(&self, filter: &InternshipFilter) -> MarketplaceResult<Vec<Internship>> {
        debug!(search = ?filter.search(), location = ?filter.location(), "browsing internships");
        Ok(self.store.internships().list_open(filter).await?)
    }

    /// Lists every internship owned by the acting company.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::StoreUnavailable`] when the store fails.
    pub async fn list_owned(&self, actor: &Actor) -> MarketplaceResult<Vec<Internship>> {
        Ok(self.store.internships().list_by_company(actor.id()).await?)
    }
}
