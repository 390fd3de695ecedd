//! Batched lookups backing the join records.

use crate::error::MarketplaceResult;
use crate::internship::domain::{Internship, InternshipId};
use crate::profile::domain::{Profile, ProfileId};
use crate::store::Store;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub(super) fn unique<T: Copy + Eq + Hash>(ids: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

pub(super) async fn internships_by_id(
    store: &Store,
    ids: impl IntoIterator<Item = InternshipId>,
) -> MarketplaceResult<HashMap<InternshipId, Internship>> {
    let wanted = unique(ids);
    let internships = store.internships().find_by_ids(&wanted).await?;
    Ok(internships
        .into_iter()
        .map(|internship| (internship.id(), internship))
        .collect())
}

pub(super) async fn profiles_by_id(
    store: &Store,
    ids: impl IntoIterator<Item = ProfileId>,
) -> MarketplaceResult<HashMap<ProfileId, Profile>> {
    let wanted = unique(ids);
    let profiles = store.profiles().find_by_ids(&wanted).await?;
    Ok(profiles
        .into_iter()
        .map(|profile| (profile.id(), profile))
        .collect())
}

/// Returns the name a company posts under, falling back to its owner's
/// display name.
pub(super) fn company_name(company: Option<&Profile>) -> String {
    company
        .map(|profile| {
            profile
                .company_name()
                .unwrap_or_else(|| profile.full_name())
                .to_owned()
        })
        .unwrap_or_default()
}
