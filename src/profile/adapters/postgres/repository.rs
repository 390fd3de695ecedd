//! `PostgreSQL` repository implementation for profiles.

use super::{
    models::{NewProfileRow, ProfileChangesetRow, ProfileRow},
    schema::profiles,
};
use crate::db::{PgPool, run_blocking};
use crate::profile::{
    domain::{PersistedProfileData, Profile, ProfileId, Role},
    ports::{ProfileRepository, ProfileRepositoryError, ProfileRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed profile repository.
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn store(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let profile_id = profile.id();
        let new_row = to_new_row(profile);

        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(profiles::table)
                    .values(&new_row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            ProfileRepositoryError::DuplicateProfile(profile_id)
                        }
                        _ => ProfileRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
            ProfileRepositoryError::persistence,
        )
        .await
    }

    async fn update(&self, profile: &Profile) -> ProfileRepositoryResult<()> {
        let profile_id = profile.id();
        let changeset = to_changeset(profile);

        run_blocking(
            &self.pool,
            move |connection| {
                let updated_count = diesel::update(
                    profiles::table.filter(profiles::id.eq(profile_id.into_inner())),
                )
                .set(&changeset)
                .execute(connection)
                .map_err(ProfileRepositoryError::persistence)?;

                if updated_count == 0 {
                    return Err(ProfileRepositoryError::NotFound(profile_id));
                }
                Ok(())
            },
            ProfileRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_id(&self, id: ProfileId) -> ProfileRepositoryResult<Option<Profile>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let row = profiles::table
                    .filter(profiles::id.eq(id.into_inner()))
                    .select(ProfileRow::as_select())
                    .first::<ProfileRow>(connection)
                    .optional()
                    .map_err(ProfileRepositoryError::persistence)?;
                row.map(row_to_profile).transpose()
            },
            ProfileRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_ids(&self, ids: &[ProfileId]) -> ProfileRepositoryResult<Vec<Profile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();

        run_blocking(
            &self.pool,
            move |connection| {
                let rows = profiles::table
                    .filter(profiles::id.eq_any(&raw_ids))
                    .select(ProfileRow::as_select())
                    .load::<ProfileRow>(connection)
                    .map_err(ProfileRepositoryError::persistence)?;
                rows.into_iter().map(row_to_profile).collect()
            },
            ProfileRepositoryError::persistence,
        )
        .await
    }
}

fn to_new_row(profile: &Profile) -> NewProfileRow {
    NewProfileRow {
        id: profile.id().into_inner(),
        role: profile.role().as_str().to_owned(),
        full_name: profile.full_name().to_owned(),
        email: profile.email().to_owned(),
        phone: profile.phone().map(str::to_owned),
        location: profile.location().map(str::to_owned),
        resume_url: profile.resume_url().map(str::to_owned),
        portfolio_url: profile.portfolio_url().map(str::to_owned),
        skills: profile.skills().to_vec(),
        company_name: profile.company_name().map(str::to_owned),
        created_at: profile.created_at(),
        updated_at: profile.updated_at(),
    }
}

fn to_changeset(profile: &Profile) -> ProfileChangesetRow {
    ProfileChangesetRow {
        full_name: profile.full_name().to_owned(),
        email: profile.email().to_owned(),
        phone: profile.phone().map(str::to_owned),
        location: profile.location().map(str::to_owned),
        resume_url: profile.resume_url().map(str::to_owned),
        portfolio_url: profile.portfolio_url().map(str::to_owned),
        skills: profile.skills().to_vec(),
        company_name: profile.company_name().map(str::to_owned),
        updated_at: profile.updated_at(),
    }
}

fn row_to_profile(row: ProfileRow) -> ProfileRepositoryResult<Profile> {
    let role = Role::try_from(row.role.as_str())
        .map_err(ProfileRepositoryError::invalid_persisted_data)?;

    Ok(Profile::from_persisted(PersistedProfileData {
        id: ProfileId::from_uuid(row.id),
        role,
        full_name: row.full_name,
        email: row.email,
        phone: row.phone,
        location: row.location,
        resume_url: row.resume_url,
        portfolio_url: row.portfolio_url,
        skills: row.skills,
        company_name: row.company_name,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
