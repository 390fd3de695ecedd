//! `PostgreSQL` repository implementation for internships.

use super::{
    models::{InternshipRow, NewInternshipRow},
    schema::internships,
};
use crate::db::{PgPool, run_blocking};
use crate::internship::{
    domain::{
        Internship, InternshipFilter, InternshipId, InternshipStatus, PersistedInternshipData,
    },
    ports::{InternshipRepository, InternshipRepositoryError, InternshipRepositoryResult},
};
use crate::profile::domain::ProfileId;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed internship repository.
#[derive(Debug, Clone)]
pub struct PostgresInternshipRepository {
    pool: PgPool,
}

impl PostgresInternshipRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InternshipRepository for PostgresInternshipRepository {
    async fn store(&self, internship: &Internship) -> InternshipRepositoryResult<()> {
        let internship_id = internship.id();
        let new_row = to_new_row(internship);

        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(internships::table)
                    .values(&new_row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            InternshipRepositoryError::DuplicateInternship(internship_id)
                        }
                        _ => InternshipRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
            InternshipRepositoryError::persistence,
        )
        .await
    }

    async fn update(&self, internship: &Internship) -> InternshipRepositoryResult<()> {
        let internship_id = internship.id();
        let status = internship.status().as_str().to_owned();
        let updated_at = internship.updated_at();

        run_blocking(
            &self.pool,
            move |connection| {
                let updated_count = diesel::update(
                    internships::table.filter(internships::id.eq(internship_id.into_inner())),
                )
                .set((
                    internships::status.eq(&status),
                    internships::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(InternshipRepositoryError::persistence)?;

                if updated_count == 0 {
                    return Err(InternshipRepositoryError::NotFound(internship_id));
                }
                Ok(())
            },
            InternshipRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_id(&self, id: InternshipId) -> InternshipRepositoryResult<Option<Internship>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let row = internships::table
                    .filter(internships::id.eq(id.into_inner()))
                    .select(InternshipRow::as_select())
                    .first::<InternshipRow>(connection)
                    .optional()
                    .map_err(InternshipRepositoryError::persistence)?;
                row.map(row_to_internship).transpose()
            },
            InternshipRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_ids(
        &self,
        ids: &[InternshipId],
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();

        run_blocking(
            &self.pool,
            move |connection| {
                let rows = internships::table
                    .filter(internships::id.eq_any(&raw_ids))
                    .select(InternshipRow::as_select())
                    .load::<InternshipRow>(connection)
                    .map_err(InternshipRepositoryError::persistence)?;
                rows.into_iter().map(row_to_internship).collect()
            },
            InternshipRepositoryError::persistence,
        )
        .await
    }

    async fn list_open(
        &self,
        filter: &InternshipFilter,
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        let search = filter.search().map(InternshipFilter::like_pattern);
        let location = filter.location().map(InternshipFilter::like_pattern);

        run_blocking(
            &self.pool,
            move |connection| {
                let mut query = internships::table
                    .filter(internships::status.eq(InternshipStatus::Open.as_str()))
                    .into_boxed();
                if let Some(pattern) = search {
                    query = query.filter(
                        internships::title
                            .ilike(pattern.clone())
                            .or(internships::role.ilike(pattern)),
                    );
                }
                if let Some(pattern) = location {
                    query = query.filter(internships::location.ilike(pattern));
                }
                let rows = query
                    .order(internships::created_at.desc())
                    .select(InternshipRow::as_select())
                    .load::<InternshipRow>(connection)
                    .map_err(InternshipRepositoryError::persistence)?;
                rows.into_iter().map(row_to_internship).collect()
            },
            InternshipRepositoryError::persistence,
        )
        .await
    }

    async fn list_by_company(
        &self,
        company_id: ProfileId,
    ) -> InternshipRepositoryResult<Vec<Internship>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let rows = internships::table
                    .filter(internships::company_id.eq(company_id.into_inner()))
                    .order(internships::created_at.desc())
                    .select(InternshipRow::as_select())
                    .load::<InternshipRow>(connection)
                    .map_err(InternshipRepositoryError::persistence)?;
                rows.into_iter().map(row_to_internship).collect()
            },
            InternshipRepositoryError::persistence,
        )
        .await
    }
}

fn to_new_row(internship: &Internship) -> NewInternshipRow {
    NewInternshipRow {
        id: internship.id().into_inner(),
        company_id: internship.company_id().into_inner(),
        title: internship.title().to_owned(),
        role: internship.role().to_owned(),
        description: internship.description().to_owned(),
        location: internship.location().to_owned(),
        duration: internship.duration().to_owned(),
        stipend: internship.stipend().to_owned(),
        skills_required: internship.skills_required().to_vec(),
        status: internship.status().as_str().to_owned(),
        created_at: internship.created_at(),
        updated_at: internship.updated_at(),
    }
}

fn row_to_internship(row: InternshipRow) -> InternshipRepositoryResult<Internship> {
    let status = InternshipStatus::try_from(row.status.as_str())
        .map_err(InternshipRepositoryError::invalid_persisted_data)?;

    Ok(Internship::from_persisted(PersistedInternshipData {
        id: InternshipId::from_uuid(row.id),
        company_id: ProfileId::from_uuid(row.company_id),
        title: row.title,
        role: row.role,
        description: row.description,
        location: row.location,
        duration: row.duration,
        stipend: row.stipend,
        skills_required: row.skills_required,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
