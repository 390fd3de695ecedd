//! `PostgreSQL` repository implementation for applications.

use super::{models::ApplicationRow, schema::applications};
use crate::application::{
    domain::{Application, ApplicationId, ApplicationStatus, PersistedApplicationData},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};
use crate::db::{PgPool, run_blocking};
use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

const PAIR_CONSTRAINT: &str = "applications_internship_student_unique";

/// `PostgreSQL`-backed application repository.
#[derive(Debug, Clone)]
pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let application_id = application.id();
        let internship_id = application.internship_id();
        let student_id = application.student_id();
        let row = to_row(application);

        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(applications::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                            if info.constraint_name() == Some(PAIR_CONSTRAINT) =>
                        {
                            ApplicationRepositoryError::DuplicateApplication {
                                internship_id,
                                student_id,
                            }
                        }
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            ApplicationRepositoryError::DuplicateId(application_id)
                        }
                        _ => ApplicationRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }

    async fn update_status(
        &self,
        application: &Application,
        expected: ApplicationStatus,
    ) -> ApplicationRepositoryResult<()> {
        let application_id = application.id();
        let requested = application.status();
        let updated_at = application.updated_at();

        run_blocking(
            &self.pool,
            move |connection| {
                let raw_id = application_id.into_inner();
                let updated_count = diesel::update(
                    applications::table
                        .filter(applications::id.eq(raw_id))
                        .filter(applications::status.eq(expected.as_str())),
                )
                .set((
                    applications::status.eq(requested.as_str()),
                    applications::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(ApplicationRepositoryError::persistence)?;

                if updated_count > 0 {
                    return Ok(());
                }

                let stored = applications::table
                    .filter(applications::id.eq(raw_id))
                    .select(applications::status)
                    .first::<String>(connection)
                    .optional()
                    .map_err(ApplicationRepositoryError::persistence)?;
                let Some(stored) = stored else {
                    return Err(ApplicationRepositoryError::NotFound(application_id));
                };
                let actual = ApplicationStatus::try_from(stored.as_str())
                    .map_err(ApplicationRepositoryError::invalid_persisted_data)?;
                Err(ApplicationRepositoryError::StatusConflict {
                    id: application_id,
                    expected,
                    actual,
                    requested,
                })
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let row = applications::table
                    .filter(applications::id.eq(id.into_inner()))
                    .select(ApplicationRow::as_select())
                    .first::<ApplicationRow>(connection)
                    .optional()
                    .map_err(ApplicationRepositoryError::persistence)?;
                row.map(row_to_application).transpose()
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_pair(
        &self,
        internship_id: InternshipId,
        student_id: ProfileId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let row = applications::table
                    .filter(applications::internship_id.eq(internship_id.into_inner()))
                    .filter(applications::student_id.eq(student_id.into_inner()))
                    .select(ApplicationRow::as_select())
                    .first::<ApplicationRow>(connection)
                    .optional()
                    .map_err(ApplicationRepositoryError::persistence)?;
                row.map(row_to_application).transpose()
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }

    async fn list_by_student(
        &self,
        student_id: ProfileId,
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let rows = applications::table
                    .filter(applications::student_id.eq(student_id.into_inner()))
                    .order(applications::applied_at.desc())
                    .select(ApplicationRow::as_select())
                    .load::<ApplicationRow>(connection)
                    .map_err(ApplicationRepositoryError::persistence)?;
                rows.into_iter().map(row_to_application).collect()
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }

    async fn list_by_internships(
        &self,
        internship_ids: &[InternshipId],
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        if internship_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids = raw_internship_ids(internship_ids);

        run_blocking(
            &self.pool,
            move |connection| {
                let rows = applications::table
                    .filter(applications::internship_id.eq_any(&raw_ids))
                    .order(applications::applied_at.desc())
                    .select(ApplicationRow::as_select())
                    .load::<ApplicationRow>(connection)
                    .map_err(ApplicationRepositoryError::persistence)?;
                rows.into_iter().map(row_to_application).collect()
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }

    async fn count_with_status(
        &self,
        internship_ids: &[InternshipId],
        status: ApplicationStatus,
    ) -> ApplicationRepositoryResult<usize> {
        if internship_ids.is_empty() {
            return Ok(0);
        }
        let raw_ids = raw_internship_ids(internship_ids);

        run_blocking(
            &self.pool,
            move |connection| {
                let count = applications::table
                    .filter(applications::internship_id.eq_any(&raw_ids))
                    .filter(applications::status.eq(status.as_str()))
                    .count()
                    .get_result::<i64>(connection)
                    .map_err(ApplicationRepositoryError::persistence)?;
                usize::try_from(count).map_err(ApplicationRepositoryError::invalid_persisted_data)
            },
            ApplicationRepositoryError::persistence,
        )
        .await
    }
}

fn raw_internship_ids(ids: &[InternshipId]) -> Vec<uuid::Uuid> {
    ids.iter().map(|id| id.into_inner()).collect()
}

fn to_row(application: &Application) -> ApplicationRow {
    ApplicationRow {
        id: application.id().into_inner(),
        internship_id: application.internship_id().into_inner(),
        student_id: application.student_id().into_inner(),
        status: application.status().as_str().to_owned(),
        applied_at: application.applied_at(),
        updated_at: application.updated_at(),
    }
}

fn row_to_application(row: ApplicationRow) -> ApplicationRepositoryResult<Application> {
    let status = ApplicationStatus::try_from(row.status.as_str())
        .map_err(ApplicationRepositoryError::invalid_persisted_data)?;

    Ok(Application::from_persisted(PersistedApplicationData {
        id: ApplicationId::from_uuid(row.id),
        internship_id: InternshipId::from_uuid(row.internship_id),
        student_id: ProfileId::from_uuid(row.student_id),
        status,
        applied_at: row.applied_at,
        updated_at: row.updated_at,
    }))
}
