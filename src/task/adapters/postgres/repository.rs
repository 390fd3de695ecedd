//! `PostgreSQL` repository implementation for tasks.

use super::{
    models::{TaskProgressChangeset, TaskRow},
    schema::tasks,
};
use crate::db::{PgPool, run_blocking};
use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_row(task);

        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(tasks::table)
                    .values(&row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id)
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn update_progress(&self, task: &Task, expected: TaskStatus) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let requested = task.status();
        let changeset = TaskProgressChangeset {
            status: requested.as_str().to_owned(),
            submission_link: task.submission_link().map(str::to_owned),
            feedback: task.feedback().map(str::to_owned),
            updated_at: task.updated_at(),
        };

        run_blocking(
            &self.pool,
            move |connection| {
                let raw_id = task_id.into_inner();
                let updated_count = diesel::update(
                    tasks::table
                        .filter(tasks::id.eq(raw_id))
                        .filter(tasks::status.eq(expected.as_str())),
                )
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

                if updated_count > 0 {
                    return Ok(());
                }

                let stored = tasks::table
                    .filter(tasks::id.eq(raw_id))
                    .select(tasks::status)
                    .first::<String>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?;
                let Some(stored) = stored else {
                    return Err(TaskRepositoryError::NotFound(task_id));
                };
                let actual = TaskStatus::try_from(stored.as_str())
                    .map_err(TaskRepositoryError::invalid_persisted_data)?;
                Err(TaskRepositoryError::StatusConflict {
                    id: task_id,
                    expected,
                    actual,
                    requested,
                })
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let row = tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?;
                row.map(row_to_task).transpose()
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn list_by_student(&self, student_id: ProfileId) -> TaskRepositoryResult<Vec<Task>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let rows = tasks::table
                    .filter(tasks::student_id.eq(student_id.into_inner()))
                    .order((tasks::due_date.asc(), tasks::created_at.asc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)?;
                rows.into_iter().map(row_to_task).collect()
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn list_by_internships(
        &self,
        internship_ids: &[InternshipId],
    ) -> TaskRepositoryResult<Vec<Task>> {
        if internship_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids = raw_internship_ids(internship_ids);

        run_blocking(
            &self.pool,
            move |connection| {
                let rows = tasks::table
                    .filter(tasks::internship_id.eq_any(&raw_ids))
                    .order((tasks::due_date.asc(), tasks::created_at.asc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)?;
                rows.into_iter().map(row_to_task).collect()
            },
            TaskRepositoryError::persistence,
        )
        .await
    }

    async fn count_with_status(
        &self,
        internship_ids: &[InternshipId],
        status: TaskStatus,
    ) -> TaskRepositoryResult<usize> {
        if internship_ids.is_empty() {
            return Ok(0);
        }
        let raw_ids = raw_internship_ids(internship_ids);

        run_blocking(
            &self.pool,
            move |connection| {
                let count = tasks::table
                    .filter(tasks::internship_id.eq_any(&raw_ids))
                    .filter(tasks::status.eq(status.as_str()))
                    .count()
                    .get_result::<i64>(connection)
                    .map_err(TaskRepositoryError::persistence)?;
                usize::try_from(count).map_err(TaskRepositoryError::invalid_persisted_data)
            },
            TaskRepositoryError::persistence,
        )
        .await
    }
}

fn raw_internship_ids(ids: &[InternshipId]) -> Vec<uuid::Uuid> {
    ids.iter().map(|id| id.into_inner()).collect()
}

fn to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        internship_id: task.internship_id().into_inner(),
        student_id: task.student_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        submission_link: task.submission_link().map(str::to_owned),
        feedback: task.feedback().map(str::to_owned),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let status = TaskStatus::try_from(row.status.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        internship_id: InternshipId::from_uuid(row.internship_id),
        student_id: ProfileId::from_uuid(row.student_id),
        title: row.title,
        description: row.description,
        due_date: row.due_date,
        status,
        submission_link: row.submission_link,
        feedback: row.feedback,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
