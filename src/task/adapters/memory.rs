//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::internship::domain::InternshipId;
use crate::profile::domain::ProfileId;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_by_due_date(
        &self,
        predicate: impl Fn(&Task) -> bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        let mut matching: Vec<Task> = tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect();
        matching.sort_by_key(|task| (task.due_date(), task.created_at()));
        Ok(matching)
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_progress(&self, task: &Task, expected: TaskStatus) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_error)?;
        let stored = tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if stored.status() != expected {
            return Err(TaskRepositoryError::StatusConflict {
                id: task.id(),
                expected,
                actual: stored.status(),
                requested: task.status(),
            });
        }
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_by_student(&self, student_id: ProfileId) -> TaskRepositoryResult<Vec<Task>> {
        self.collect_by_due_date(|task| task.student_id() == student_id)
    }

    async fn list_by_internships(
        &self,
        internship_ids: &[InternshipId],
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.collect_by_due_date(|task| internship_ids.contains(&task.internship_id()))
    }

    async fn count_with_status(
        &self,
        internship_ids: &[InternshipId],
        status: TaskStatus,
    ) -> TaskRepositoryResult<usize> {
        let tasks = self.tasks.read().map_err(lock_error)?;
        Ok(tasks
            .values()
            .filter(|task| {
                task.status() == status && internship_ids.contains(&task.internship_id())
            })
            .count())
    }
}
