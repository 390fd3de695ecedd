//! Application and task transitions with their creation guards.

use crate::application::domain::{Application, ApplicationId, ApplicationStatus};
use crate::error::{Entity, MarketplaceError, MarketplaceResult};
use crate::internship::domain::{Internship, InternshipId};
use crate::lifecycle::{Action, Actor, Ownership, authorize};
use crate::profile::domain::Role;
use crate::store::Store;
use crate::task::domain::{NewTask, Task, TaskId, TaskStatus};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Validates and applies application and task transitions.
#[derive(Clone)]
pub struct LifecycleEngine<C>
where
    C: Clock + Send + Sync,
{
    store: Store,
    clock: Arc<C>,
}

impl<C> LifecycleEngine<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle engine.
    #[must_use]
    pub const fn new(store: Store, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Records a pending application from the acting student.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Unauthorized`] for non-student actors or
    /// profiles,
    /// [`MarketplaceError::NotFound`] when the student profile or the
    /// internship is missing, [`MarketplaceError::PreconditionFailed`] when
    /// the internship is closed, and
    /// [`MarketplaceError::DuplicateApplication`] when the student already
    /// applied.
    pub async fn apply(
        &self,
        actor: &Actor,
        internship_id: InternshipId,
    ) -> MarketplaceResult<Application> {
        authorize(actor, Action::Apply, Ownership::student(actor.id()))?;
        let profile = self
            .store
            .profiles()
            .find_by_id(actor.id())
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Profile, actor.id()))?;
        if profile.role() != Role::Student {
            warn!(
                actor = %actor.id(),
                stored_role = %profile.role(),
                "applicant profile is not a student"
            );
            return Err(MarketplaceError::Unauthorized {
                actor: actor.id(),
                action: Action::Apply,
            });
        }

        let internship = self.internship(internship_id).await?;
        if !internship.status().is_open() {
            return Err(MarketplaceError::PreconditionFailed(format!(
                "internship {internship_id} is {} and no longer accepts applications",
                internship.status()
            )));
        }

        let already_applied = self
            .store
            .applications()
            .find_by_pair(internship_id, actor.id())
            .await?
            .is_some();
        if already_applied {
            warn!(
                internship_id = %internship_id,
                actor = %actor.id(),
                "duplicate application rejected"
            );
            return Err(MarketplaceError::DuplicateApplication {
                internship_id,
                student_id: actor.id(),
            });
        }

        let application = Application::submit(internship_id, actor.id(), &*self.clock);
        self.store.applications().store(&application).await?;
        info!(
            application_id = %application.id(),
            internship_id = %internship_id,
            actor = %actor.id(),
            "application submitted"
        );
        Ok(application)
    }

    /// Accepts a pending application on an internship the actor owns.
    ///
    /// # Errors
    ///
    /// See [`Self::transition_application`].
    pub async fn accept(
        &self,
        actor: &Actor,
        application_id: ApplicationId,
    ) -> MarketplaceResult<Application> {
        self.transition_application(actor, application_id, ApplicationStatus::Accepted)
            .await
    }

    /// Rejects a pending application on an internship the actor owns.
    ///
    /// # Errors
    ///
    /// See [`Self::transition_application`].
    pub async fn reject(
        &self,
        actor: &Actor,
        application_id: ApplicationId,
    ) -> MarketplaceResult<Application> {
        self.transition_application(actor, application_id, ApplicationStatus::Rejected)
            .await
    }

    /// Moves an application to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] when the application or its
    /// internship is missing, [`MarketplaceError::Unauthorized`] unless the
    /// actor owns the internship, and [`MarketplaceError::InvalidTransition`]
    /// when `target` is unreachable or the stored status changed
    /// concurrently.
    pub async fn transition_application(
        &self,
        actor: &Actor,
        application_id: ApplicationId,
        target: ApplicationStatus,
    ) -> MarketplaceResult<Application> {
        let mut application = self
            .store
            .applications()
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Application, application_id))?;
        let internship = self.internship(application.internship_id()).await?;
        authorize(
            actor,
            Action::ReviewApplication,
            Ownership::shared(internship.company_id(), application.student_id()),
        )?;

        let previous = application
            .transition_to(target, &*self.clock)
            .map_err(MarketplaceError::from)
            .inspect_err(|err| {
                warn!(
                    application_id = %application_id,
                    actor = %actor.id(),
                    error = %err,
                    "application transition rejected"
                );
            })?;
        self.store
            .applications()
            .update_status(&application, previous)
            .await?;
        info!(
            application_id = %application_id,
            actor = %actor.id(),
            from = %previous,
            to = %target,
            "application status changed"
        );
        Ok(application)
    }

    /// Creates a pending task for an accepted intern.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] when the internship is
    /// missing, [`MarketplaceError::Unauthorized`] unless the actor owns it,
    /// [`MarketplaceError::PreconditionFailed`] unless the student's
    /// application to it is accepted, and [`MarketplaceError::Validation`]
    /// for a blank title.
    pub async fn assign_task(&self, actor: &Actor, new_task: NewTask) -> MarketplaceResult<Task> {
        let internship = self.internship(new_task.internship_id()).await?;
        authorize(
            actor,
            Action::AssignTask,
            Ownership::shared(internship.company_id(), new_task.student_id()),
        )?;

        let application = self
            .store
            .applications()
            .find_by_pair(new_task.internship_id(), new_task.student_id())
            .await?;
        if application.map(|found| found.status()) != Some(ApplicationStatus::Accepted) {
            warn!(
                internship_id = %new_task.internship_id(),
                student_id = %new_task.student_id(),
                actor = %actor.id(),
                "task assignment without accepted application"
            );
            return Err(MarketplaceError::PreconditionFailed(format!(
                "student {} has no accepted application for internship {}",
                new_task.student_id(),
                new_task.internship_id()
            )));
        }

        let task = Task::assign(new_task, &*self.clock)?;
        self.store.tasks().store(&task).await?;
        info!(
            task_id = %task.id(),
            internship_id = %task.internship_id(),
            actor = %actor.id(),
            "task assigned"
        );
        Ok(task)
    }

    /// Records the assigned student's deliverable.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] for an unknown task,
    /// [`MarketplaceError::Unauthorized`] unless the actor is the assigned
    /// student, [`MarketplaceError::Validation`] for a blank link, and
    /// [`MarketplaceError::InvalidTransition`] unless the task is pending.
    pub async fn submit_task(
        &self,
        actor: &Actor,
        task_id: TaskId,
        submission_link: &str,
    ) -> MarketplaceResult<Task> {
        let mut task = self.task(task_id).await?;
        authorize(actor, Action::SubmitTask, Ownership::student(task.student_id()))?;

        let previous = task
            .submit(submission_link, &*self.clock)
            .map_err(MarketplaceError::from)
            .inspect_err(|err| {
                warn!(
                    task_id = %task_id,
                    actor = %actor.id(),
                    error = %err,
                    "task submission rejected"
                );
            })?;
        self.persist_progress(actor, &task, previous).await?;
        Ok(task)
    }

    /// Marks a submitted task completed with optional feedback.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::NotFound`] for an unknown task or
    /// internship, [`MarketplaceError::Unauthorized`] unless the actor owns
    /// the internship, and [`MarketplaceError::InvalidTransition`] unless the
    /// task is submitted.
    pub async fn complete_task(
        &self,
        actor: &Actor,
        task_id: TaskId,
        feedback: Option<&str>,
    ) -> MarketplaceResult<Task> {
        let mut task = self.task(task_id).await?;
        let internship = self.internship(task.internship_id()).await?;
        authorize(
            actor,
            Action::CompleteTask,
            Ownership::shared(internship.company_id(), task.student_id()),
        )?;

        let previous = task
            .complete(feedback, &*self.clock)
            .map_err(MarketplaceError::from)
            .inspect_err(|err| {
                warn!(
                    task_id = %task_id,
                    actor = %actor.id(),
                    error = %err,
                    "task completion rejected"
                );
            })?;
        self.persist_progress(actor, &task, previous).await?;
        Ok(task)
    }

    async fn persist_progress(
        &self,
        actor: &Actor,
        task: &Task,
        previous: TaskStatus,
    ) -> MarketplaceResult<()> {
        self.store.tasks().update_progress(task, previous).await?;
        info!(
            task_id = %task.id(),
            actor = %actor.id(),
            from = %previous,
            to = %task.status(),
            "task status changed"
        );
        Ok(())
    }

    async fn internship(&self, id: InternshipId) -> MarketplaceResult<Internship> {
        self.store
            .internships()
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Internship, id))
    }

    async fn task(&self, id: TaskId) -> MarketplaceResult<Task> {
        self.store
            .tasks()
            .find_by_id(id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Task, id))
    }
}
