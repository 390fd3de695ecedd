//! Company view model.
//!
//! Every read is restricted to internships the signed-in company owns.

use super::CompanyMenu;
use super::joins::profiles_by_id;
use super::notice::{Event, Notice};
use super::records::{
    ApplicantCard, ApplicationWithApplicant, CompanyDashboard, TaskForm, TaskWithInternship,
};
use crate::application::domain::{Application, ApplicationId, ApplicationStatus};
use crate::bootstrap::Marketplace;
use crate::error::{Entity, MarketplaceError, MarketplaceResult};
use crate::internship::domain::{Internship, InternshipDraft, InternshipId};
use crate::lifecycle::Actor;
use crate::profile::domain::{Profile, ProfileChanges};
use crate::task::domain::{NewTask, TaskId, TaskStatus};
use minijinja::context;
use mockable::Clock;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Actions and reads available to a signed-in company.
pub struct CompanyView<'a, C>
where
    C: Clock + Send + Sync,
{
    marketplace: &'a Marketplace<C>,
    actor: Actor,
}

impl<'a, C> CompanyView<'a, C>
where
    C: Clock + Send + Sync,
{
    pub(crate) const fn new(marketplace: &'a Marketplace<C>, actor: Actor) -> Self {
        Self { marketplace, actor }
    }

    /// Returns the acting company.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        self.actor
    }

    /// Returns the navigation entries.
    #[must_use]
    pub const fn menu(&self) -> [CompanyMenu; 4] {
        CompanyMenu::ALL
    }

    /// Publishes a new internship.
    pub async fn post_internship(&self, draft: &InternshipDraft) -> Notice {
        match self.marketplace.postings().post(&self.actor, draft).await {
            Ok(internship) => self.marketplace.notices().success(
                Event::InternshipPosted,
                context! { title => internship.title() },
            ),
            Err(err) => self.fail(&err),
        }
    }

    /// Closes an owned internship to new applications.
    pub async fn close_internship(&self, internship_id: InternshipId) -> Notice {
        match self
            .marketplace
            .postings()
            .close(&self.actor, internship_id)
            .await
        {
            Ok(internship) => self.marketplace.notices().success(
                Event::InternshipClosed,
                context! { title => internship.title() },
            ),
            Err(err) => self.fail(&err),
        }
    }

    /// Lists owned internships, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn internships(&self) -> Result<Vec<Internship>, Notice> {
        self.marketplace
            .postings()
            .list_owned(&self.actor)
            .await
            .map_err(|err| self.fail(&err))
    }

    /// Lists applications to owned internships with applicant details.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn applications(&self) -> Result<Vec<ApplicationWithApplicant>, Notice> {
        self.load_applications(None)
            .await
            .map_err(|err| self.fail(&err))
    }

    /// Lists accepted interns, the candidates for task assignment.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn accepted_interns(&self) -> Result<Vec<ApplicationWithApplicant>, Notice> {
        self.load_applications(Some(ApplicationStatus::Accepted))
            .await
            .map_err(|err| self.fail(&err))
    }

    /// Accepts a pending application.
    pub async fn accept(&self, application_id: ApplicationId) -> Notice {
        let outcome = self
            .marketplace
            .lifecycle()
            .accept(&self.actor, application_id)
            .await;
        self.review_notice(outcome, Event::ApplicationAccepted).await
    }

    /// Rejects a pending application.
    pub async fn reject(&self, application_id: ApplicationId) -> Notice {
        let outcome = self
            .marketplace
            .lifecycle()
            .reject(&self.actor, application_id)
            .await;
        self.review_notice(outcome, Event::ApplicationRejected).await
    }

    /// Assigns a task to the intern behind an accepted application.
    pub async fn assign_task(&self, application_id: ApplicationId, form: TaskForm) -> Notice {
        let application = match self.application(application_id).await {
            Ok(application) => application,
            Err(err) => return self.fail(&err),
        };
        let new_task = NewTask::new(
            application.internship_id(),
            application.student_id(),
            form.title,
            form.due_date,
        )
        .with_description(form.description);

        match self
            .marketplace
            .lifecycle()
            .assign_task(&self.actor, new_task)
            .await
        {
            Ok(task) => self.marketplace.notices().success(
                Event::TaskAssigned,
                context! {
                    title => task.title(),
                    due_date => task.due_date().to_string(),
                },
            ),
            Err(err) => self.fail(&err),
        }
    }

    /// Completes review of a submitted task.
    pub async fn review_task(&self, task_id: TaskId, feedback: Option<&str>) -> Notice {
        match self
            .marketplace
            .lifecycle()
            .complete_task(&self.actor, task_id, feedback)
            .await
        {
            Ok(task) => self
                .marketplace
                .notices()
                .success(Event::TaskCompleted, context! { title => task.title() }),
            Err(err) => self.fail(&err),
        }
    }

    /// Lists tasks on owned internships.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn tasks(&self) -> Result<Vec<TaskWithInternship>, Notice> {
        self.load_tasks().await.map_err(|err| self.fail(&err))
    }

    /// Returns counts over owned internships.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn dashboard(&self) -> Result<CompanyDashboard, Notice> {
        self.load_dashboard().await.map_err(|err| self.fail(&err))
    }

    /// Returns the company's own profile.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the profile cannot be loaded.
    pub async fn profile(&self) -> Result<Profile, Notice> {
        self.marketplace
            .profiles()
            .find(self.actor.id())
            .await
            .map_err(|err| self.fail(&err))
    }

    /// Saves a profile self-edit.
    pub async fn update_profile(&self, changes: ProfileChanges) -> Notice {
        match self
            .marketplace
            .profiles()
            .update(&self.actor, self.actor.id(), changes)
            .await
        {
            Ok(_) => self
                .marketplace
                .notices()
                .success(Event::ProfileUpdated, context! {}),
            Err(err) => self.fail(&err),
        }
    }

    async fn owned(&self) -> MarketplaceResult<Vec<Internship>> {
        self.marketplace.postings().list_owned(&self.actor).await
    }

    async fn application(&self, application_id: ApplicationId) -> MarketplaceResult<Application> {
        self.marketplace
            .store()
            .applications()
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found(Entity::Application, application_id))
    }

    async fn review_notice(
        &self,
        outcome: MarketplaceResult<Application>,
        event: Event,
    ) -> Notice {
        let application = match outcome {
            Ok(application) => application,
            Err(err) => return self.fail(&err),
        };
        let applicant = match self
            .marketplace
            .store()
            .profiles()
            .find_by_id(application.student_id())
            .await
        {
            Ok(Some(profile)) => profile.full_name().to_owned(),
            Ok(None) => String::from("the applicant"),
            Err(err) => {
                warn!(
                    application_id = %application.id(),
                    error = %err,
                    "applicant lookup failed after review"
                );
                String::from("the applicant")
            }
        };
        self.marketplace
            .notices()
            .success(event, context! { applicant => applicant })
    }

    async fn load_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> MarketplaceResult<Vec<ApplicationWithApplicant>> {
        let store = self.marketplace.store();
        let owned = self.owned().await?;
        let ids: Vec<InternshipId> = owned.iter().map(Internship::id).collect();
        let applications: Vec<Application> = store
            .applications()
            .list_by_internships(&ids)
            .await?
            .into_iter()
            .filter(|application| status.is_none_or(|wanted| application.status() == wanted))
            .collect();
        let applicants = profiles_by_id(
            store,
            applications
                .iter()
                .map(|application| application.student_id()),
        )
        .await?;

        Ok(applications
            .into_iter()
            .filter_map(|application| {
                let internship_title = owned
                    .iter()
                    .find(|internship| internship.id() == application.internship_id())?
                    .title()
                    .to_owned();
                let applicant = ApplicantCard::from(applicants.get(&application.student_id())?);
                Some(ApplicationWithApplicant {
                    application,
                    internship_title,
                    applicant,
                })
            })
            .collect())
    }

    async fn load_tasks(&self) -> MarketplaceResult<Vec<TaskWithInternship>> {
        let store = self.marketplace.store();
        let owned = self.owned().await?;
        let ids: Vec<InternshipId> = owned.iter().map(Internship::id).collect();
        let tasks = store.tasks().list_by_internships(&ids).await?;
        let titles: HashMap<InternshipId, &str> = owned
            .iter()
            .map(|internship| (internship.id(), internship.title()))
            .collect();

        Ok(tasks
            .into_iter()
            .filter_map(|task| {
                let internship_title = (*titles.get(&task.internship_id())?).to_owned();
                Some(TaskWithInternship {
                    task,
                    internship_title,
                })
            })
            .collect())
    }

    async fn load_dashboard(&self) -> MarketplaceResult<CompanyDashboard> {
        let store = self.marketplace.store();
        let owned = self.owned().await?;
        let ids: Vec<InternshipId> = owned.iter().map(Internship::id).collect();
        let dashboard = CompanyDashboard {
            open_internships: owned
                .iter()
                .filter(|internship| internship.status().is_open())
                .count(),
            pending_applications: store
                .applications()
                .count_with_status(&ids, ApplicationStatus::Pending)
                .await?,
            pending_tasks: store
                .tasks()
                .count_with_status(&ids, TaskStatus::Pending)
                .await?,
        };
        debug!(
            actor = %self.actor.id(),
            open = dashboard.open_internships,
            pending_applications = dashboard.pending_applications,
            pending_tasks = dashboard.pending_tasks,
            "loaded company dashboard"
        );
        Ok(dashboard)
    }

    fn fail(&self, err: &MarketplaceError) -> Notice {
        debug!(actor = %self.actor.id(), error = %err, "company action failed");
        self.marketplace.notices().error(err)
    }
}
