//! Student view model.

use super::joins::{company_name, internships_by_id, profiles_by_id};
use super::notice::{Event, Notice};
use super::records::{
    ApplicationWithInternship, InternshipListing, StudentDashboard, TaskWithInternship,
};
use super::StudentMenu;
use crate::bootstrap::Marketplace;
use crate::error::{MarketplaceError, MarketplaceResult};
use crate::internship::domain::{InternshipFilter, InternshipId};
use crate::lifecycle::Actor;
use crate::profile::domain::{Profile, ProfileChanges};
use crate::task::domain::TaskId;
use minijinja::context;
use mockable::Clock;
use std::collections::HashSet;
use tracing::debug;

/// Actions and reads available to a signed-in student.
pub struct StudentView<'a, C>
where
    C: Clock + Send + Sync,
{
    marketplace: &'a Marketplace<C>,
    actor: Actor,
}

impl<'a, C> StudentView<'a, C>
where
    C: Clock + Send + Sync,
{
    pub(crate) const fn new(marketplace: &'a Marketplace<C>, actor: Actor) -> Self {
        Self { marketplace, actor }
    }

    /// Returns the acting student.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        self.actor
    }

    /// Returns the navigation entries.
    #[must_use]
    pub const fn menu(&self) -> [StudentMenu; 3] {
        StudentMenu::ALL
    }

    /// Lists open internships matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn browse(
        &self,
        filter: &InternshipFilter,
    ) -> Result<Vec<InternshipListing>, Notice> {
        self.listings(filter).await.map_err(|err| self.fail(&err))
    }

    /// Applies to an open internship.
    pub async fn apply(&self, internship_id: InternshipId) -> Notice {
        match self
            .marketplace
            .lifecycle()
            .apply(&self.actor, internship_id)
            .await
        {
            Ok(_) => {
                let title = self
                    .marketplace
                    .postings()
                    .find(internship_id)
                    .await
                    .map(|internship| internship.title().to_owned())
                    .unwrap_or_else(|_| String::from("the internship"));
                self.marketplace
                    .notices()
                    .success(Event::ApplicationSubmitted, context! { title => title })
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Returns the student's applications and tasks.
    ///
    /// # Errors
    ///
    /// Returns an error [`Notice`] when the store fails.
    pub async fn dashboard(&self) -> Result<StudentDashboard, Notice> {
        self.load_dashboard().await.map_err(|err| self.fail(&err))
    }

    /// Returns the student's own profile.
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

    /// Submits a deliverable link for an assigned task.
    pub async fn submit_task(&self, task_id: TaskId, submission_link: &str) -> Notice {
        match self
            .marketplace
            .lifecycle()
            .submit_task(&self.actor, task_id, submission_link)
            .await
        {
            Ok(task) => self
                .marketplace
                .notices()
                .success(Event::TaskSubmitted, context! { title => task.title() }),
            Err(err) => self.fail(&err),
        }
    }

    async fn listings(
        &self,
        filter: &InternshipFilter,
    ) -> MarketplaceResult<Vec<InternshipListing>> {
        let store = self.marketplace.store();
        let internships = self.marketplace.postings().browse(filter).await?;
        let companies = profiles_by_id(
            store,
            internships.iter().map(|internship| internship.company_id()),
        )
        .await?;
        let applied: HashSet<InternshipId> = store
            .applications()
            .list_by_student(self.actor.id())
            .await?
            .iter()
            .map(|application| application.internship_id())
            .collect();

        Ok(internships
            .into_iter()
            .map(|internship| InternshipListing {
                company_name: company_name(companies.get(&internship.company_id())),
                already_applied: applied.contains(&internship.id()),
                internship,
            })
            .collect())
    }

    async fn load_dashboard(&self) -> MarketplaceResult<StudentDashboard> {
        let store = self.marketplace.store();
        let applications = store.applications().list_by_student(self.actor.id()).await?;
        let tasks = store.tasks().list_by_student(self.actor.id()).await?;
        debug!(
            actor = %self.actor.id(),
            applications = applications.len(),
            tasks = tasks.len(),
            "loading student dashboard"
        );

        let internships = internships_by_id(
            store,
            applications
                .iter()
                .map(|application| application.internship_id())
                .chain(tasks.iter().map(|task| task.internship_id())),
        )
        .await?;
        let companies = profiles_by_id(
            store,
            internships.values().map(|internship| internship.company_id()),
        )
        .await?;

        let application_rows = applications
            .into_iter()
            .filter_map(|application| {
                let internship = internships.get(&application.internship_id())?.clone();
                Some(ApplicationWithInternship {
                    company_name: company_name(companies.get(&internship.company_id())),
                    application,
                    internship,
                })
            })
            .collect();
        let task_rows = tasks
            .into_iter()
            .filter_map(|task| {
                let internship_title = internships.get(&task.internship_id())?.title().to_owned();
                Some(TaskWithInternship {
                    task,
                    internship_title,
                })
            })
            .collect();

        Ok(StudentDashboard {
            applications: application_rows,
            tasks: task_rows,
        })
    }

    fn fail(&self, err: &MarketplaceError) -> Notice {
        debug!(actor = %self.actor.id(), error = %err, "student action failed");
        self.marketplace.notices().error(err)
    }
}
