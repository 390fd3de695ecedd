//! Role capabilities and the single authorization check.

use crate::error::{MarketplaceError, MarketplaceResult};
use crate::profile::domain::{Profile, ProfileId, Role};
use std::fmt;
use tracing::warn;

/// Marketplace action subject to authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Edit one's own profile.
    EditProfile,
    /// Publish a new internship.
    PostInternship,
    /// Close an owned internship.
    CloseInternship,
    /// Apply to an open internship.
    Apply,
    /// Accept or reject a pending application.
    ReviewApplication,
    /// Assign a task to an accepted intern.
    AssignTask,
    /// Submit a deliverable for an assigned task.
    SubmitTask,
    /// Review a submitted task and mark it completed.
    CompleteTask,
}

impl Action {
    /// Returns the verb phrase used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EditProfile => "edit this profile",
            Self::PostInternship => "post internships",
            Self::CloseInternship => "close this internship",
            Self::Apply => "apply to internships",
            Self::ReviewApplication => "review this application",
            Self::AssignTask => "assign tasks for this internship",
            Self::SubmitTask => "submit this task",
            Self::CompleteTask => "complete this task",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STUDENT_ACTIONS: &[Action] = &[Action::EditProfile, Action::Apply, Action::SubmitTask];

const COMPANY_ACTIONS: &[Action] = &[
    Action::EditProfile,
    Action::PostInternship,
    Action::CloseInternship,
    Action::ReviewApplication,
    Action::AssignTask,
    Action::CompleteTask,
];

/// Set of actions a role may attempt.
pub trait Capabilities {
    /// Returns every action available to this role.
    fn capabilities(&self) -> &'static [Action];

    /// Returns whether the role may attempt `action`.
    fn permits(&self, action: Action) -> bool {
        self.capabilities().contains(&action)
    }
}

impl Capabilities for Role {
    fn capabilities(&self) -> &'static [Action] {
        match self {
            Self::Student => STUDENT_ACTIONS,
            Self::Company => COMPANY_ACTIONS,
        }
    }
}

/// Signed-in profile performing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Actor {
    id: ProfileId,
    role: Role,
}

impl Actor {
    /// Creates an actor from a profile identifier and its resolved role.
    #[must_use]
    pub const fn new(id: ProfileId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns the acting profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the acting role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Parties attached to the entity an action targets.
///
/// Company actions are checked against `company_id`, student actions
/// against `student_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ownership {
    company_id: Option<ProfileId>,
    student_id: Option<ProfileId>,
}

impl Ownership {
    /// Entity owned by a company with no student party.
    #[must_use]
    pub const fn company(company_id: ProfileId) -> Self {
        Self {
            company_id: Some(company_id),
            student_id: None,
        }
    }

    /// Entity whose subject is a student.
    #[must_use]
    pub const fn student(student_id: ProfileId) -> Self {
        Self {
            company_id: None,
            student_id: Some(student_id),
        }
    }

    /// Entity linking an owning company and a student.
    #[must_use]
    pub const fn shared(company_id: ProfileId, student_id: ProfileId) -> Self {
        Self {
            company_id: Some(company_id),
            student_id: Some(student_id),
        }
    }

    /// A profile, owned by the identity it belongs to.
    #[must_use]
    pub const fn profile(profile: &Profile) -> Self {
        match profile.role() {
            Role::Student => Self::student(profile.id()),
            Role::Company => Self::company(profile.id()),
        }
    }

    const fn party_for(self, role: Role) -> Option<ProfileId> {
        match role {
            Role::Student => self.student_id,
            Role::Company => self.company_id,
        }
    }
}

/// Checks that `actor` may perform `action` on an entity with `ownership`.
///
/// The actor's role must permit the action and the actor must be the party
/// of its role on the entity.
///
/// # Errors
///
/// Returns [`MarketplaceError::Unauthorized`] when either check fails.
pub fn authorize(actor: &Actor, action: Action, ownership: Ownership) -> MarketplaceResult<()> {
    let is_party = ownership.party_for(actor.role()) == Some(actor.id());
    if actor.role().permits(action) && is_party {
        return Ok(());
    }
    warn!(
        actor = %actor.id(),
        role = %actor.role(),
        action = %action,
        "authorization denied"
    );
    Err(MarketplaceError::Unauthorized {
        actor: actor.id(),
        action,
    })
}
