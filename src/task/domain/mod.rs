//! Domain model for intern tasks.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
