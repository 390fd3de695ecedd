//! Lifecycle engine for applications and tasks.
//!
//! The engine is the only writer of application and task status. Every
//! entry point authorizes the actor through [`authorize`], validates the
//! transition on the domain aggregate, and persists it with a conditional
//! write that fails if the stored status moved in the meantime.

mod capability;
mod engine;

pub use capability::{Action, Actor, Capabilities, Ownership, authorize};
pub use engine::LifecycleEngine;

#[cfg(test)]
mod tests;
