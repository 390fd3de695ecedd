//! internhub: internship marketplace core.
//!
//! Companies post internships, students browse and apply, companies review
//! applications and assign tasks to accepted interns, and students submit
//! task deliverables.
//!
//! # Architecture
//!
//! internhub follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`profile`], [`internship`], [`application`], [`task`]: the four stored
//!   entities, each with domain types, a repository port, and adapters
//! - [`lifecycle`]: application and task state machines with capability-based
//!   authorization
//! - [`identity`]: identity gateway port and an in-memory implementation
//! - [`views`]: student and company view models
//! - [`bootstrap`]: process-wide wiring and session role resolution

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod internship;
pub mod lifecycle;
pub mod profile;
pub mod store;
pub mod task;
pub mod telemetry;
pub mod views;
