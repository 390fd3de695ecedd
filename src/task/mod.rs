//! Tasks assigned by companies to accepted interns.
//!
//! A task exists only for an (internship, student) pair whose application
//! was accepted. Its status moves along `pending -> submitted -> completed`,
//! written solely by the [`crate::lifecycle`] engine. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
