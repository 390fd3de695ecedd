//! Student applications to internships.
//!
//! An application links one internship and one student, at most once per
//! pair. Its status moves only along `pending -> accepted | rejected`;
//! the [`crate::lifecycle`] engine is its sole writer. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
