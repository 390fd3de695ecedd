//! User profiles for students and companies.
//!
//! A profile is created at sign-up, carries the immutable role of its owner,
//! and is self-edited by that owner only. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
