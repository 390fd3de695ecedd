//! Internship postings owned by companies.
//!
//! Companies post internships directly; nothing but the owner's explicit
//! close action ever changes a posting's status. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
