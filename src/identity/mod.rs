//! Identity gateway: sign-up, sign-in, and sign-out.
//!
//! Authentication is delegated to an identity provider behind the
//! [`ports::IdentityGateway`] port. An identity's identifier is the
//! identifier of its profile. [`adapters::memory`] is a self-contained
//! provider for tests and local runs.

pub mod adapters;
pub mod domain;
pub mod ports;
