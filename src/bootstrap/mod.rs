//! Process-wide wiring and session role resolution.
//!
//! [`Marketplace`] owns the single [`Store`](crate::store::Store) and every
//! service built on it. [`SessionManager`] turns identity sign-ins into
//! role-bearing [`Session`]s that open the matching view.

mod marketplace;
mod session;

#[cfg(test)]
mod tests;

pub use marketplace::{Marketplace, RoleView};
pub use session::{Session, SessionError, SessionManager};
