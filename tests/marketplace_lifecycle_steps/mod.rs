//! Step definitions for marketplace lifecycle scenarios.

mod given;
mod then;
mod when;
pub mod world;
