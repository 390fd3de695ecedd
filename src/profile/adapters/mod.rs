//! Adapter implementations for the profile repository port.

pub mod memory;
pub mod postgres;
