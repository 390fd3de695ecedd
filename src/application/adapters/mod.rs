//! Adapter implementations for the application repository port.

pub mod memory;
pub mod postgres;
