//! Adapter implementations for the internship repository port.

pub mod memory;
pub mod postgres;
