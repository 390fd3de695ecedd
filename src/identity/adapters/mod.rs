//! Adapter implementations for the identity gateway port.

pub mod memory;
