//! Unit tests for session wiring.
