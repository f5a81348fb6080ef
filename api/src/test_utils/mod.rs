//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The repository port is small and easier to fake than to script
//! - The in-memory repository keeps real state, so use case tests read like
//!   scenarios instead of expectation lists

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
