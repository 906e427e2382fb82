//! Test utilities
//!
//! In-memory port implementations and fixtures for service tests.
//! Mocks are written by hand: the ports take `&str` arguments and async
//! methods, and a plain struct behind a `RwLock` keeps assertions simple.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
