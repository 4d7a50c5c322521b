//! Shared test utilities for course registration tests
//!
//! Mocks and fixtures used by unit tests and the integration tests under `tests/`.

#[cfg(any(test, debug_assertions))]
pub mod mocks;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;
