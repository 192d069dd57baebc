//! Common test utilities for API integration tests
//!
//! Shared fixtures (an in-memory store, sample rows) and helpers for
//! database-backed and HTTP-level tests.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
