//! Integration test utilities for the Conduit API
//!
//! This crate provides helpers for running end-to-end tests against
//! a real server bound to an ephemeral port over an in-memory database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
