//! Integration test utilities for the bulk messaging relay
//!
//! This crate provides helpers for running end-to-end tests against the HTTP
//! surface, either over in-memory repositories and a scripted messaging
//! gateway, or against PostgreSQL and a mocked provider.

pub mod fakes;
pub mod fixtures;
pub mod helpers;

pub use fakes::*;
pub use fixtures::*;
pub use helpers::*;
