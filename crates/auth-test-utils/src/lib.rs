//! Test utilities for the GlobeTrotter auth service.
//!
//! Provides a server harness for spawning real API instances in E2E tests.

pub mod server_harness;

pub use server_harness::TestAuthServer;
