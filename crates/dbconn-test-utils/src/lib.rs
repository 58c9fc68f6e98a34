//! Testing utilities for dbconn.
//!
//! This crate provides a `mockall` mock of the database connection
//! capability, factory helpers that pre-program common behaviours, and a
//! tracing setup for tests.

pub mod mocks;
pub mod tracing_setup;

/// Re-export commonly used types for convenience
pub use mockall;

pub use mocks::{
    create_failing_mock_connection, create_mock_connection, create_query_mock_connection,
    MockDbConnection,
};
pub use tracing_setup::init_test_tracing;
