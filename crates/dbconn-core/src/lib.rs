//! dbconn Core
//!
//! The service that uses an injected database connection, plus a scripted
//! in-memory connection for demos and tests that want real state rather than
//! mock expectations.

pub mod config;
pub mod error;
pub mod memory;
pub mod service;

pub use config::InMemoryConnectionConfig;
pub use error::{ConfigError, ConfigResult};
pub use memory::{ConnectionStats, InMemoryConnection};
pub use service::{ConnectionUser, NO_CONNECTION};

pub use dbconn_interfaces::{DbConnection, DbConnectionRef};
