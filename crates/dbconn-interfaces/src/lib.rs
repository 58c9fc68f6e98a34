//! dbconn Interfaces
//!
//! This crate provides the capability trait a database driver must satisfy
//! to be used by the connection-using service in `dbconn-core`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Database connection capability
pub mod connection;

/// Re-export key types for convenient usage
pub use connection::{DbConnection, DbConnectionRef};
