//! Database connection capability
//!
//! This module defines the contract between code that needs a database and
//! the drivers (real or test doubles) that provide one.

use std::sync::Arc;

/// Contract for a connection to a data store
///
/// Methods take `&self` so a single connection can sit behind a shared
/// [`DbConnectionRef`]; implementations that track state use interior
/// mutability.
pub trait DbConnection: Send + Sync {
    /// Contract: Attempts to establish the connection.
    /// - Returns: `true` if the connection is usable afterwards, `false` otherwise.
    /// - Side effects of a failed attempt are left to the implementation.
    fn open(&self) -> bool;

    /// Contract: Releases the connection.
    /// - Whether repeated calls are harmless is left to the implementation.
    fn close(&self);

    /// Contract: Submits a query and returns its result.
    /// - `query`: Query text, passed through untouched (the empty string included).
    /// - Returns: The result as produced by the implementation. Malformed queries
    ///   are the implementation's concern and are not reported separately.
    fn execute_query(&self, query: &str) -> String;
}

/// Thread-safe, reference-counted handle to a database connection
pub type DbConnectionRef = Arc<dyn DbConnection>;

impl<T: DbConnection + ?Sized> DbConnection for Arc<T> {
    fn open(&self) -> bool {
        (**self).open()
    }

    fn close(&self) {
        (**self).close()
    }

    fn execute_query(&self, query: &str) -> String {
        (**self).execute_query(query)
    }
}
