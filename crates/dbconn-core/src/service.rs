//! The connection-using service.
//!
//! [`ConnectionUser`] receives its connection at construction and forwards
//! every call to it. It shares the connection with whoever else holds the
//! handle and never opens, closes or replaces it on its own.

use dbconn_interfaces::DbConnectionRef;
use tracing::{debug, warn};

/// Result of [`ConnectionUser::use_connection`] when no connection was injected
pub const NO_CONNECTION: &str = "No connection";

/// Service that forwards open/close/query calls to an injected connection
#[derive(Clone, Default)]
pub struct ConnectionUser {
    connection: Option<DbConnectionRef>,
}

impl ConnectionUser {
    /// Create a service around a shared connection
    pub fn new(connection: DbConnectionRef) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// Create a service with no connection; queries yield [`NO_CONNECTION`]
    pub fn without_connection() -> Self {
        Self { connection: None }
    }

    pub fn has_connection(&self) -> bool {
        self.connection.is_some()
    }

    /// The injected connection, if any
    pub fn connection(&self) -> Option<&DbConnectionRef> {
        self.connection.as_ref()
    }

    /// Open the connection, returning the connection's own result.
    ///
    /// Without a connection there is nothing to open and the result is `false`.
    pub fn open_connection(&self) -> bool {
        match &self.connection {
            Some(connection) => {
                let opened = connection.open();
                debug!(opened, "Forwarded open to connection");
                opened
            }
            None => {
                warn!("open_connection called without a connection");
                false
            }
        }
    }

    /// Close the connection. Each call reaches the connection exactly once.
    pub fn close_connection(&self) {
        match &self.connection {
            Some(connection) => {
                connection.close();
                debug!("Forwarded close to connection");
            }
            None => warn!("close_connection called without a connection"),
        }
    }

    /// Run `query` on the connection and return its result unchanged.
    pub fn use_connection(&self, query: &str) -> String {
        let Some(connection) = &self.connection else {
            warn!(query, "use_connection called without a connection");
            return NO_CONNECTION.to_string();
        };

        let result = connection.execute_query(query);
        debug!(query, result_len = result.len(), "Forwarded query to connection");
        result
    }
}

impl From<DbConnectionRef> for ConnectionUser {
    fn from(connection: DbConnectionRef) -> Self {
        Self::new(connection)
    }
}

impl From<Option<DbConnectionRef>> for ConnectionUser {
    fn from(connection: Option<DbConnectionRef>) -> Self {
        Self { connection }
    }
}

impl std::fmt::Debug for ConnectionUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionUser")
            .field("has_connection", &self.has_connection())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbconn_test_utils::mocks::MockDbConnection;
    use mockall::predicate::eq;
    use std::sync::Arc;

    #[test]
    fn test_without_connection_defaults() {
        let user = ConnectionUser::without_connection();
        assert!(!user.has_connection());
        assert!(user.connection().is_none());
        assert_eq!(user.use_connection("SELECT 1"), NO_CONNECTION);
        assert!(!user.open_connection());
        // Nothing to close; must not panic
        user.close_connection();
    }

    #[test]
    fn test_default_has_no_connection() {
        let user = ConnectionUser::default();
        assert_eq!(user.use_connection(""), "No connection");
    }

    #[test]
    fn test_from_option() {
        let mut mock = MockDbConnection::new();
        mock.expect_execute_query()
            .with(eq("ping"))
            .times(1)
            .return_const("pong".to_string());

        let user = ConnectionUser::from(Some(Arc::new(mock) as DbConnectionRef));
        assert!(user.has_connection());
        assert_eq!(user.use_connection("ping"), "pong");

        let user = ConnectionUser::from(None::<DbConnectionRef>);
        assert!(!user.has_connection());
    }

    #[test]
    fn test_clones_share_the_connection() {
        let mut mock = MockDbConnection::new();
        mock.expect_close().times(2).return_const(());

        let connection: DbConnectionRef = Arc::new(mock);
        let user = ConnectionUser::new(connection.clone());
        let copy = user.clone();

        user.close_connection();
        copy.close_connection();

        // The caller, the service and its clone all hold the same connection
        assert_eq!(Arc::strong_count(&connection), 3);
        assert!(Arc::ptr_eq(user.connection().unwrap(), &connection));
    }

    #[test]
    fn test_debug_does_not_require_debug_connection() {
        let user = ConnectionUser::without_connection();
        assert_eq!(format!("{user:?}"), "ConnectionUser { has_connection: false }");
    }
}
