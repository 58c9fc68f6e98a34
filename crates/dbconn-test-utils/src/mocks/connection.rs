//! Mock implementation of the DbConnection trait.

use dbconn_interfaces::DbConnection;
use mockall::mock;
use mockall::predicate::*;

// Generate the mock implementation for DbConnection
mock! {
    pub DbConnection {}

    impl DbConnection for DbConnection {
        fn open(&self) -> bool;
        fn close(&self);
        fn execute_query(&self, query: &str) -> String;
    }
}

/// Creates a mock connection that opens successfully, closes quietly and
/// answers every query with an empty string.
pub fn create_mock_connection() -> MockDbConnection {
    let mut mock = MockDbConnection::new();

    mock.expect_open().return_const(true);
    mock.expect_close().return_const(());
    mock.expect_execute_query().returning(|_| String::new());

    mock
}

/// Creates a mock connection whose `open` always fails.
pub fn create_failing_mock_connection() -> MockDbConnection {
    let mut mock = MockDbConnection::new();

    mock.expect_open().return_const(false);
    mock.expect_close().return_const(());

    mock
}

/// Creates a mock connection that answers `query` with `result`, exactly once.
pub fn create_query_mock_connection(query: &str, result: &str) -> MockDbConnection {
    let mut mock = MockDbConnection::new();

    mock.expect_execute_query()
        .with(eq(query.to_string()))
        .times(1)
        .return_const(result.to_string());

    mock
}
