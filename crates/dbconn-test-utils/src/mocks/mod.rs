//! Mock implementations of the dbconn interfaces.
//!
//! These mocks let tests drive the connection-using service in isolation and
//! assert exactly how it talks to its connection.

pub mod connection;

pub use connection::*;
