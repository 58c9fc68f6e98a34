//! # dbconn
//!
//! A database connection capability and a service that uses an injected,
//! shared connection.
//!
//! ```rust
//! use std::sync::Arc;
//! use dbconn::{ConnectionUser, InMemoryConnection, InMemoryConnectionConfig};
//!
//! let conn = Arc::new(InMemoryConnection::new(
//!     InMemoryConnectionConfig::new("users-db")
//!         .with_response("SELECT * FROM users", "user data"),
//! ));
//! let service = ConnectionUser::new(conn.clone());
//!
//! assert!(service.open_connection());
//! assert_eq!(service.use_connection("SELECT * FROM users"), "user data");
//! service.close_connection();
//! assert!(!conn.is_open());
//! ```

pub use dbconn_core::{
    config, memory, service, ConfigError, ConfigResult, ConnectionStats, ConnectionUser,
    InMemoryConnection, InMemoryConnectionConfig, NO_CONNECTION,
};
pub use dbconn_interfaces::{DbConnection, DbConnectionRef};
pub use dbconn_monitoring::{init_logging, MonitoringConfig};
