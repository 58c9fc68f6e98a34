//! Monitoring module for dbconn.
//!
//! Only structured logging is provided; callers decide whether and when to
//! install it.

use serde::{Deserialize, Serialize};

pub mod logging;

pub use logging::init_logging;

/// Configuration for initializing logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Service name attached to the startup log line
    pub service_name: String,
    /// Log level filter (e.g., "info,dbconn_core=debug"); `RUST_LOG` wins when set
    pub log_filter: String,
    /// Emit JSON lines instead of human-readable output
    pub enable_json_logging: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            service_name: "dbconn".to_string(),
            log_filter: "info".to_string(),
            enable_json_logging: false,
        }
    }
}
