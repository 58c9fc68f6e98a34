//! Scripted in-memory connection.
//!
//! [`InMemoryConnection`] answers queries from a table of canned responses and
//! keeps track of how it was used. It stands in for a real driver in demos and
//! in tests that assert on state rather than on mock expectations.

use dbconn_interfaces::DbConnection;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::InMemoryConnectionConfig;
use crate::error::ConfigResult;

/// Snapshot of how an [`InMemoryConnection`] has been used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionStats {
    /// Whether the last successful `open` has not been followed by `close`
    pub is_open: bool,
    /// Number of `open` calls, successful or not
    pub open_calls: usize,
    /// Number of `close` calls
    pub close_calls: usize,
    /// Every query executed, in order
    pub queries: Vec<String>,
}

/// Connection backed by canned responses
#[derive(Debug)]
pub struct InMemoryConnection {
    config: InMemoryConnectionConfig,
    stats: Mutex<ConnectionStats>,
}

impl InMemoryConnection {
    pub fn new(config: InMemoryConnectionConfig) -> Self {
        Self {
            config,
            stats: Mutex::new(ConnectionStats::default()),
        }
    }

    /// Build a connection from a YAML or JSON config file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> ConfigResult<Self> {
        Ok(Self::new(InMemoryConnectionConfig::from_file(path)?))
    }

    pub fn config(&self) -> &InMemoryConnectionConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Current usage statistics
    pub fn stats(&self) -> ConnectionStats {
        self.stats.lock().clone()
    }

    pub fn is_open(&self) -> bool {
        self.stats.lock().is_open
    }

    /// Forget recorded calls and mark the connection closed
    pub fn reset(&self) {
        *self.stats.lock() = ConnectionStats::default();
    }
}

impl Default for InMemoryConnection {
    fn default() -> Self {
        Self::new(InMemoryConnectionConfig::default())
    }
}

impl DbConnection for InMemoryConnection {
    fn open(&self) -> bool {
        let mut stats = self.stats.lock();
        stats.open_calls += 1;

        if !self.config.accept_open {
            warn!(name = %self.config.name, "In-memory connection refused to open");
            return false;
        }

        stats.is_open = true;
        info!(name = %self.config.name, "In-memory connection opened");
        true
    }

    fn close(&self) {
        let mut stats = self.stats.lock();
        stats.close_calls += 1;

        if stats.is_open {
            stats.is_open = false;
            info!(name = %self.config.name, "In-memory connection closed");
        } else {
            debug!(name = %self.config.name, "Close on a connection that is not open");
        }
    }

    fn execute_query(&self, query: &str) -> String {
        let mut stats = self.stats.lock();
        stats.queries.push(query.to_string());

        match self.config.responses.get(query) {
            Some(result) => result.clone(),
            None => {
                debug!(name = %self.config.name, query, "No canned response, using default result");
                self.config.default_result.clone()
            }
        }
    }
}
