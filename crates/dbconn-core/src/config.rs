//! Configuration for the scripted in-memory connection.
//!
//! A configuration can be built in code or loaded from YAML or JSON:
//!
//! ```yaml
//! name: users-db
//! accept_open: true
//! default_result: ""
//! responses:
//!   "SELECT * FROM users": "user data"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Settings for an [`InMemoryConnection`](crate::memory::InMemoryConnection)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryConnectionConfig {
    /// Name used in log output
    pub name: String,
    /// Whether `open` succeeds
    pub accept_open: bool,
    /// Result for queries with no canned response
    pub default_result: String,
    /// Canned responses keyed by exact query text
    pub responses: BTreeMap<String, String>,
}

impl Default for InMemoryConnectionConfig {
    fn default() -> Self {
        Self {
            name: "in-memory".to_string(),
            accept_open: true,
            default_result: String::new(),
            responses: BTreeMap::new(),
        }
    }
}

impl InMemoryConnectionConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a canned response for `query`, replacing any earlier one
    pub fn with_response(mut self, query: impl Into<String>, result: impl Into<String>) -> Self {
        self.responses.insert(query.into(), result.into());
        self
    }

    pub fn with_accept_open(mut self, accept_open: bool) -> Self {
        self.accept_open = accept_open;
        self
    }

    pub fn with_default_result(mut self, default_result: impl Into<String>) -> Self {
        self.default_result = default_result.into();
        self
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file, choosing the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        debug!(
            path = %path.display(),
            name = %config.name,
            responses = config.responses.len(),
            "Loaded in-memory connection config"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = InMemoryConnectionConfig::default();
        assert_eq!(config.name, "in-memory");
        assert!(config.accept_open);
        assert_eq!(config.default_result, "");
        assert!(config.responses.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let config = InMemoryConnectionConfig::new("users-db")
            .with_accept_open(false)
            .with_default_result("no rows")
            .with_response("SELECT * FROM users", "stale")
            .with_response("SELECT * FROM users", "user data");

        assert_eq!(config.name, "users-db");
        assert!(!config.accept_open);
        assert_eq!(config.default_result, "no rows");
        assert_eq!(config.responses.len(), 1);
        assert_eq!(config.responses["SELECT * FROM users"], "user data");
    }

    #[test]
    fn test_from_yaml_str_fills_missing_fields() {
        let config = InMemoryConnectionConfig::from_yaml_str(
            "name: users-db\nresponses:\n  \"SELECT * FROM users\": \"user data\"\n",
        )
        .unwrap();

        assert_eq!(config.name, "users-db");
        assert!(config.accept_open);
        assert_eq!(config.responses["SELECT * FROM users"], "user data");
    }

    #[test]
    fn test_from_json_str() {
        let config = InMemoryConnectionConfig::from_json_str(
            r#"{"accept_open": false, "default_result": "nothing"}"#,
        )
        .unwrap();

        assert_eq!(config.name, "in-memory");
        assert!(!config.accept_open);
        assert_eq!(config.default_result, "nothing");
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let err = InMemoryConnectionConfig::from_yaml_str("accept_open: [not, a, bool]").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut yaml = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(yaml, "name: from-yaml").unwrap();
        let config = InMemoryConnectionConfig::from_file(yaml.path()).unwrap();
        assert_eq!(config.name, "from-yaml");

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(json, r#"{{"name": "from-json"}}"#).unwrap();
        let config = InMemoryConnectionConfig::from_file(json.path()).unwrap();
        assert_eq!(config.name, "from-json");
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = InMemoryConnectionConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = InMemoryConnectionConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
