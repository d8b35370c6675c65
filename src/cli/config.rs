//! Service configuration file
//!
//! ```json
//! {
//!   "data_dir": "./data",
//!   "host": "0.0.0.0",
//!   "port": 3000,
//!   "cors_origins": [],
//!   "fallback": { "latitude": 28.6139, "longitude": 77.2090 }
//! }
//! ```
//!
//! Every field is optional. Without `data_dir` the server keeps schools in
//! memory only.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::{log_event, Event};
use crate::storage::{FileStore, MemoryStore, SchoolStore};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./geoschool.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory; absent means an in-memory store
    #[serde(default)]
    pub data_dir: Option<String>,

    #[serde(flatten)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_PATH`] if it exists, or
    /// fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&content)?;

        let path_str = path.display().to_string();
        log_event(Event::ConfigLoaded, &[("path", path_str.as_str())]);

        Ok(config)
    }

    fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if !self.http.fallback.is_valid() {
            return Err(CliError::config_error(format!(
                "fallback {} is outside the valid coordinate range",
                self.http.fallback
            )));
        }

        if matches!(self.data_dir.as_deref(), Some(dir) if dir.trim().is_empty()) {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        Ok(())
    }

    /// Data directory as a path, if configured
    pub fn data_path(&self) -> Option<&Path> {
        self.data_dir.as_deref().map(Path::new)
    }

    /// Data directory, or a config error naming `command`
    pub fn require_data_path(&self, command: &str) -> CliResult<&Path> {
        self.data_path().ok_or_else(|| {
            CliError::config_error(format!("data_dir is required for '{}'", command))
        })
    }

    /// Open the configured store
    pub fn open_store(&self) -> CliResult<Arc<dyn SchoolStore>> {
        match self.data_path() {
            Some(dir) => Ok(Arc::new(FileStore::open(dir)?)),
            None => Ok(Arc::new(MemoryStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::school::Coordinate;

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::parse("{}").unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.fallback, Coordinate::FALLBACK);
    }

    #[test]
    fn test_flattened_http_fields() {
        let config = Config::parse(
            r#"{"data_dir": "/tmp/schools", "port": 8081,
                "fallback": {"latitude": 19.076, "longitude": 72.8777}}"#,
        )
        .unwrap();
        assert_eq!(config.data_path(), Some(Path::new("/tmp/schools")));
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.http.fallback, Coordinate::new(19.076, 72.8777));
    }

    #[test]
    fn test_invalid_fallback_rejected() {
        let err = Config::parse(r#"{"fallback": {"latitude": 95.0, "longitude": 0.0}}"#)
            .unwrap_err();
        assert!(err.message().contains("fallback"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(Config::parse("{ port: }").is_err());
    }

    #[test]
    fn test_require_data_path() {
        let config = Config::default();
        assert!(config.require_data_path("add").is_err());
    }
}
