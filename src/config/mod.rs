//! Application settings read from `.worker-tester/config.toml`.
//!
//! Every field is optional. A missing file means defaults; the
//! `WORKER_TESTER_ENDPOINT` variable overrides the endpoint either way.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://english-gemini-worker1.des9891sl.workers.dev/";

const DATA_DIR: &str = ".worker-tester";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_PATH_VAR: &str = "WORKER_TESTER_CONFIG";
const ENDPOINT_VAR: &str = "WORKER_TESTER_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_filter: "info".to_string(),
            window_width: 1000.0,
            window_height: 820.0,
        }
    }
}

impl AppConfig {
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        self
    }
}

/// Loads the config from the default location (or `WORKER_TESTER_CONFIG`).
pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(default_path);
    let config = load_from(&path)?;
    Ok(config.with_endpoint_override(std::env::var(ENDPOINT_VAR).ok()))
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    AppConfig::from_toml(&raw, path)
}

fn default_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DATA_DIR)
        .join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            "endpoint = \"http://localhost:8787/\"\nwindow_width = 640.0\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8787/");
        assert_eq!(config.window_width, 640.0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn bad_toml_reports_path() {
        let err = AppConfig::from_toml("endpoint = ", Path::new("/tmp/wt.toml")).unwrap_err();
        assert!(err.to_string().contains("/tmp/wt.toml"), "{err}");
    }

    #[test]
    fn endpoint_override_ignores_blank_values() {
        let config = AppConfig::default().with_endpoint_override(Some("  ".into()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        let config = AppConfig::default().with_endpoint_override(Some(" http://w.local/ ".into()));
        assert_eq!(config.endpoint, "http://w.local/");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = load_from(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
