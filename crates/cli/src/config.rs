// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `config.toml` under the user config directory
//! (or the path given with `--config`) and includes:
//! - `data_dir`: where progress, the pending queue and the session live
//! - `[remote]`: backend base URL and request timeout
//!
//! Values resolve with precedence: CLI flag > environment > file > default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "parley";
const CONFIG_FILE_NAME: &str = "config.toml";
const FALLBACK_DATA_DIR: &str = ".parley";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for local data. Defaults to `$XDG_DATA_HOME/parley`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the backend; the API lives under `<url>/api`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    /// Returns an error message if the URL is not http(s).
    pub fn validate_url(&self) -> Option<String> {
        let url = self.url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            return None;
        }
        Some(format!(
            "invalid remote URL '{}': must start with http:// or https://",
            self.url
        ))
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content)
    }

    /// Load from an explicit path (which must exist) or the default one.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            ))),
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Config::default()),
            },
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        if let Some(msg) = config.remote.validate_url() {
            return Err(Error::Config(msg));
        }
        Ok(config)
    }
}

/// Values that may override the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub remote_url: Option<String>,
    pub offline: Option<bool>,
}

impl Overrides {
    /// Overrides taken from `PARLEY_*` environment variables.
    pub fn from_env() -> Self {
        Overrides {
            data_dir: env::data_dir(),
            remote_url: env::remote_url(),
            offline: env::offline(),
        }
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub remote_url: String,
    pub timeout: Duration,
    pub offline: bool,
}

impl Settings {
    /// Combine the file config with environment and CLI overrides.
    pub fn resolve(config: Config, env: &Overrides, cli: &Overrides) -> Result<Self> {
        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| env.data_dir.clone())
            .or(config.data_dir)
            .unwrap_or_else(default_data_dir);

        let remote = RemoteConfig {
            url: cli
                .remote_url
                .clone()
                .or_else(|| env.remote_url.clone())
                .unwrap_or(config.remote.url),
            timeout_secs: config.remote.timeout_secs,
        };
        if let Some(msg) = remote.validate_url() {
            return Err(Error::Config(msg));
        }
        if remote.timeout_secs == 0 {
            return Err(Error::Config("remote.timeout_secs must be at least 1".into()));
        }

        Ok(Settings {
            data_dir,
            remote_url: remote.url.trim().to_string(),
            timeout: Duration::from_secs(remote.timeout_secs),
            offline: cli.offline.or(env.offline).unwrap_or(false),
        })
    }
}

/// `$XDG_DATA_HOME/parley`, or `.parley` when there is no data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
