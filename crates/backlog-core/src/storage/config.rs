//! Configuration management
//!
//! The space URL and request timeout live in `config.toml`.
//! Priority for the URL: CLI argument > BACKLOG_URL environment variable > config.toml

use super::Result;
use crate::api::transport::DEFAULT_TIMEOUT_SECS;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const URL_ENV: &str = "BACKLOG_URL";
const APP_DIR: &str = "backlog-cli";
const CONFIG_FILE: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Backlog space URL, e.g. `https://example.backlog.com`
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to parse config file: {}", e),
        })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `~/.config/backlog-cli/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::file_in(&home_dir.join(".config").join(APP_DIR)))
    }

    /// Config file inside an explicitly chosen directory.
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// URL from the file, falling back to `BACKLOG_URL`.
    pub fn get_url(&self) -> Option<String> {
        self.url
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var(URL_ENV).ok().filter(|s| !s.is_empty()))
    }

    /// Resolve the URL with a CLI argument taking priority.
    pub fn resolve_url(&self, cli_url: Option<&str>) -> Option<String> {
        cli_url
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.get_url())
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
