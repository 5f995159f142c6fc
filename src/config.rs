//! Start-up configuration
//!
//! Read from `config.json` in the platform config directory. Every key is
//! optional; command-line flags override whatever the file says.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::Database;

const CONFIG_FILE: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    NoConfigDir,
    #[error("Could not find data directory")]
    NoDataDir,
    #[error("Could not read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Config file {} is malformed: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_level: String,
}

/// On-disk shape; absent keys fall back to defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("connectus").join(CONFIG_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        let data_file = Database::default_path().ok_or(ConfigError::NoDataDir)?;
        Self::load_from(&path, data_file)
    }

    /// Load from `path`, using `default_data_file` if the file names none.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path, default_data_file: PathBuf) -> Result<Self, ConfigError> {
        let file = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigFile::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Ok(Self {
            data_file: file.data_file.unwrap_or(default_data_file),
            log_level: file
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, log_level: Option<String>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}
