//! Application Configuration
//!
//! Settings for where collected data lives:
//! - the private data directory (defaults to the platform data dir)
//! - the data log file name
//!
//! Persisted as TOML next to other platform config.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LedgerError, Result};

/// Default name of the append-only data log.
///
/// The extension is kept for compatibility even though the file is a
/// sequence of JSON objects, not a single JSON document.
pub const LOG_FILE_NAME: &str = "collected_data.json";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration version for migrations
    pub version: u32,
    /// Override for the private data directory
    pub data_dir: Option<PathBuf>,
    /// File name of the append-only data log
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: None,
            log_file: LOG_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "consentledger", "Consent-Ledger")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get the default private data directory path
    pub fn default_data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Resolve the private data directory, honoring the override
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        self.data_dir
            .clone()
            .or_else(Self::default_data_dir)
            .ok_or_else(|| LedgerError::Config("Cannot determine data directory".into()))
    }

    /// Resolve the full path of the data log file
    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.resolved_data_dir()?.join(&self.log_file))
    }

    /// Load configuration from file
    pub async fn load() -> Result<Self> {
        let config_file = Self::config_file()
            .ok_or_else(|| LedgerError::Config("Cannot determine config path".into()))?;

        if config_file.exists() {
            debug!("Loading config from {:?}", config_file);
            let contents = tokio::fs::read_to_string(&config_file).await?;
            let config: AppConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            let config = AppConfig::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_file = Self::config_file()
            .ok_or_else(|| LedgerError::Config("Cannot determine config path".into()))?;

        if let Some(parent) = config_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(&config_file, contents).await?;

        debug!("Config saved to {:?}", config_file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.log_file, LOG_FILE_NAME);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_log_path_honors_override() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/consent-test")),
            ..Default::default()
        };

        let path = config.log_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/consent-test/collected_data.json"));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/data/app")),
            ..Default::default()
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.version, config.version);
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.log_file, config.log_file);
    }
}
