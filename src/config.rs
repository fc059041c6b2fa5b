//! Configuration management for the station front-end
//!
//! Handles loading, saving, and managing application configuration.
//! Configuration is persisted as JSON in the platform config directory;
//! the backend URL can be overridden with `STATION_BACKEND_URL`.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "az.4k6ag.StationFrontend";

/// Configuration file name inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the backend URL
pub const BACKEND_URL_ENV: &str = "STATION_BACKEND_URL";

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// News posts per page
pub const DEFAULT_NEWS_PAGE_SIZE: u32 = 10;

/// Guestbook entries per page
pub const DEFAULT_GUESTBOOK_PAGE_SIZE: u32 = 20;

/// Largest page the backend accepts for news
pub const MAX_NEWS_PAGE_SIZE: u32 = 50;

/// Largest page the backend accepts for the guestbook
pub const MAX_GUESTBOOK_PAGE_SIZE: u32 = 100;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL (without the `/api` suffix)
    pub backend_url: String,

    /// Preferred language code; detected from the system when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// News posts per page
    pub news_page_size: u32,

    /// Guestbook entries per page
    pub guestbook_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            language: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            news_page_size: DEFAULT_NEWS_PAGE_SIZE,
            guestbook_page_size: DEFAULT_GUESTBOOK_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply the environment
    ///
    /// A missing file yields defaults.
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_file()?;
        let config = if path.exists() {
            Self::load_from_path(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to_path(&Self::config_file()?)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Get the configuration file path
    pub fn config_file() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join(CONFIG_FILE))
    }

    /// Apply `STATION_BACKEND_URL` if set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_backend_override(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn with_backend_override(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Backend URL overridden from environment: {}", url);
            self.backend_url = url;
        }
        self
    }

    /// Check values the backend or the client would reject
    pub fn validate(&self) -> ConfigResult<()> {
        let url = self.backend_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "backend_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.backend_url),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !(1..=MAX_NEWS_PAGE_SIZE).contains(&self.news_page_size) {
            return Err(ConfigError::InvalidValue {
                key: "news_page_size".to_string(),
                reason: format!("must be between 1 and {}", MAX_NEWS_PAGE_SIZE),
            });
        }
        if !(1..=MAX_GUESTBOOK_PAGE_SIZE).contains(&self.guestbook_page_size) {
            return Err(ConfigError::InvalidValue {
                key: "guestbook_page_size".to_string(),
                reason: format!("must be between 1 and {}", MAX_GUESTBOOK_PAGE_SIZE),
            });
        }
        Ok(())
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.news_page_size, 10);
        assert_eq!(config.guestbook_page_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_preserves_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            backend_url: "https://4k6ag.example.org".to_string(),
            language: Some("az".to_string()),
            ..Config::default()
        };

        config.save_to_path(&path).unwrap();
        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"language": "ru"}"#).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.language.as_deref(), Some("ru"));
        assert_eq!(loaded.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            news_page_size: 51,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { key, .. }) if key == "news_page_size"
        ));

        let config = Config {
            backend_url: "ftp://example.org".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backend_override() {
        let config = Config::default().with_backend_override(Some("https://api.example".into()));
        assert_eq!(config.backend_url, "https://api.example");

        let config = Config::default().with_backend_override(Some("  ".into()));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }
}
