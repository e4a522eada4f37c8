//! Configuration management for Doorman.
//!
//! Loads configuration from ${DOORMAN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the identity provider's REST API.
    pub api_base: String,

    /// API key appended to identity provider requests.
    ///
    /// Falls back to the DOORMAN_API_KEY environment variable when unset.
    pub api_key: Option<String>,

    /// Request timeout for identity provider calls, in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    pub const DEFAULT_API_BASE: &'static str = "https://identitytoolkit.googleapis.com";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from the default path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };

        if config.api_key.is_none()
            && let Ok(key) = std::env::var("DOORMAN_API_KEY")
            && !key.is_empty()
        {
            config.api_key = Some(key);
        }

        url::Url::parse(&config.api_base)
            .with_context(|| format!("Invalid api_base URL: {}", config.api_base))?;

        Ok(config)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Self::DEFAULT_API_BASE.to_string(),
            api_key: None,
            request_timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub mod paths {
    //! Path resolution for Doorman configuration and data directories.
    //!
    //! DOORMAN_HOME resolution order:
    //! 1. DOORMAN_HOME environment variable (if set)
    //! 2. ~/.doorman (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if determinable.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the Doorman home directory.
    ///
    /// Checks DOORMAN_HOME env var first, falls back to ~/.doorman
    pub fn doorman_home() -> PathBuf {
        if let Ok(home) = std::env::var("DOORMAN_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".doorman"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        doorman_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        doorman_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_base, Config::DEFAULT_API_BASE);
        assert_eq!(config.request_timeout_secs, Config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "api_base = \"https://identity.example.com\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base, "https://identity.example.com");
        assert_eq!(config.request_timeout_secs, Config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn invalid_api_base_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base = \"not a url\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
