use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// OpenWeather production endpoint, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const API_KEY_ENV: &str = "SKYCAST_API_KEY";
const BASE_URL_ENV: &str = "SKYCAST_BASE_URL";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Weather provider base URL; `None` means [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,

    /// OpenWeather API key, used for both geocoding and forecasts.
    pub api_key: Option<String>,

    /// Override for the search-history file location.
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist
    /// yet. `SKYCAST_API_KEY` and `SKYCAST_BASE_URL` environment variables
    /// win over file values.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            // First run: no config file, return empty.
            Self::default()
        };

        if let Ok(key) = env::var(API_KEY_ENV) {
            cfg.api_key = Some(key);
        }
        if let Ok(url) = env::var(BASE_URL_ENV) {
            cfg.base_url = Some(url);
        }

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Effective provider base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// API key, or an actionable error when none is configured.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your OpenWeather API key,\n\
                 or set the {API_KEY_ENV} environment variable."
            )
        })
    }

    /// Effective location of the search-history file.
    pub fn history_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.history_file {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("history.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_default_base_url() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn configured_base_url_wins() {
        let cfg = Config {
            base_url: Some("http://localhost:9090".to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.base_url(), "http://localhost:9090");
    }

    #[test]
    fn require_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn require_api_key_rejects_empty_string() {
        let cfg = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(cfg.require_api_key().is_err());
    }

    #[test]
    fn require_api_key_returns_configured_key() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.require_api_key().unwrap(), "KEY");
    }

    #[test]
    fn history_file_override_is_respected() {
        let cfg = Config {
            history_file: Some(PathBuf::from("/tmp/custom-history.json")),
            ..Config::default()
        };
        let path = cfg.history_file_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom-history.json"));
    }
}
