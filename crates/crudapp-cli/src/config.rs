//! Configuration management for the crudapp client
//!
//! Stores the API base URL in ~/.config/crudapp/config.toml.
//! `CRUDAPP_BASE_URL` (environment or `.env`) takes precedence over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "crudapp";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "crudapp.log";
const BASE_URL_ENV: &str = "CRUDAPP_BASE_URL";

/// Client Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(LOG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set the API base URL
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Base URL after applying the environment override
    pub fn effective_base_url(&self) -> String {
        Self::resolve_base_url(&self.base_url, std::env::var(BASE_URL_ENV).ok())
    }

    fn resolve_base_url(configured: &str, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| configured.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_default_url() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_parse_and_serialize() {
        let config = Config::parse("base_url = \"http://10.0.2.2:3000\"\n").unwrap();
        assert_eq!(config.base_url, "http://10.0.2.2:3000");

        let content = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&content).unwrap(), config);
    }

    #[test]
    fn test_set_base_url_trims_slash() {
        let mut config = Config::default();
        config.set_base_url("http://example.test:3000/");
        assert_eq!(config.base_url, "http://example.test:3000");
    }

    #[test]
    fn test_env_override() {
        assert_eq!(
            Config::resolve_base_url("http://a", Some("http://b".to_string())),
            "http://b"
        );
        assert_eq!(
            Config::resolve_base_url("http://a", Some("  ".to_string())),
            "http://a"
        );
        assert_eq!(Config::resolve_base_url("http://a", None), "http://a");
    }
}
