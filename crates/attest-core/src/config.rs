//! Application configuration management.
//!
//! The backend base URL is resolved once at startup, in this order: the
//! `ATTEST_API_URL` environment variable, then the config file, then a local
//! development default. The resolved value is handed to the client at
//! construction and never re-read.
//!
//! Configuration is stored at `~/.config/attest/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "attest";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the backend base URL
const BASE_URL_ENV: &str = "ATTEST_API_URL";

/// Default backend when nothing else is configured (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the backend base URL: environment override, then config file,
    /// then the local default. Trailing slashes are trimmed so endpoint paths
    /// can always be appended verbatim.
    pub fn resolve_base_url(&self) -> String {
        Self::pick_base_url(std::env::var(BASE_URL_ENV).ok(), self.base_url.clone())
    }

    fn pick_base_url(env: Option<String>, configured: Option<String>) -> String {
        env.filter(|v| !v.is_empty())
            .or(configured)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(
            Config::pick_base_url(Some("https://env.example/api".into()), Some("https://cfg.example".into())),
            "https://env.example/api"
        );
        assert_eq!(
            Config::pick_base_url(None, Some("https://cfg.example/v1/".into())),
            "https://cfg.example/v1"
        );
        assert_eq!(Config::pick_base_url(None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_env_override_ignored() {
        assert_eq!(
            Config::pick_base_url(Some(String::new()), None),
            DEFAULT_BASE_URL
        );
    }
}
