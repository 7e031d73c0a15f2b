//! Application configuration management.
//!
//! Stores the backend base URL and the last username used to log in at
//! `~/.config/dalu/config.json`. The backend contract is a parameter,
//! never a hardcoded constant: `--api-url` / `DALU_API_URL` wins over
//! the config file, which wins over the dev-stack default.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "dalu";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default backend when nothing is configured - the local dev stack
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_username: Option<String>,
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
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Directory holding both the config and the session file
    pub fn app_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME))
    }

    /// Resolution order: explicit override (flag/env), config file, default
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> String {
        override_url
            .map(str::to_string)
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
