//! Backend Configuration
//!
//! Hosted table store location and API key, persisted as TOML in the
//! platform config directory with the key sealed at rest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{
    BACKEND_CONFIG_FILE, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_BACKEND_API_KEY, ENV_BACKEND_URL,
};
use crate::error::{Error, Result};
use crate::helpers::{get_or_create_config_dir, open, seal, write_atomic};

/// Hosted table store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyzcompany.example.co`
    pub url: String,
    /// Anonymous/public API key (sealed in the file)
    pub api_key: String,
    /// Transport timeout for a single request
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Check that the config can be used to build a client
    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Error::Config {
                message: format!("Backend URL is not set (config file or {ENV_BACKEND_URL})"),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config {
                message: format!("Backend URL must start with http:// or https://: {url}"),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::Config {
                message: format!("API key is not set (config file or {ENV_BACKEND_API_KEY})"),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config {
                message: "request_timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Replace fields with explicitly provided values
    pub fn with_overrides(mut self, url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.url = url;
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    /// Apply `ADMIN_DASH_URL` / `ADMIN_DASH_API_KEY` from the environment
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_BACKEND_URL).ok(),
            std::env::var(ENV_BACKEND_API_KEY).ok(),
        )
    }

    /// Key with everything but the first characters hidden, for display
    pub fn masked_key(&self) -> String {
        if self.api_key.is_empty() {
            return "(not set)".to_string();
        }
        let visible: String = self.api_key.chars().take(4).collect();
        format!("{visible}****")
    }

    /// Location of the backend config file
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(BACKEND_CONFIG_FILE))
    }

    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;

        #[cfg(debug_assertions)]
        info!("Backend config file: {}", path.display());

        Ok(Self::load_from(&path)?.with_env())
    }

    /// Load from `path`; a missing or empty file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No backend config at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: BackendConfig = toml::from_str(&content)?;
        config.api_key = open(&config.api_key)?;
        Ok(config)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path` with the API key sealed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut stored = self.clone();
        if !stored.api_key.is_empty() {
            stored.api_key = seal(&stored.api_key)?;
        }

        let content = toml::to_string_pretty(&stored)?;
        write_atomic(path, &content)?;
        info!("Backend config saved to {}", path.display());
        Ok(())
    }
}
