//! Runtime configuration.
//!
//! Loaded from a JSON file in the platform config directory, with
//! environment variable overrides for deployments that cannot ship a
//! config file.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding the backend base URL
pub const ENV_API_URL: &str = "PREFSYNC_API_URL";

/// Environment variable enabling fake-API mode ("1", "true", "yes")
pub const ENV_FAKE_API: &str = "PREFSYNC_FAKE_API";

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

/// Crate configuration that persists across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the console backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// When set, preferences are served from in-memory state instead of
    /// the backend (testing/demo mode)
    #[serde(default)]
    pub fake_api: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            fake_api: false,
        }
    }
}

impl AppConfig {
    /// Get the config directory path for prefsync
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("prefsync"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|p| p.join("prefsync"))
        }
    }

    /// Get the path to the config JSON file
    pub fn get_config_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("config.json"))
    }

    /// Load configuration from disk, then apply environment overrides
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.apply_env_overrides();
        config
    }

    fn load_from_file() -> Self {
        let path = match Self::get_config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("invalid config file {:?}: {}; using defaults", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(ENV_API_URL) {
            if !url.is_empty() {
                self.api_base_url = url;
            }
        }
        if let Ok(flag) = env::var(ENV_FAKE_API) {
            self.fake_api = parse_flag(&flag);
        }
    }
}

/// Interpret a boolean environment flag
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
