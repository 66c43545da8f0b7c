use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Tool configuration. This is the only thing read from disk: tracked
/// state (goals, groups, today's progress) lives in memory and resets on
/// every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated screenshot analysis delay, in seconds.
    #[serde(default = "default_analysis_delay")]
    pub analysis_delay_seconds: u64,

    /// Base URL used when templating group invite links.
    #[serde(default = "default_invite_base_url")]
    pub invite_base_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_analysis_delay() -> u64 {
    2
}

fn default_invite_base_url() -> String {
    "https://detox-app.com/join".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_seconds: default_analysis_delay(),
            invite_base_url: default_invite_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("detox")
            .join("config.toml")
    }

    /// Load configuration, writing the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_config_path())
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        debug!("loading configuration from {:?}", config_path);

        if !config_path.exists() {
            info!("no configuration at {:?}, writing defaults", config_path);
            let config = Self::default();
            config.save_to_path(config_path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| Error::Config(format!("{:?}: {}", config_path, e)))?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("{:?}: {}", parent, e)))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(config_path, content)
            .map_err(|e| Error::Config(format!("{:?}: {}", config_path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis_delay_seconds, 2);
        assert_eq!(config.invite_base_url, "https://detox-app.com/join");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.analysis_delay_seconds, config.analysis_delay_seconds);
        assert_eq!(parsed.invite_base_url, config.invite_base_url);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AppConfig = toml::from_str("analysis_delay_seconds = 5\n").unwrap();
        assert_eq!(parsed.analysis_delay_seconds, 5);
        assert_eq!(parsed.invite_base_url, "https://detox-app.com/join");
    }
}
