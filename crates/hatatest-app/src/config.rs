//! Settings loaded from the user config file
//!
//! `~/.config/hatatest/config.toml` (or an explicit `--config` path).
//! A missing or malformed file falls back to defaults with a warning,
//! never an abort.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "hatatest";

/// Application settings from the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub behavior: BehaviorSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the test backend.
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Ask before deleting a question or result.
    pub confirm_delete: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Date format for card timestamps.
    pub date_format: String,
    /// Timestamp format for result cards.
    pub datetime_format: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            date_format: "%d.%m.%Y".to_string(),
            datetime_format: "%d.%m.%Y %H:%M".to_string(),
        }
    }
}

/// Load settings from the given path, or the default user config location.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(explicit_path: Option<&Path>) -> Settings {
    let config_path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path(),
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
        assert!(settings.behavior.confirm_delete);
        assert_eq!(settings.ui.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("nope.toml")));
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[server]
base_url = "http://10.1.2.3:9000"

[behavior]
confirm_delete = false
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.server.base_url, "http://10.1.2.3:9000");
        assert!(!settings.behavior.confirm_delete);
        // Untouched table keeps its default
        assert_eq!(settings.ui.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
    }
}
