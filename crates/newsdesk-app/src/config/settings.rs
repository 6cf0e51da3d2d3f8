//! Loading settings from disk

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/newsdesk/config.toml`, or `None` when the platform has no
/// config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("newsdesk").join(CONFIG_FILENAME))
}

/// Load settings from a TOML file.
///
/// A missing, unreadable or invalid file yields the defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
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
