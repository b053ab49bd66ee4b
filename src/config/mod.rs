// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[display]` - Gallery display settings (background, thumbnail size)
//! - `[backend]` - Remote content backend (base URL, device identity)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//!
//! // Defaults plus an optional warning key if the file was unreadable
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Notification key used when the settings file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Backdrop behind the overlay image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_theme: Option<BackgroundTheme>,

    /// Thumbnail edge length on the detail page, in pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background_theme: Some(BackgroundTheme::default()),
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

impl DisplayConfig {
    /// Returns the configured thumbnail size, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }
}

/// Remote content backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BackendConfig {
    /// Base URL of the content API (e.g., `https://example.org`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Stable identifier sent with every backend request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Remote content backend settings.
    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

/// Location of `settings.toml` under `base_dir`, or under the resolved
/// settings directory when `base_dir` is `None`.
fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the settings from the resolved settings directory.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid one
/// yields defaults plus [`CONFIG_LOAD_WARNING_KEY`] for a toast.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "settings unreadable, using defaults");
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes the settings into `base_dir` (or the resolved settings directory).
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no settings directory available".to_string())),
    }
}

/// Writes the settings to `path`, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            display: DisplayConfig {
                background_theme: Some(BackgroundTheme::Light),
                thumbnail_size: Some(96),
            },
            backend: BackendConfig {
                base_url: Some("https://content.example.org".to_string()),
                device_id: Some("device-1".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n")
            .expect("partial config should parse");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.display.thumbnail_size, Some(DEFAULT_THUMBNAIL_SIZE));
        assert!(config.backend.base_url.is_none());
    }

    #[test]
    fn thumbnail_size_is_clamped() {
        let display = DisplayConfig {
            thumbnail_size: Some(10_000),
            ..DisplayConfig::default()
        };
        assert_eq!(display.thumbnail_size(), MAX_THUMBNAIL_SIZE);

        let display = DisplayConfig {
            thumbnail_size: Some(1),
            ..DisplayConfig::default()
        };
        assert_eq!(display.thumbnail_size(), MIN_THUMBNAIL_SIZE);
    }

    #[test]
    fn save_with_override_is_read_back_by_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.backend.base_url = Some("https://content.example.org".to_string());

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(loaded, config);
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
