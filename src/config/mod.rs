// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[nextup]` - "Next up" overlay settings (offset, content bind deferral)
//! - `[playback]` - Simulated playback clock settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_NEXTUP_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_nextup::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.nextup.offset_secs = Some(-15.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// "Next up" overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextUpConfig {
    /// Offset in seconds at which the overlay auto-shows. Negative values
    /// count from the end of playback, non-negative from the start.
    #[serde(default = "default_offset_secs", skip_serializing_if = "Option::is_none")]
    pub offset_secs: Option<f64>,

    /// Deferral before the overlay content is bound, in milliseconds.
    #[serde(
        default = "default_bind_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub bind_delay_ms: Option<u64>,
}

impl Default for NextUpConfig {
    fn default() -> Self {
        Self {
            offset_secs: Some(DEFAULT_NEXTUP_OFFSET_SECS),
            bind_delay_ms: Some(DEFAULT_BIND_DELAY_MS),
        }
    }
}

/// Simulated playback clock settings for the demo player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Interval between position ticks in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Start playing automatically once a playlist item is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            autoplay: Some(true),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// "Next up" overlay settings.
    #[serde(default)]
    pub nextup: NextUpConfig,

    /// Simulated playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Resolved "next up" offset setting, clamped to the supported range.
    #[must_use]
    pub fn nextup_offset_secs(&self) -> f64 {
        self.nextup
            .offset_secs
            .unwrap_or(DEFAULT_NEXTUP_OFFSET_SECS)
            .clamp(MIN_NEXTUP_OFFSET_SECS, MAX_NEXTUP_OFFSET_SECS)
    }

    /// Resolved content bind deferral, clamped to the supported range.
    #[must_use]
    pub fn nextup_bind_delay(&self) -> std::time::Duration {
        let ms = self
            .nextup
            .bind_delay_ms
            .unwrap_or(DEFAULT_BIND_DELAY_MS)
            .min(MAX_BIND_DELAY_MS);
        std::time::Duration::from_millis(ms)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_offset_secs() -> Option<f64> {
    Some(DEFAULT_NEXTUP_OFFSET_SECS)
}

fn default_bind_delay_ms() -> Option<u64> {
    Some(DEFAULT_BIND_DELAY_MS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            nextup: NextUpConfig {
                offset_secs: Some(-20.0),
                bind_delay_ms: Some(250),
            },
            playback: PlaybackConfig {
                tick_interval_ms: Some(100),
                autoplay: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, config.general.language);
        assert_eq!(loaded.nextup.offset_secs, Some(-20.0));
        assert_eq!(loaded.nextup.bind_delay_ms, Some(250));
        assert_eq!(loaded.playback.autoplay, Some(false));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.nextup.offset_secs, Some(DEFAULT_NEXTUP_OFFSET_SECS));
        assert_eq!(config.nextup.bind_delay_ms, Some(DEFAULT_BIND_DELAY_MS));
        assert_eq!(
            config.playback.tick_interval_ms,
            Some(DEFAULT_TICK_INTERVAL_MS)
        );
        assert_eq!(config.playback.autoplay, Some(true));
        assert!(config.general.language.is_none());
    }

    #[test]
    fn nextup_offset_secs_clamps_out_of_range_values() {
        let config = Config {
            nextup: NextUpConfig {
                offset_secs: Some(1e9),
                ..NextUpConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.nextup_offset_secs(), MAX_NEXTUP_OFFSET_SECS);
    }

    #[test]
    fn nextup_bind_delay_caps_at_maximum() {
        let config = Config {
            nextup: NextUpConfig {
                bind_delay_ms: Some(60_000),
                ..NextUpConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(
            config.nextup_bind_delay(),
            std::time::Duration::from_millis(MAX_BIND_DELAY_MS)
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"de\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.nextup.offset_secs, Some(DEFAULT_NEXTUP_OFFSET_SECS));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
            },
            nextup: NextUpConfig {
                offset_secs: Some(30.0),
                bind_delay_ms: Some(0),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.nextup.offset_secs, Some(30.0));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning,
            Some("notification-config-load-error".to_string()),
            "should warn about parse error"
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("[nextup]"), "should have [nextup] section");
        assert!(
            content.contains("[playback]"),
            "should have [playback] section"
        );
    }
}
