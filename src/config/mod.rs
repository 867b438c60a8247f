// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toasts]` - Toast timing, queue cap, gesture and motion tuning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::ui::toasts::ToastTime;
//!
//! let (mut config, _warning) = config::load();
//! config.toasts.default_timing = Some(ToastTime::Long);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::ToastTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning shown when the settings file exists but cannot be used.
pub const LOAD_WARNING: &str = "Settings could not be read, defaults are in use";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Timing used when a request does not pick one.
    #[serde(default = "default_timing", skip_serializing_if = "Option::is_none")]
    pub default_timing: Option<ToastTime>,

    /// Maximum number of active toasts. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_queue: Option<usize>,

    /// Swipe dismissal threshold (`translation + velocity`).
    #[serde(
        default = "default_dismiss_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_threshold: Option<f32>,

    /// Entrance/exit slide distance.
    #[serde(
        default = "default_slide_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_distance: Option<f32>,

    /// Animation duration in milliseconds.
    #[serde(
        default = "default_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u64>,

    /// Top safe-area inset of the overlay surface.
    #[serde(
        default = "default_safe_area_top",
        skip_serializing_if = "Option::is_none"
    )]
    pub safe_area_top: Option<f32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_timing: default_timing(),
            max_queue: None,
            dismiss_threshold: default_dismiss_threshold(),
            slide_distance: default_slide_distance(),
            animation_ms: default_animation_ms(),
            safe_area_top: default_safe_area_top(),
        }
    }
}

impl ToastConfig {
    /// Dismissal threshold clamped to the supported range.
    #[must_use]
    pub fn dismiss_threshold(&self) -> f32 {
        self.dismiss_threshold
            .unwrap_or(DEFAULT_DISMISS_THRESHOLD)
            .clamp(MIN_DISMISS_THRESHOLD, MAX_DISMISS_THRESHOLD)
    }

    #[must_use]
    pub fn slide_distance(&self) -> f32 {
        self.slide_distance
            .unwrap_or(DEFAULT_SLIDE_DISTANCE)
            .clamp(MIN_SLIDE_DISTANCE, MAX_SLIDE_DISTANCE)
    }

    #[must_use]
    pub fn animation(&self) -> Duration {
        Duration::from_millis(
            self.animation_ms
                .unwrap_or(DEFAULT_ANIMATION_MS)
                .clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS),
        )
    }

    #[must_use]
    pub fn safe_area_top(&self) -> f32 {
        self.safe_area_top.unwrap_or(DEFAULT_SAFE_AREA_TOP).max(0.0)
    }

    /// Queue cap; a cap of zero is treated as unbounded.
    #[must_use]
    pub fn max_queue(&self) -> Option<usize> {
        self.max_queue.filter(|limit| *limit > 0)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_timing() -> Option<ToastTime> {
    Some(ToastTime::default())
}

fn default_dismiss_threshold() -> Option<f32> {
    Some(DEFAULT_DISMISS_THRESHOLD)
}

fn default_slide_distance() -> Option<f32> {
    Some(DEFAULT_SLIDE_DISTANCE)
}

fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

fn default_safe_area_top() -> Option<f32> {
    Some(DEFAULT_SAFE_AREA_TOP)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "falling back to default settings"
                    );
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
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
                theme_mode: ThemeMode::Light,
            },
            toasts: ToastConfig {
                default_timing: Some(ToastTime::Short),
                max_queue: Some(8),
                dismiss_threshold: Some(80.0),
                slide_distance: Some(120.0),
                animation_ms: Some(200),
                safe_area_top: Some(24.0),
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn broken_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts]\nmax_queue = \"lots\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"Dark\"\n\n[toasts]\ndefault_timing = \"long\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.toasts.default_timing, Some(ToastTime::Long));
        assert_eq!(loaded.toasts.dismiss_threshold(), DEFAULT_DISMISS_THRESHOLD);
        assert_eq!(loaded.toasts.max_queue(), None);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let toasts = ToastConfig {
            dismiss_threshold: Some(1.0),
            slide_distance: Some(10_000.0),
            animation_ms: Some(0),
            safe_area_top: Some(-5.0),
            max_queue: Some(0),
            ..ToastConfig::default()
        };

        assert_eq!(toasts.dismiss_threshold(), MIN_DISMISS_THRESHOLD);
        assert_eq!(toasts.slide_distance(), MAX_SLIDE_DISTANCE);
        assert_eq!(toasts.animation(), Duration::from_millis(MIN_ANIMATION_MS));
        assert_eq!(toasts.safe_area_top(), 0.0);
        assert_eq!(toasts.max_queue(), None);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.toasts.default_timing, Some(ToastTime::Medium));
        assert_eq!(config.toasts.slide_distance(), 150.0);
        assert_eq!(
            config.toasts.animation(),
            Duration::from_millis(DEFAULT_ANIMATION_MS)
        );
    }
}
