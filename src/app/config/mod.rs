// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode and motion preferences
//! - `[orbit]` - Orbit showcase geometry and timing
//! - `[carousel]` - Work strip auto-scroll speed
//! - `[contact]` - Inquiry form endpoint
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_REEL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

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

    /// Skip entrance and reveal animations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            reduced_motion: Some(false),
        }
    }
}

/// Orbit showcase settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrbitConfig {
    /// Number of posters on the ring.
    #[serde(default = "default_slots", skip_serializing_if = "Option::is_none")]
    pub slots: Option<usize>,

    /// Seconds per full revolution.
    #[serde(
        default = "default_period_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub period_secs: Option<f64>,

    /// Ring radius in logical pixels.
    #[serde(default = "default_radius", skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,

    /// Delay before the first entrance, in milliseconds.
    #[serde(
        default = "default_base_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_delay_ms: Option<u64>,

    /// Extra delay per slot index, in milliseconds.
    #[serde(
        default = "default_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub stagger_ms: Option<u64>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            slots: default_slots(),
            period_secs: default_period_secs(),
            radius: default_radius(),
            base_delay_ms: default_base_delay_ms(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

impl OrbitConfig {
    /// Slot count clamped into the supported range so persisted configs
    /// cannot request a degenerate ring.
    #[must_use]
    pub fn clamped_slots(&self) -> usize {
        self.slots
            .unwrap_or(DEFAULT_ORBIT_SLOTS)
            .clamp(MIN_ORBIT_SLOTS, MAX_ORBIT_SLOTS)
    }

    /// Revolution period clamped into the supported range.
    #[must_use]
    pub fn clamped_period_secs(&self) -> f64 {
        self.period_secs
            .unwrap_or(DEFAULT_ORBIT_PERIOD_SECS)
            .clamp(MIN_ORBIT_PERIOD_SECS, MAX_ORBIT_PERIOD_SECS)
    }
}

/// Work strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Auto-scroll speed in logical pixels per second.
    #[serde(default = "default_speed", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
        }
    }
}

impl CarouselConfig {
    /// Auto-scroll speed clamped into the supported range.
    #[must_use]
    pub fn clamped_speed(&self) -> f32 {
        self.speed
            .unwrap_or(DEFAULT_CAROUSEL_SPEED)
            .clamp(MIN_CAROUSEL_SPEED, MAX_CAROUSEL_SPEED)
    }
}

/// Inquiry form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Endpoint inquiry submissions are POSTed to.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
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

    /// Orbit showcase settings.
    #[serde(default)]
    pub orbit: OrbitConfig,

    /// Work strip settings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Inquiry form settings.
    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_slots() -> Option<usize> {
    Some(DEFAULT_ORBIT_SLOTS)
}

fn default_period_secs() -> Option<f64> {
    Some(DEFAULT_ORBIT_PERIOD_SECS)
}

fn default_radius() -> Option<f32> {
    Some(DEFAULT_ORBIT_RADIUS)
}

fn default_base_delay_ms() -> Option<u64> {
    Some(DEFAULT_BASE_DELAY_MS)
}

fn default_stagger_ms() -> Option<u64> {
    Some(DEFAULT_STAGGER_MS)
}

fn default_speed() -> Option<f32> {
    Some(DEFAULT_CAROUSEL_SPEED)
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_CONTACT_ENDPOINT.to_string())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Could not read settings, using defaults: {err}")),
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
                theme_mode: ThemeMode::Light,
                reduced_motion: Some(true),
            },
            orbit: OrbitConfig {
                slots: Some(12),
                period_secs: Some(30.0),
                radius: Some(220.0),
                base_delay_ms: Some(100),
                stagger_ms: Some(80),
            },
            carousel: CarouselConfig { speed: Some(45.0) },
            contact: ContactConfig {
                endpoint: Some("https://example.com/inbox".to_string()),
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
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.general.reduced_motion, Some(false));
        assert_eq!(config.orbit.slots, Some(DEFAULT_ORBIT_SLOTS));
        assert_eq!(config.orbit.period_secs, Some(DEFAULT_ORBIT_PERIOD_SECS));
        assert_eq!(config.orbit.radius, Some(DEFAULT_ORBIT_RADIUS));
        assert_eq!(config.carousel.speed, Some(DEFAULT_CAROUSEL_SPEED));
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some(DEFAULT_CONTACT_ENDPOINT)
        );
    }

    #[test]
    fn orbit_bounds_clamp_degenerate_values() {
        let config = OrbitConfig {
            slots: Some(0),
            period_secs: Some(0.0),
            ..OrbitConfig::default()
        };
        assert_eq!(config.clamped_slots(), MIN_ORBIT_SLOTS);
        assert_eq!(config.clamped_period_secs(), MIN_ORBIT_PERIOD_SECS);

        let huge = OrbitConfig {
            slots: Some(1000),
            period_secs: Some(1.0e9),
            ..OrbitConfig::default()
        };
        assert_eq!(huge.clamped_slots(), MAX_ORBIT_SLOTS);
        assert_eq!(huge.clamped_period_secs(), MAX_ORBIT_PERIOD_SECS);

        let frantic = CarouselConfig {
            speed: Some(10_000.0),
        };
        assert_eq!(frantic.clamped_speed(), MAX_CAROUSEL_SPEED);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
                reduced_motion: Some(true),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.general.reduced_motion, Some(true));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
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
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load partial config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.orbit.slots, Some(DEFAULT_ORBIT_SLOTS));
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load mixed-case config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(content.contains("[orbit]"), "should have [orbit] section");
        assert!(
            content.contains("[carousel]"),
            "should have [carousel] section"
        );
        assert!(
            content.contains("[contact]"),
            "should have [contact] section"
        );
    }
}
