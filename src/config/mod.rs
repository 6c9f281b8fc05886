// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file. The console never writes the file itself.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[inbox]` - Notification feed location and timestamp format
//! - `[diagnostics]` - Diagnostic event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `MEALBOX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use mealbox_console::config;
//! use std::path::PathBuf;
//!
//! // Missing or unreadable files fall back to defaults plus a warning key
//! let (config, warning) = config::load_with_override(Some(PathBuf::from("/etc/mealbox")));
//!
//! if let Some(key) = warning {
//!     eprintln!("config ignored: {key}");
//! }
//! println!("buffer: {}", config.diagnostics.buffer_capacity().value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::error::Result;
use crate::ui::inbox::projection::{is_valid_pattern, TimestampFormatter};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// I18n key of the toast shown when the config file cannot be read.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// I18n key of the toast shown when `timestamp_format` is unusable.
pub const INVALID_TIMESTAMP_FORMAT_KEY: &str = "notification-config-timestamp-format";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Inbox settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct InboxConfig {
    /// JSON file holding the notification feed.
    #[serde(default)]
    pub feed_path: Option<PathBuf>,

    /// `strftime` pattern for notification timestamps.
    #[serde(default)]
    pub timestamp_format: Option<String>,
}

impl InboxConfig {
    /// Returns the configured pattern when it is valid.
    pub fn timestamp_pattern(&self) -> Option<&str> {
        self.timestamp_format
            .as_deref()
            .filter(|pattern| is_valid_pattern(pattern))
    }

    /// True when a pattern is configured but cannot be used.
    pub fn has_invalid_timestamp_format(&self) -> bool {
        self.timestamp_format.is_some() && self.timestamp_pattern().is_none()
    }

    pub fn timestamp_formatter(&self) -> TimestampFormatter {
        self.timestamp_pattern()
            .map(TimestampFormatter::new)
            .unwrap_or_default()
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory; clamped to the supported range.
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::from(self.buffer_capacity)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub inbox: InboxConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
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

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from `base_dir`, or from the resolved config
/// directory when `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string())),
            };
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_TOML: &str = r#"
[general]
language = "fr"
theme_mode = "dark"

[inbox]
feed_path = "/srv/mealbox/notifications.json"
timestamp_format = "%d/%m %H:%M"

[diagnostics]
buffer_capacity = 1000
"#;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            inbox: InboxConfig {
                feed_path: Some(PathBuf::from("/srv/mealbox/notifications.json")),
                timestamp_format: Some("%d/%m %H:%M".to_string()),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(1000),
            },
        }
    }

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, SAMPLE_TOML).expect("write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, sample_config());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("valid config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.inbox, InboxConfig::default());
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Light\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
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
        fs::write(base_dir.join(CONFIG_FILE), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_reads_settings_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), SAMPLE_TOML).expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, sample_config());
    }

    #[test]
    fn invalid_timestamp_format_falls_back_to_default() {
        let inbox = InboxConfig {
            feed_path: None,
            timestamp_format: Some("%Q".to_string()),
        };

        assert!(inbox.has_invalid_timestamp_format());
        assert_eq!(
            inbox.timestamp_formatter().pattern(),
            DEFAULT_TIMESTAMP_FORMAT
        );
    }

    #[test]
    fn valid_timestamp_format_is_used() {
        let inbox = sample_config().inbox;
        assert!(!inbox.has_invalid_timestamp_format());
        assert_eq!(inbox.timestamp_formatter().pattern(), "%d/%m %H:%M");
    }

    #[test]
    fn buffer_capacity_is_clamped() {
        let diagnostics = DiagnosticsConfig {
            buffer_capacity: Some(1),
        };
        assert_eq!(
            diagnostics.buffer_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            DiagnosticsConfig::default().buffer_capacity().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
