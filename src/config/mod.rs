// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Media directory, catalog manifest and built-in variant
//! - `[playback]` - Hover previews, glyph timing and default rate
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `MOTION_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use motion_gallery::config;
//!
//! // Returns defaults plus a warning when the file is unreadable
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("clips are read from {}", config.media_dir().display());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::Variant;
use crate::error::Result;
use crate::gallery::PlaybackRate;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Which clips are shown and where they live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Directory that relative media references resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,

    /// TOML manifest replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Built-in catalog used when no manifest is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

/// Playback behaviour of cards and the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Play card clips while hovered.
    #[serde(
        default = "default_hover_preview",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_preview: Option<bool>,

    /// Play/pause glyph visibility in milliseconds.
    #[serde(
        default = "default_glyph_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub glyph_duration_ms: Option<u64>,

    /// Rate the detail view opens with; must be one of the presets.
    #[serde(
        default = "default_playback_rate",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_rate: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            hover_preview: default_hover_preview(),
            glyph_duration_ms: default_glyph_duration_ms(),
            default_rate: default_playback_rate(),
        }
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
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Resolved media directory.
    #[must_use]
    pub fn media_dir(&self) -> PathBuf {
        self.gallery
            .media_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR))
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.gallery.variant.unwrap_or_default()
    }

    #[must_use]
    pub fn hover_preview(&self) -> bool {
        self.playback.hover_preview.unwrap_or(DEFAULT_HOVER_PREVIEW)
    }

    /// Glyph visibility, clamped to the supported range.
    #[must_use]
    pub fn glyph_duration(&self) -> Duration {
        let ms = self
            .playback
            .glyph_duration_ms
            .unwrap_or(DEFAULT_GLYPH_DURATION_MS)
            .clamp(MIN_GLYPH_DURATION_MS, MAX_GLYPH_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Initial modal rate; values outside the preset set fall back to 1x.
    #[must_use]
    pub fn default_rate(&self) -> PlaybackRate {
        self.playback
            .default_rate
            .and_then(PlaybackRate::from_multiplier)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_hover_preview() -> Option<bool> {
    Some(DEFAULT_HOVER_PREVIEW)
}

fn default_glyph_duration_ms() -> Option<u64> {
    Some(DEFAULT_GLYPH_DURATION_MS)
}

fn default_playback_rate() -> Option<f64> {
    Some(DEFAULT_PLAYBACK_RATE)
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
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default(),
            Some(format!("ignoring {}: {e}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"LIGHT\"\n\n\
             [gallery]\nmedia_dir = \"/srv/clips\"\nvariant = \"classic\"\n\n\
             [playback]\nhover_preview = false\nglyph_duration_ms = 800\ndefault_rate = 1.5\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                    theme_mode: ThemeMode::Light,
                },
                gallery: GalleryConfig {
                    media_dir: Some(PathBuf::from("/srv/clips")),
                    catalog: None,
                    variant: Some(Variant::Classic),
                },
                playback: PlaybackConfig {
                    hover_preview: Some(false),
                    glyph_duration_ms: Some(800),
                    default_rate: Some(1.5),
                },
            }
        );
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
    fn load_with_override_warns_and_falls_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parses");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(config.hover_preview());
        assert_eq!(config.glyph_duration(), Duration::from_millis(600));
        assert_eq!(config.default_rate(), PlaybackRate::Normal);
    }

    #[test]
    fn glyph_duration_is_clamped() {
        let mut config = Config::default();
        config.playback.glyph_duration_ms = Some(5);
        assert_eq!(config.glyph_duration(), Duration::from_millis(MIN_GLYPH_DURATION_MS));
        config.playback.glyph_duration_ms = Some(60_000);
        assert_eq!(config.glyph_duration(), Duration::from_millis(MAX_GLYPH_DURATION_MS));
    }

    #[test]
    fn unknown_rate_falls_back_to_normal() {
        let mut config = Config::default();
        config.playback.default_rate = Some(3.0);
        assert_eq!(config.default_rate(), PlaybackRate::Normal);
        config.playback.default_rate = Some(0.75);
        assert_eq!(config.default_rate(), PlaybackRate::ThreeQuarters);
    }

    #[test]
    fn variant_parses_from_kebab_case() {
        let config: Config =
            toml::from_str("[gallery]\nvariant = \"ai-in-motion\"\nmedia_dir = \"clips\"\n")
                .expect("parses");
        assert_eq!(config.variant(), Variant::AiInMotion);
        assert_eq!(config.media_dir(), PathBuf::from("clips"));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }
}
