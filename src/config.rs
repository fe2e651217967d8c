//! Compose configuration module.
//!
//! Handles loading, validating, and merging `storyframe.toml` files. The
//! configuration is an explicit value object passed into the compose
//! operation: stock defaults are overridden by an optional user file, and
//! individual command-line flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [canvas]
//! width = 1080              # Canvas width in pixels
//! height = 1920             # Canvas height in pixels
//!
//! [background]
//! blur_radius = 30.0        # Gaussian blur radius in pixels (0 disables)
//!
//! [foreground]
//! y_ratio = 0.38            # Top edge as a fraction of canvas height [0, 1]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the placement
//! [foreground]
//! y_ratio = 0.5
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up next to the working directory.
pub const CONFIG_FILE_NAME: &str = "storyframe.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Compose configuration loaded from `storyframe.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeConfig {
    /// Output canvas dimensions.
    pub canvas: CanvasConfig,
    /// Background treatment (cover crop is implicit; blur is configurable).
    pub background: BackgroundConfig,
    /// Foreground placement.
    pub foreground: ForegroundConfig,
}

impl ComposeConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Fails fast so the imaging layer never sees degenerate geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be positive".into(),
            ));
        }
        if !self.background.blur_radius.is_finite() || self.background.blur_radius < 0.0 {
            return Err(ConfigError::Validation(
                "background.blur_radius must be a non-negative number".into(),
            ));
        }
        if !self.foreground.y_ratio.is_finite()
            || !(0.0..=1.0).contains(&self.foreground.y_ratio)
        {
            return Err(ConfigError::Validation(
                "foreground.y_ratio must be between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }
}

/// Output canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        // 9:16 story format
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

/// Background treatment settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    /// Gaussian blur radius in pixels (radius = standard deviation).
    /// Zero disables the blur.
    pub blur_radius: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { blur_radius: 30.0 }
    }
}

/// Foreground placement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForegroundConfig {
    /// Vertical placement of the foreground's top edge as a fraction of the
    /// canvas height: 0.0 = top, 0.5 = middle, 1.0 = bottom. Clamped at
    /// composite time so the foreground stays on the canvas.
    pub y_ratio: f64,
}

impl Default for ForegroundConfig {
    fn default() -> Self {
        Self { y_ratio: 0.38 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ComposeConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `storyframe.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no config file exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ComposeConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ComposeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `storyframe.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file just yields the defaults.
pub fn load_config(dir: &Path) -> Result<ComposeConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Load config from an explicit TOML file (the `--config` flag).
///
/// Unlike [`load_config`], the file must exist.
pub fn load_config_file(path: &Path) -> Result<ComposeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(value))
}

/// Returns a fully-commented stock `storyframe.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# storyframe configuration
# ========================
#
# All options are optional — defaults shown below. Place this file as
# storyframe.toml next to where you run the tool, or point at it with
# --config. Command-line flags override file values.

[canvas]
# Output canvas size in pixels. The default is a 9:16 story card.
width = 1080
height = 1920

[background]
# Gaussian blur radius in pixels (radius = standard deviation).
# Set to 0 to disable the blur entirely.
blur_radius = 30.0

[foreground]
# Vertical placement of the foreground's top edge as a fraction of the
# canvas height: 0.0 = top, 0.5 = middle, 1.0 = bottom. The value is
# clamped so the foreground never leaves the canvas. Values between
# 0.35 and 0.55 suit most photos.
y_ratio = 0.38
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_match_stock_canvas() {
        let config = ComposeConfig::default();
        assert_eq!(config.canvas.width, 1080);
        assert_eq!(config.canvas.height, 1920);
        assert_eq!(config.background.blur_radius, 30.0);
        assert_eq!(config.foreground.y_ratio, 0.38);
    }

    #[test]
    fn default_config_validates() {
        assert!(ComposeConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_canvas() {
        let mut config = ComposeConfig::default();
        config.canvas.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        let mut config = ComposeConfig::default();
        config.canvas.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_blur_radius() {
        let mut config = ComposeConfig::default();
        config.background.blur_radius = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_nan_blur_radius() {
        let mut config = ComposeConfig::default();
        config.background.blur_radius = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_ratio_out_of_range() {
        let mut config = ComposeConfig::default();
        config.foreground.y_ratio = 1.01;
        assert!(config.validate().is_err());

        let mut config = ComposeConfig::default();
        config.foreground.y_ratio = -0.01;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_ratio_boundaries() {
        for ratio in [0.0, 1.0] {
            let mut config = ComposeConfig::default();
            config.foreground.y_ratio = ratio;
            assert!(config.validate().is_ok(), "ratio {ratio} must validate");
        }
    }

    #[test]
    fn validate_accepts_zero_blur() {
        let mut config = ComposeConfig::default();
        config.background.blur_radius = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn merge_overlays_single_section() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[foreground]\ny_ratio = 0.5").unwrap();

        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.foreground.y_ratio, 0.5);
        // Untouched sections keep their defaults
        assert_eq!(config.canvas.width, 1080);
        assert_eq!(config.background.blur_radius, 30.0);
    }

    #[test]
    fn merge_preserves_sibling_keys() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[canvas]\nwidth = 720").unwrap();

        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.canvas.width, 720);
        assert_eq!(config.canvas.height, 1920);
    }

    #[test]
    fn resolve_rejects_unknown_keys() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[canvas]\nwdith = 720").unwrap();

        assert!(matches!(
            resolve_config(base, Some(overlay)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn resolve_rejects_invalid_values() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[foreground]\ny_ratio = 2.0").unwrap();

        assert!(matches!(
            resolve_config(base, Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_config_without_file_yields_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, ComposeConfig::default());
    }

    #[test]
    fn load_config_reads_overrides_from_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[background]\nblur_radius = 12.0\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.background.blur_radius, 12.0);
        assert_eq!(config.canvas.width, 1080);
    }

    #[test]
    fn load_config_file_requires_the_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = load_config_file(&tmp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_config_file_reads_explicit_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(&path, "[canvas]\nwidth = 800\nheight = 600\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "[canvas\nwidth = ").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let parsed: ComposeConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, ComposeConfig::default());
    }
}
