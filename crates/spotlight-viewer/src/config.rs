//! Configuration loading and validation

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use spotlight_core::ToggleSettings;
use std::path::Path;
use tracing::{info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub toggle: ToggleSettings,
    /// Selectable images, in selection order
    #[serde(default = "default_images", rename = "image")]
    pub images: Vec<ImageConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            toggle: ToggleSettings::default(),
            images: default_images(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Background color as RGB (0.0-1.0)
    #[serde(default = "default_clear_color")]
    pub clear_color: [f32; 3],
    /// Directory image paths are resolved against
    #[serde(default = "default_assets_path")]
    pub assets_path: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            clear_color: default_clear_color(),
            assets_path: default_assets_path(),
        }
    }
}

fn default_title() -> String {
    "Spotlight".to_string()
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_clear_color() -> [f32; 3] {
    [0.1, 0.1, 0.15] // Dark blue-gray
}

fn default_assets_path() -> String {
    "assets".to_string()
}

/// One selectable image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Texture path relative to the assets directory
    #[serde(default)]
    pub path: Option<String>,
    /// Flat color as RGB (0.0-1.0), used when no path is set
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    /// Center position in pixels from the window center
    #[serde(default)]
    pub position: [f32; 2],
    /// Width and height in pixels
    #[serde(default = "default_image_size")]
    pub size: [f32; 2],
}

fn default_image_size() -> [f32; 2] {
    [120.0, 120.0]
}

const TILE_COLORS: [[f32; 3]; 5] = [
    [0.85, 0.33, 0.31],
    [0.95, 0.68, 0.25],
    [0.45, 0.75, 0.35],
    [0.30, 0.60, 0.85],
    [0.60, 0.40, 0.80],
];

/// Five colored tiles in a row, one per number key
fn default_images() -> Vec<ImageConfig> {
    TILE_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| ImageConfig {
            path: None,
            color: Some(*color),
            position: [(i as f32 - 2.0) * 180.0, 0.0],
            size: default_image_size(),
        })
        .collect()
}

impl ImageConfig {
    /// Color for a flat tile, falling back to the built-in palette
    pub fn tile_color(&self, index: usize) -> [f32; 3] {
        self.color
            .unwrap_or(TILE_COLORS[index % TILE_COLORS.len()])
    }
}

impl Config {
    /// Check values that would otherwise fail at runtime
    pub fn validate(&self) -> Result<()> {
        self.toggle.validate()?;

        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "Window size must be non-zero (got {}x{})",
                self.window.width,
                self.window.height
            );
        }

        for (i, image) in self.images.iter().enumerate() {
            if image.size.iter().any(|s| !s.is_finite() || *s <= 0.0) {
                bail!("Image {} has invalid size {:?}", i + 1, image.size);
            }
        }

        if self.images.is_empty() {
            warn!("No images configured, input will have no effect");
        } else if self.images.len() > 5 {
            warn!(
                count = self.images.len(),
                "Only the first five images can be selected by number key"
            );
        }

        Ok(())
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        config
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Config::default()
    };

    config.validate()?;
    Ok(config)
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&temp_dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.images.len(), 5);
        assert_eq!(config.toggle, ToggleSettings::default());
        assert_eq!(config.window.title, "Spotlight");
    }

    #[test]
    fn test_parse_images_and_toggle() {
        let toml = r#"
[window]
title = "Gallery"

[toggle]
stick_cooldown_secs = 0.25
gamepad_name_pattern = "DualSense"

[[image]]
path = "cards/ace.png"
position = [-100.0, 0.0]

[[image]]
color = [1.0, 1.0, 1.0]
position = [100.0, 0.0]
size = [64.0, 96.0]
"#;

        let config: Config = toml::from_str(toml).unwrap();
        config.validate().unwrap();

        assert_eq!(config.window.title, "Gallery");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.toggle.stick_cooldown_secs, 0.25);
        assert_eq!(config.toggle.stick_deadzone, 0.2);
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.images[0].path.as_deref(), Some("cards/ace.png"));
        assert_eq!(config.images[0].size, [120.0, 120.0]);
        assert_eq!(config.images[1].size, [64.0, 96.0]);
        assert_eq!(config.images[1].tile_color(1), [1.0, 1.0, 1.0]);
        assert_eq!(config.images[0].tile_color(0), TILE_COLORS[0]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spotlight.toml");

        std::fs::write(&path, "[toggle]\nstick_deadzone = 1.5\n").unwrap();
        assert!(load_config(&path).is_err());

        std::fs::write(&path, "[[image]]\nsize = [0.0, 10.0]\n").unwrap();
        assert!(load_config(&path).is_err());

        std::fs::write(&path, "[window]\nwidth = 0\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_default_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spotlight.toml");

        save_default_config(&path).unwrap();
        let config = load_config(&path).unwrap();

        assert_eq!(config.images, default_images());
        assert_eq!(config.toggle, ToggleSettings::default());
    }
}
