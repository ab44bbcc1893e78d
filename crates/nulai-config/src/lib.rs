//! Configuration file handling for nulai.
//!
//! The configuration lives in `<config_dir>/config.toml` unless a path is
//! given explicitly. Every field has a default, so a partial file (or no file
//! at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use nulai_core::{AccentTheme, RotationMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text drawn in block letters at the center of the grid.
    pub title: String,
    /// Single line shown under the title. Empty hides it.
    pub tagline: String,
    pub accent: AccentTheme,
    pub grid: GridConfig,
    pub animation: AnimationConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "NULAI".to_string(),
            tagline: "BUILT FOR EVERY KIND OF CREATOR".to_string(),
            accent: AccentTheme::default(),
            grid: GridConfig::default(),
            animation: AnimationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Orbit geometry, in world pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub enabled: bool,
    pub ring_count: usize,
    pub base_radius: f32,
    pub ring_spacing: f32,
    pub stretch_x: f32,
    pub stretch_y: f32,
    pub exclusion_x: f32,
    pub exclusion_y: f32,
    pub title_padding_x: f32,
    pub title_padding_y: f32,
    pub glow_radius: f32,
    /// Replaces the built-in audience catalog when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<String>>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ring_count: 5,
            base_radius: 350.0,
            ring_spacing: 120.0,
            stretch_x: 1.8,
            stretch_y: 0.6,
            exclusion_x: 450.0,
            exclusion_y: 150.0,
            title_padding_x: 120.0,
            title_padding_y: 60.0,
            glow_radius: 200.0,
            catalog: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frame_interval_ms: u64,
    /// Radians per frame, or per second in `per-second` mode.
    pub rotation_step: f32,
    pub rotation_mode: RotationMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            rotation_step: 0.0003,
            rotation_mode: RotationMode::PerFrame,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// World pixels covered by one terminal column.
    pub cell_width_px: f32,
    /// World pixels covered by one terminal row.
    pub cell_height_px: f32,
    pub noise: bool,
    /// Fraction of cells carrying a noise speck.
    pub noise_density: f32,
    /// Fraction of the remaining distance the cursor covers each frame.
    pub cursor_ease: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 12.0,
            cell_height_px: 24.0,
            noise: true,
            noise_density: 0.5,
            cursor_ease: 1.0,
        }
    }
}

/// Default location of the config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("app", "nulai", "nulai").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config_path()?, false),
        };

        if !required && !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&contents, &path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> String {
        // Only plain structs and enums, serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the geometry cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.grid;
        if g.ring_count == 0 {
            return Err(invalid("grid.ring_count must be at least 1"));
        }
        for (name, value) in [
            ("grid.base_radius", g.base_radius),
            ("grid.stretch_x", g.stretch_x),
            ("grid.stretch_y", g.stretch_y),
            ("grid.exclusion_x", g.exclusion_x),
            ("grid.exclusion_y", g.exclusion_y),
            ("grid.glow_radius", g.glow_radius),
            ("display.cell_width_px", self.display.cell_width_px),
            ("display.cell_height_px", self.display.cell_height_px),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(g.ring_spacing.is_finite() && g.ring_spacing >= 0.0) {
            return Err(invalid("grid.ring_spacing must not be negative"));
        }
        if !(g.title_padding_x >= 0.0 && g.title_padding_y >= 0.0) {
            return Err(invalid("grid.title_padding_* must not be negative"));
        }
        if g.stretch_x <= g.stretch_y {
            return Err(invalid(format!(
                "grid.stretch_x ({}) must exceed grid.stretch_y ({})",
                g.stretch_x, g.stretch_y
            )));
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(invalid("animation.frame_interval_ms must be at least 1"));
        }
        let step = self.animation.rotation_step;
        if !(step.is_finite() && step >= 0.0) {
            return Err(invalid(format!(
                "animation.rotation_step must be finite and not negative, got {step}"
            )));
        }
        if !(0.0..=1.0).contains(&self.display.noise_density) {
            return Err(invalid("display.noise_density must be within 0..=1"));
        }
        let ease = self.display.cursor_ease;
        if !(ease > 0.0 && ease <= 1.0) {
            return Err(invalid("display.cursor_ease must be within (0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid.ring_count, 5);
        assert_eq!(config.animation.rotation_mode, RotationMode::PerFrame);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            title = "Hello"
            accent = "cyan"

            [grid]
            ring_count = 3
            catalog = ["ONE", "TWO"]

            [animation]
            rotation_mode = "per-second"
            rotation_step = 0.02
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Hello");
        assert_eq!(config.accent, AccentTheme::Cyan);
        assert_eq!(config.grid.ring_count, 3);
        assert_eq!(config.grid.base_radius, 350.0);
        assert_eq!(config.grid.catalog.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(config.animation.rotation_mode, RotationMode::PerSecond);
        assert_eq!(config.animation.frame_interval_ms, 16);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            "[grid]\nring_count = 0",
            "[grid]\nstretch_x = 0.5",
            "[grid]\nstretch_x = nan",
            "[grid]\nstretch_x = inf",
            "[grid]\nglow_radius = 0",
            "[animation]\nframe_interval_ms = 0",
            "[animation]\nrotation_step = -0.001",
            "[animation]\nrotation_step = nan",
            "[display]\nnoise_density = 1.5",
            "[display]\ncursor_ease = 0",
        ];
        for case in cases {
            assert!(
                matches!(Config::from_toml(case), Err(ConfigError::Invalid(_))),
                "{case}"
            );
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::from_toml("[grid\nring_count = 1"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::from_toml("accent = \"purple\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/nulai/config.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            title: "ORBIT".to_string(),
            ..Default::default()
        };
        assert_eq!(Config::from_toml(&config.to_toml()).unwrap(), config);
    }
}
