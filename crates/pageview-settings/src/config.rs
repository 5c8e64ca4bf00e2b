//! Viewer configuration
//!
//! Provides configuration file handling and validation for the viewer
//! engine. Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Zoom behaviour (step factor, scale limits, history depth)
//! - Viewport size used until the host reports the real one
//! - Tiling (overlap between consecutive tiles)
//! - Start-up defaults (fit mode, cursor tool, highlight height)
//! - Licensed features

use pageview_core::{CursorTool, FeatureSet, FitMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Zoom behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Multiplier applied by one zoom-in step (divisor for zoom-out)
    pub step_factor: f64,
    /// Smallest allowed scale factor
    pub min_scale: f64,
    /// Largest allowed scale factor
    pub max_scale: f64,
    /// Number of zoom snapshots kept for zoom previous/next
    pub history_capacity: usize,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step_factor: 1.2,
            min_scale: 0.1,
            max_scale: 50.0,
            history_capacity: 20,
        }
    }
}

/// Viewport size in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Tiling behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TilingSettings {
    /// Fraction of a tile repeated at the top of the next one (0.0 - 0.9)
    pub overlap: f64,
}

/// State applied when a document is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    pub fit_mode: FitMode,
    pub cursor_tool: CursorTool,
    /// Band height of new angular highlights, in page units
    pub highlight_height: f64,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            fit_mode: FitMode::FitToPage,
            cursor_tool: CursorTool::Pan,
            highlight_height: 16.0,
        }
    }
}

/// Complete viewer configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub zoom: ZoomSettings,
    pub viewport: ViewportSettings,
    pub tiling: TilingSettings,
    pub defaults: DefaultsSettings,
    pub features: FeatureSet,
}

enum ConfigFormat {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<ConfigFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl ViewerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved viewer config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let zoom = &self.zoom;
        if zoom.step_factor <= 1.0 {
            return Err(SettingsError::invalid(
                "zoom.step_factor",
                "must be greater than 1",
            ));
        }

        if zoom.min_scale <= 0.0 || zoom.max_scale <= zoom.min_scale {
            return Err(SettingsError::invalid(
                "zoom.min_scale",
                "scale limits must satisfy 0 < min_scale < max_scale",
            ));
        }

        if zoom.history_capacity == 0 {
            return Err(SettingsError::invalid(
                "zoom.history_capacity",
                "must be > 0",
            ));
        }

        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return Err(SettingsError::invalid(
                "viewport",
                "dimensions must be > 0",
            ));
        }

        if !(0.0..=0.9).contains(&self.tiling.overlap) {
            return Err(ConfigError::ValueOutOfRange {
                key: "tiling.overlap".to_string(),
                value: self.tiling.overlap.to_string(),
            }
            .into());
        }

        if self.defaults.highlight_height <= 0.0 {
            return Err(SettingsError::invalid(
                "defaults.highlight_height",
                "must be > 0",
            ));
        }

        if self.defaults.cursor_tool.is_override() || self.defaults.cursor_tool == CursorTool::None
        {
            return Err(SettingsError::invalid(
                "defaults.cursor_tool",
                format!("{} cannot be the start-up tool", self.defaults.cursor_tool),
            ));
        }

        Ok(())
    }
}

/// Platform location of the viewer config file
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("pageview").join("viewer.toml"))
        .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
}
