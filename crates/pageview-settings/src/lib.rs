//! PageView Settings Crate
//!
//! Handles viewer configuration: zoom limits, history depth, tiling,
//! start-up defaults and the licensed feature set.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, DefaultsSettings, TilingSettings, ViewerConfig, ViewportSettings,
    ZoomSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
