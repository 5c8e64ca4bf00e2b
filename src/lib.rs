//! # PageView
//!
//! Interaction state engine for document image viewers:
//! - Cursor tools with override gestures and licensing
//! - Zoom history with fit-to-page and fit-to-width modes
//! - Tile-by-tile reading across page boundaries
//! - Page navigation and per-page rotation
//!
//! ## Architecture
//!
//! PageView is organized as a workspace with multiple crates:
//!
//! 1. **pageview-core** - Geometry, vocabularies, errors, event bus
//! 2. **pageview-settings** - Viewer configuration files
//! 3. **pageview-viewer** - The engine, its controllers and the command table
//! 4. **pageview** - Script runner binary that integrates all crates

pub mod cli;
pub mod script;

pub use pageview_core::{
    CursorTool, EventBus, EventBusConfig, EventCategory, EventFilter, FeatureSet, FitMode,
    LayerObjectKind, Orientation, Point, Rect, Size, ViewerError, ViewerEvent,
};
pub use pageview_settings::{default_config_path, ViewerConfig};
pub use pageview_viewer::{
    CommandBar, CommandId, DocumentInfo, LayerObjectShape, RotateOptions, ViewState,
    ViewerEngine,
};
pub use cli::Cli;
pub use script::{ScriptStep, StepOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for status lines
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
