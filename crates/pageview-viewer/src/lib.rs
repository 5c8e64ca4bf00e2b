//! # PageView Viewer
//!
//! Interaction state engine of a document image viewer: cursor tools, zoom
//! history, fit modes, page tiling, page navigation and rotation.
//!
//! Everything is synchronous. A verb on [`ViewerEngine`] updates state,
//! publishes its events on the engine's [`EventBus`](pageview_core::EventBus)
//! and returns; adapters then re-query enablement and checked state.
//!
//! ```
//! use pageview_core::{FitMode, Size};
//! use pageview_viewer::{DocumentInfo, ViewerEngine};
//!
//! let mut engine = ViewerEngine::default();
//! engine
//!     .open_document(DocumentInfo::uniform(4, Size::new(600.0, 800.0)))
//!     .unwrap();
//! engine.set_fit_mode(FitMode::FitToWidth);
//! engine.select_next_tile();
//! assert!(engine.can_zoom_previous());
//! ```

pub mod commands;
pub mod cursor_tool;
pub mod engine;
pub mod layer_objects;
pub mod page;
pub mod tiling;
pub mod view;
pub mod zoom_history;

pub use commands::{
    CommandBar, CommandBarBuilder, CommandDescriptor, CommandId, CommandKind, CommandState,
    ParseCommandError, COMMANDS,
};
pub use cursor_tool::{CursorToolController, ToolTransition};
pub use engine::{Gesture, ViewerEngine};
pub use layer_objects::{LayerObject, LayerObjectShape, LayerObjectStore};
pub use page::{DocumentInfo, PageController, RotateOptions};
pub use tiling::{TileLayout, TileNavigator, TilePosition, TileStep};
pub use view::{ViewState, ZoomLimits};
pub use zoom_history::{ZoomHistory, ZoomSnapshot, DEFAULT_HISTORY_CAPACITY};
