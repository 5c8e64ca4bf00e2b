//! # PageView Core
//!
//! Core types, errors and events shared by the PageView crates.
//! Provides the closed vocabularies of viewing state (fit modes, cursor
//! tools, page orientation), page geometry, licensing capabilities and the
//! synchronous event bus that command adapters listen on.

pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{
    CursorTool, FeatureSet, FitMode, LayerObjectKind, Orientation, Point, Rect, Size,
};

pub use error::{Error, Result, ViewerError};

// Re-export event bus for convenience
pub use event_bus::{
    EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, SubscriptionId,
    ViewerEvent,
};
