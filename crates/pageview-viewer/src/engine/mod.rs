//! Viewer engine: the single owner of interaction state.
//!
//! Adapters call one verb, then re-query enablement and checked state. Each
//! verb either completes and publishes its events before returning or fails
//! without touching state.
//!
//! This module is split into submodules:
//! - `document`: open/close
//! - `zoom`: fit mode, zoom steps, zoom history
//! - `navigation`: tiles, pages, rotation, viewport size
//! - `tools`: cursor tool selection
//! - `gestures`: pointer input interpreted per tool
//! - `layers`: layer-object verbs
//! - `commands`: command execution and enablement

mod commands;
mod document;
mod gestures;
mod layers;
mod navigation;
mod tools;
mod zoom;

use pageview_core::{
    CursorTool, EventBus, FeatureSet, FitMode, Orientation, Point, Rect, Size, ViewerEvent,
};
use pageview_settings::ViewerConfig;

use crate::cursor_tool::CursorToolController;
use crate::layer_objects::{LayerObject, LayerObjectStore};
use crate::page::PageController;
use crate::tiling::{TileLayout, TileNavigator, TilePosition};
use crate::view::{ViewState, ZoomLimits};
use crate::zoom_history::{ZoomHistory, ZoomSnapshot};

pub use gestures::Gesture;

const SCALE_EPSILON: f64 = 1e-9;

/// Viewport and tiling parameters needed to lay out a page
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub viewport: Size,
    pub overlap: f64,
    pub limits: ZoomLimits,
}

/// State that exists only while a document is open
#[derive(Debug, Clone)]
pub(crate) struct OpenDocument {
    pub pages: PageController,
    pub history: ZoomHistory,
    pub view: ViewState,
    pub tiles: TileNavigator,
    pub layers: LayerObjectStore,
    pub selected: Option<u64>,
    pub gesture: Option<Gesture>,
}

impl OpenDocument {
    /// Lays out the current page under `fit_mode` and updates the view.
    ///
    /// Without tiling the scale is kept and the top of the page is shown.
    pub fn relayout(&mut self, frame: &Frame, fit_mode: FitMode, position: TilePosition) {
        let page = self.pages.current_page();
        let Some(display) = self.pages.display_size(page) else {
            self.tiles.clear();
            self.view = ViewState::at(self.view.scale_factor, Point::new(0.0, 0.0), frame.viewport);
            return;
        };

        let layout =
            TileLayout::compute(fit_mode, display, frame.viewport, frame.overlap, &frame.limits);
        self.tiles.relayout(layout, position);
        self.view = match self.tiles.current_view() {
            Some(view) => view,
            None => ViewState::page_top(self.view.scale_factor, display, frame.viewport),
        };
    }

    pub fn snapshot(&self, fit_mode: FitMode) -> ZoomSnapshot {
        ZoomSnapshot {
            scale_factor: self.view.scale_factor,
            source_rectangle: self.view.source_rectangle,
            page: self.pages.current_page(),
            fit_mode,
        }
    }

    /// Clears the history and seeds it with the current view.
    pub fn reseed_history(&mut self, fit_mode: FitMode) {
        let snapshot = self.snapshot(fit_mode);
        self.history.clear();
        self.history.push(snapshot);
    }

    pub fn zoom_event(&self) -> ViewerEvent {
        ViewerEvent::ZoomChanged {
            scale_factor: self.view.scale_factor,
            source_rectangle: self.view.source_rectangle,
            page: self.pages.current_page(),
        }
    }

    /// Drops page-scoped interaction state.
    pub fn leave_page(&mut self) {
        self.selected = None;
        self.gesture = None;
    }
}

/// Interaction state engine of a document viewer
pub struct ViewerEngine {
    config: ViewerConfig,
    limits: ZoomLimits,
    features: FeatureSet,
    bus: EventBus,
    viewport: Size,
    tools: CursorToolController,
    fit_mode: FitMode,
    highlight_height: f64,
    last_highlighter: CursorTool,
    document: Option<OpenDocument>,
}

impl ViewerEngine {
    /// Creates an engine with its own event bus.
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_event_bus(config, EventBus::new())
    }

    /// Creates an engine publishing on `bus`.
    pub fn with_event_bus(config: ViewerConfig, bus: EventBus) -> Self {
        let limits = ZoomLimits {
            min_scale: config.zoom.min_scale,
            max_scale: config.zoom.max_scale,
            step_factor: config.zoom.step_factor,
        };
        let features = config.features;
        let viewport = Size::new(config.viewport.width, config.viewport.height);
        let highlight_height = config.defaults.highlight_height;

        Self {
            limits,
            features,
            bus,
            viewport,
            tools: CursorToolController::new(features),
            fit_mode: config.defaults.fit_mode,
            highlight_height,
            last_highlighter: CursorTool::RectangularHighlight,
            document: None,
            config,
        }
    }

    /// Event bus the engine publishes on.
    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }

    pub(crate) fn frame(&self) -> Frame {
        Frame {
            viewport: self.viewport,
            overlap: self.config.tiling.overlap,
            limits: self.limits,
        }
    }

    pub(crate) fn emit_all(&self, events: Vec<ViewerEvent>) {
        for event in events {
            tracing::trace!("Publishing {}", event.description());
            // Nobody listening is not an error for the engine.
            self.bus.publish(event).ok();
        }
    }

    // Queries

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    pub fn page_count(&self) -> u32 {
        self.document.as_ref().map_or(0, |d| d.pages.page_count())
    }

    /// 1-based current page; 0 without a document or for an empty one.
    pub fn current_page(&self) -> u32 {
        self.document.as_ref().map_or(0, |d| d.pages.current_page())
    }

    pub fn orientation(&self, page: u32) -> Orientation {
        self.document
            .as_ref()
            .map(|d| d.pages.orientation(page))
            .unwrap_or_default()
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn active_tool(&self) -> CursorTool {
        self.tools.active()
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn view(&self) -> Option<ViewState> {
        self.document.as_ref().map(|d| d.view)
    }

    /// Display scale; 1.0 without a document.
    pub fn scale_factor(&self) -> f64 {
        self.view().map_or(1.0, |v| v.scale_factor)
    }

    /// Visible part of the displayed page.
    pub fn source_rectangle(&self) -> Option<Rect> {
        self.view().map(|v| v.source_rectangle)
    }

    pub fn tile_index(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.tiles.index())
    }

    pub fn tile_count(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.tiles.tile_count())
    }

    pub fn highlight_height(&self) -> f64 {
        self.highlight_height
    }

    pub fn layer_objects(&self, page: u32) -> &[LayerObject] {
        self.document
            .as_ref()
            .map(|d| d.layers.on_page(page))
            .unwrap_or(&[])
    }

    pub fn layer_object(&self, id: u64) -> Option<&LayerObject> {
        self.document.as_ref().and_then(|d| d.layers.get(id))
    }

    pub fn selected_layer_object(&self) -> Option<u64> {
        self.document.as_ref().and_then(|d| d.selected)
    }

    /// Returns true when the layer objects of `page` are shown.
    ///
    /// Without the view-perspective feature a rotated page hides its
    /// overlay until it is back at 0°.
    pub fn is_overlay_visible(&self, page: u32) -> bool {
        let Some(doc) = &self.document else {
            return false;
        };
        doc.pages.is_valid_page(page)
            && (self.features.view_perspective || doc.pages.orientation(page) == Orientation::Deg0)
    }
}

impl Default for ViewerEngine {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl std::fmt::Debug for ViewerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerEngine")
            .field("page", &self.current_page())
            .field("page_count", &self.page_count())
            .field("fit_mode", &self.fit_mode)
            .field("tool", &self.tools.active())
            .field("scale_factor", &self.scale_factor())
            .finish()
    }
}
