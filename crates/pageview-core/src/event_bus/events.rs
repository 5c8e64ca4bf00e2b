//! Event type definitions for the event bus.
//!
//! Every state-changing verb of the viewer engine raises zero or more of
//! these, in a fixed order. Each event carries enough data for an adapter to
//! refresh a status label without re-querying the engine.

use serde::{Deserialize, Serialize};

use crate::data::{CursorTool, FitMode, LayerObjectKind, Orientation, Rect};

/// Root event enum for all viewer events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewerEvent {
    /// A document was opened.
    DocumentOpened {
        /// Number of pages in the new document.
        page_count: u32,
    },
    /// The open document was closed.
    DocumentClosed,
    /// Scale or visible rectangle changed.
    ZoomChanged {
        /// Display scale (1.0 = one page unit per pixel).
        scale_factor: f64,
        /// Visible part of the displayed page, in page units.
        source_rectangle: Rect,
        /// Page being shown.
        page: u32,
    },
    /// Current page changed.
    PageChanged {
        /// New 1-based page number (0 when the document is empty).
        page: u32,
        /// Page shown before the change.
        previous: u32,
        /// Pages in the document.
        page_count: u32,
    },
    /// Fit mode changed.
    FitModeChanged {
        /// New fit mode.
        fit_mode: FitMode,
        /// Fit mode before the change.
        previous: FitMode,
    },
    /// Active cursor tool changed.
    CursorToolChanged {
        /// New active tool.
        tool: CursorTool,
        /// Tool active before the change.
        previous: CursorTool,
    },
    /// A page was rotated.
    OrientationChanged {
        /// The page the verb was invoked on.
        page: u32,
        /// Its new orientation.
        orientation: Orientation,
        /// Whether every page was rotated rather than just `page`.
        all_pages: bool,
    },
    /// A layer object was created.
    LayerObjectAdded {
        page: u32,
        id: u64,
        kind: LayerObjectKind,
    },
    /// A layer object's geometry changed.
    LayerObjectChanged { page: u32, id: u64 },
    /// A layer object was removed.
    LayerObjectDeleted { page: u32, id: u64 },
}

impl ViewerEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            ViewerEvent::DocumentOpened { .. } | ViewerEvent::DocumentClosed => {
                EventCategory::Document
            }
            ViewerEvent::ZoomChanged { .. } => EventCategory::Zoom,
            ViewerEvent::PageChanged { .. } => EventCategory::Page,
            ViewerEvent::FitModeChanged { .. } => EventCategory::FitMode,
            ViewerEvent::CursorToolChanged { .. } => EventCategory::CursorTool,
            ViewerEvent::OrientationChanged { .. } => EventCategory::Orientation,
            ViewerEvent::LayerObjectAdded { .. }
            | ViewerEvent::LayerObjectChanged { .. }
            | ViewerEvent::LayerObjectDeleted { .. } => EventCategory::LayerObject,
        }
    }

    /// Get a short description of this event for logging and status bars
    pub fn description(&self) -> String {
        match self {
            ViewerEvent::DocumentOpened { page_count } => {
                format!("Document opened ({} pages)", page_count)
            }
            ViewerEvent::DocumentClosed => "Document closed".to_string(),
            ViewerEvent::ZoomChanged {
                scale_factor, page, ..
            } => format!("Zoom: {:.0}% on page {}", scale_factor * 100.0, page),
            ViewerEvent::PageChanged {
                page, page_count, ..
            } => format!("Page {} of {}", page, page_count),
            ViewerEvent::FitModeChanged { fit_mode, .. } => format!("Fit mode: {}", fit_mode),
            ViewerEvent::CursorToolChanged { tool, .. } => format!("Tool: {}", tool),
            ViewerEvent::OrientationChanged {
                page,
                orientation,
                all_pages,
            } => {
                if *all_pages {
                    format!("All pages rotated to {}", orientation)
                } else {
                    format!("Page {} rotated to {}", page, orientation)
                }
            }
            ViewerEvent::LayerObjectAdded { page, id, kind } => {
                format!("{:?} #{} added on page {}", kind, id, page)
            }
            ViewerEvent::LayerObjectChanged { page, id } => {
                format!("Layer object #{} changed on page {}", id, page)
            }
            ViewerEvent::LayerObjectDeleted { page, id } => {
                format!("Layer object #{} deleted on page {}", id, page)
            }
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Document open/close.
    Document,
    /// Scale and visible rectangle.
    Zoom,
    /// Current page.
    Page,
    /// Fit mode.
    FitMode,
    /// Active cursor tool.
    CursorTool,
    /// Page rotation.
    Orientation,
    /// Layer objects added, changed or deleted.
    LayerObject,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Document => write!(f, "Document"),
            EventCategory::Zoom => write!(f, "Zoom"),
            EventCategory::Page => write!(f, "Page"),
            EventCategory::FitMode => write!(f, "FitMode"),
            EventCategory::CursorTool => write!(f, "CursorTool"),
            EventCategory::Orientation => write!(f, "Orientation"),
            EventCategory::LayerObject => write!(f, "LayerObject"),
        }
    }
}
