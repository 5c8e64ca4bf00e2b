//! Cursor tool state machine.
//!
//! Exactly one tool is active; `None` while no document is open. Switching
//! to another tool is the only way to turn a tool off, except for the
//! highlighter, which cycles between its rectangular and angular variants
//! when re-selected. `DeleteLayerObjects` is an override: it lasts for one
//! gesture and then hands control back to the tool it replaced.

use pageview_core::{CursorTool, FeatureSet};

/// A change of the active tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolTransition {
    pub previous: CursorTool,
    pub tool: CursorTool,
}

impl ToolTransition {
    fn new(previous: CursorTool, tool: CursorTool) -> Option<Self> {
        (previous != tool).then_some(Self { previous, tool })
    }
}

/// Active cursor tool and override state
#[derive(Debug, Clone)]
pub struct CursorToolController {
    active: CursorTool,
    overridden: Option<CursorTool>,
    document_open: bool,
    features: FeatureSet,
}

impl CursorToolController {
    pub fn new(features: FeatureSet) -> Self {
        Self {
            active: CursorTool::None,
            overridden: None,
            document_open: false,
            features,
        }
    }

    pub fn active(&self) -> CursorTool {
        self.active
    }

    /// Tool that will come back when the running override ends.
    pub fn overridden(&self) -> Option<CursorTool> {
        self.overridden
    }

    pub fn is_overriding(&self) -> bool {
        self.overridden.is_some()
    }

    pub fn is_checked(&self, tool: CursorTool) -> bool {
        self.active == tool
    }

    /// Returns true if `tool` can currently be activated.
    pub fn is_enabled(&self, tool: CursorTool) -> bool {
        if !self.document_open || tool == CursorTool::None {
            return false;
        }
        !tool.requires_annotations() || self.features.annotations
    }

    /// Activates `tool`.
    ///
    /// Returns the transition when the active tool changed. Disabled tools
    /// and re-selection of a non-highlighter tool are ignored.
    pub fn set_tool(&mut self, tool: CursorTool) -> Option<ToolTransition> {
        if !self.is_enabled(tool) {
            if self.document_open && tool.requires_annotations() {
                tracing::warn!("{} requires the annotations feature; ignored", tool);
            }
            return None;
        }

        if tool.is_override() {
            return self.begin_override_gesture(tool);
        }

        let tool = if tool == self.active {
            tool.highlight_partner()?
        } else {
            tool
        };

        self.overridden = None;
        let transition = ToolTransition::new(self.active, tool);
        self.active = tool;
        if let Some(t) = transition {
            tracing::debug!("Cursor tool: {} -> {}", t.previous, t.tool);
        }
        transition
    }

    /// Temporarily replaces the active tool for one gesture.
    ///
    /// Only one level deep: starting an override while one runs keeps the
    /// originally replaced tool.
    pub fn begin_override_gesture(&mut self, tool: CursorTool) -> Option<ToolTransition> {
        if !self.is_enabled(tool) {
            return None;
        }
        if self.overridden.is_none() {
            self.overridden = Some(self.active);
        }
        let transition = ToolTransition::new(self.active, tool);
        self.active = tool;
        if transition.is_some() {
            tracing::debug!("Override gesture started with {}", tool);
        }
        transition
    }

    /// Restores the tool that was active before the override began.
    pub fn end_override_gesture(&mut self) -> Option<ToolTransition> {
        let restored = self.overridden.take()?;
        let transition = ToolTransition::new(self.active, restored);
        self.active = restored;
        tracing::debug!("Override gesture ended, restored {}", restored);
        transition
    }

    /// Activates the start-up tool of a freshly opened document.
    ///
    /// Falls back to Pan when `default` is not usable.
    pub fn document_opened(&mut self, default: CursorTool) -> Option<ToolTransition> {
        self.document_open = true;
        self.overridden = None;

        let tool = if self.is_enabled(default) && !default.is_override() {
            default
        } else {
            tracing::warn!("Start-up tool {} unavailable, using Pan", default);
            CursorTool::Pan
        };
        let transition = ToolTransition::new(self.active, tool);
        self.active = tool;
        transition
    }

    /// Drops back to `None`.
    pub fn document_closed(&mut self) -> Option<ToolTransition> {
        self.document_open = false;
        self.overridden = None;
        let transition = ToolTransition::new(self.active, CursorTool::None);
        self.active = CursorTool::None;
        transition
    }
}
