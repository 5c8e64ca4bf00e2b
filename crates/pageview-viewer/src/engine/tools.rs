//! Cursor tool selection.

use pageview_core::{CursorTool, ViewerEvent};

use super::ViewerEngine;
use crate::cursor_tool::ToolTransition;

impl ViewerEngine {
    pub fn is_tool_enabled(&self, tool: CursorTool) -> bool {
        self.tools.is_enabled(tool)
    }

    pub fn is_tool_checked(&self, tool: CursorTool) -> bool {
        self.tools.is_checked(tool)
    }

    /// Highlighter variant the generic highlighter command selects.
    pub fn last_highlighter(&self) -> CursorTool {
        self.last_highlighter
    }

    /// Activates `tool`.
    ///
    /// Re-selecting the active highlighter swaps between its rectangular
    /// and angular variants; re-selecting any other tool does nothing.
    pub fn set_cursor_tool(&mut self, tool: CursorTool) {
        let transition = self.tools.set_tool(tool);
        if transition.is_some() {
            if let Some(doc) = self.document.as_mut() {
                doc.gesture = None;
            }
        }
        self.publish_tool_change(transition);
    }

    /// Selects the remembered highlighter, or cycles it when one is active.
    pub fn select_highlighter(&mut self) {
        let active = self.tools.active();
        let tool = if active.is_highlighter() {
            active
        } else {
            self.last_highlighter
        };
        self.set_cursor_tool(tool);
    }

    pub(crate) fn publish_tool_change(&mut self, transition: Option<ToolTransition>) {
        let Some(change) = transition else {
            return;
        };
        if change.tool.is_highlighter() {
            self.last_highlighter = change.tool;
        }
        self.emit_all(vec![ViewerEvent::CursorToolChanged {
            tool: change.tool,
            previous: change.previous,
        }]);
    }
}
