//! Command execution and enablement.

use pageview_core::{CursorTool, FitMode, ViewerError};

use super::ViewerEngine;
use crate::commands::CommandId;
use crate::page::RotateOptions;

fn tool_of(id: CommandId) -> Option<CursorTool> {
    match id {
        CommandId::PanTool => Some(CursorTool::Pan),
        CommandId::ZoomWindowTool => Some(CursorTool::ZoomWindow),
        CommandId::SelectTool => Some(CursorTool::SelectLayerObject),
        CommandId::RectangularHighlightTool => Some(CursorTool::RectangularHighlight),
        CommandId::AngularHighlightTool => Some(CursorTool::AngularHighlight),
        CommandId::SetHighlightHeightTool => Some(CursorTool::SetHighlightHeight),
        CommandId::DeleteLayerObjectsTool => Some(CursorTool::DeleteLayerObjects),
        _ => None,
    }
}

impl ViewerEngine {
    pub fn is_command_enabled(&self, id: CommandId) -> bool {
        if let Some(tool) = tool_of(id) {
            return self.is_tool_enabled(tool);
        }
        let has_pages = self.page_count() > 0;
        match id {
            CommandId::ZoomIn => self.can_zoom_in(),
            CommandId::ZoomOut => self.can_zoom_out(),
            CommandId::ZoomPrevious => self.can_zoom_previous(),
            CommandId::ZoomNext => self.can_zoom_next(),
            CommandId::FitToPage | CommandId::FitToWidth => has_pages,
            CommandId::Highlighter => self.is_tool_enabled(CursorTool::RectangularHighlight),
            CommandId::NextTile => self.can_select_next_tile(),
            CommandId::PreviousTile => self.can_select_previous_tile(),
            CommandId::FirstPage | CommandId::PreviousPage => self.can_go_previous(),
            CommandId::NextPage | CommandId::LastPage => self.can_go_next(),
            CommandId::RotateLeft | CommandId::RotateRight => has_pages,
            CommandId::DeleteSelected => {
                self.features.annotations && self.selected_layer_object().is_some()
            }
            CommandId::CloseDocument => self.has_document(),
            _ => false,
        }
    }

    pub fn is_command_checked(&self, id: CommandId) -> bool {
        if let Some(tool) = tool_of(id) {
            return self.has_document() && self.is_tool_checked(tool);
        }
        match id {
            CommandId::FitToPage => {
                self.has_document() && self.is_fit_mode_checked(FitMode::FitToPage)
            }
            CommandId::FitToWidth => {
                self.has_document() && self.is_fit_mode_checked(FitMode::FitToWidth)
            }
            CommandId::Highlighter => self.active_tool().is_highlighter(),
            _ => false,
        }
    }

    /// Runs the verb behind a command.
    ///
    /// Disabled commands do nothing, like a greyed-out button.
    pub fn execute(&mut self, id: CommandId) -> Result<(), ViewerError> {
        if !self.is_command_enabled(id) {
            tracing::debug!("Command {} is disabled", id);
            return Ok(());
        }
        tracing::debug!("Executing {}", id);

        if let Some(tool) = tool_of(id) {
            self.set_cursor_tool(tool);
            return Ok(());
        }
        match id {
            CommandId::ZoomIn => self.zoom_in(),
            CommandId::ZoomOut => self.zoom_out(),
            CommandId::ZoomPrevious => self.zoom_previous(),
            CommandId::ZoomNext => self.zoom_next(),
            CommandId::FitToPage => self.toggle_fit_mode(FitMode::FitToPage),
            CommandId::FitToWidth => self.toggle_fit_mode(FitMode::FitToWidth),
            CommandId::Highlighter => self.select_highlighter(),
            CommandId::NextTile => {
                self.select_next_tile();
            }
            CommandId::PreviousTile => {
                self.select_previous_tile();
            }
            CommandId::FirstPage => {
                self.go_to_first();
            }
            CommandId::PreviousPage => {
                self.go_to_previous();
            }
            CommandId::NextPage => {
                self.go_to_next();
            }
            CommandId::LastPage => {
                self.go_to_last();
            }
            CommandId::RotateLeft => self.rotate(-90, RotateOptions::default())?,
            CommandId::RotateRight => self.rotate(90, RotateOptions::default())?,
            CommandId::DeleteSelected => self.delete_selected_layer_object()?,
            CommandId::CloseDocument => self.close_document(),
            _ => {}
        }
        Ok(())
    }
}
