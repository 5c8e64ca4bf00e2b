//! Toolbar and menu commands.
//!
//! Every command is described by a static [`CommandDescriptor`]. Adapters
//! never keep their own enabled/checked flags: a [`CommandBar`] derives them
//! from engine queries after each verb.

use pageview_core::ViewerError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::engine::ViewerEngine;

/// Identifier of a viewer command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    ZoomIn,
    ZoomOut,
    ZoomPrevious,
    ZoomNext,
    FitToPage,
    FitToWidth,
    PanTool,
    ZoomWindowTool,
    SelectTool,
    Highlighter,
    RectangularHighlightTool,
    AngularHighlightTool,
    SetHighlightHeightTool,
    DeleteLayerObjectsTool,
    NextTile,
    PreviousTile,
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    RotateLeft,
    RotateRight,
    DeleteSelected,
    CloseDocument,
}

/// Push buttons run once; toggle buttons show a checked state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Push,
    Toggle,
}

/// Static presentation data of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub id: CommandId,
    /// Script and configuration name
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: CommandKind,
    pub shortcut: Option<&'static str>,
}

const fn push(
    id: CommandId,
    name: &'static str,
    label: &'static str,
    icon: &'static str,
    shortcut: Option<&'static str>,
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        name,
        label,
        icon,
        kind: CommandKind::Push,
        shortcut,
    }
}

const fn toggle(
    id: CommandId,
    name: &'static str,
    label: &'static str,
    icon: &'static str,
    shortcut: Option<&'static str>,
) -> CommandDescriptor {
    CommandDescriptor {
        id,
        name,
        label,
        icon,
        kind: CommandKind::Toggle,
        shortcut,
    }
}

/// Every command, in toolbar order
pub static COMMANDS: [CommandDescriptor; 24] = [
    push(
        CommandId::ZoomIn,
        "zoom-in",
        "Zoom In",
        "zoom-in",
        Some("Ctrl++"),
    ),
    push(
        CommandId::ZoomOut,
        "zoom-out",
        "Zoom Out",
        "zoom-out",
        Some("Ctrl+-"),
    ),
    push(
        CommandId::ZoomPrevious,
        "zoom-previous",
        "Previous Zoom",
        "zoom-previous",
        Some("Alt+Left"),
    ),
    push(
        CommandId::ZoomNext,
        "zoom-next",
        "Next Zoom",
        "zoom-next",
        Some("Alt+Right"),
    ),
    toggle(
        CommandId::FitToPage,
        "fit-to-page",
        "Fit to Page",
        "zoom-fit-best",
        Some("Ctrl+0"),
    ),
    toggle(
        CommandId::FitToWidth,
        "fit-to-width",
        "Fit to Width",
        "zoom-fit-width",
        Some("Ctrl+9"),
    ),
    toggle(CommandId::PanTool, "pan-tool", "Pan", "tool-pan", Some("P")),
    toggle(
        CommandId::ZoomWindowTool,
        "zoom-window-tool",
        "Zoom Window",
        "tool-zoom-window",
        Some("Z"),
    ),
    toggle(
        CommandId::SelectTool,
        "select-tool",
        "Select",
        "tool-pointer",
        Some("S"),
    ),
    toggle(
        CommandId::Highlighter,
        "highlighter",
        "Highlighter",
        "draw-highlight",
        Some("H"),
    ),
    toggle(
        CommandId::RectangularHighlightTool,
        "rectangular-highlight-tool",
        "Rectangular Highlight",
        "draw-rectangle",
        None,
    ),
    toggle(
        CommandId::AngularHighlightTool,
        "angular-highlight-tool",
        "Angular Highlight",
        "draw-line",
        None,
    ),
    toggle(
        CommandId::SetHighlightHeightTool,
        "set-highlight-height-tool",
        "Highlight Height",
        "draw-height",
        None,
    ),
    toggle(
        CommandId::DeleteLayerObjectsTool,
        "delete-layer-objects-tool",
        "Delete Objects",
        "edit-delete-area",
        None,
    ),
    push(
        CommandId::NextTile,
        "next-tile",
        "Next Tile",
        "go-down",
        Some("Space"),
    ),
    push(
        CommandId::PreviousTile,
        "previous-tile",
        "Previous Tile",
        "go-up",
        Some("Shift+Space"),
    ),
    push(
        CommandId::FirstPage,
        "first-page",
        "First Page",
        "go-first",
        Some("Home"),
    ),
    push(
        CommandId::PreviousPage,
        "previous-page",
        "Previous Page",
        "go-previous",
        Some("PageUp"),
    ),
    push(
        CommandId::NextPage,
        "next-page",
        "Next Page",
        "go-next",
        Some("PageDown"),
    ),
    push(
        CommandId::LastPage,
        "last-page",
        "Last Page",
        "go-last",
        Some("End"),
    ),
    push(
        CommandId::RotateLeft,
        "rotate-left",
        "Rotate Left",
        "object-rotate-left",
        Some("Ctrl+L"),
    ),
    push(
        CommandId::RotateRight,
        "rotate-right",
        "Rotate Right",
        "object-rotate-right",
        Some("Ctrl+R"),
    ),
    push(
        CommandId::DeleteSelected,
        "delete-selected",
        "Delete",
        "edit-delete",
        Some("Delete"),
    ),
    push(
        CommandId::CloseDocument,
        "close-document",
        "Close",
        "document-close",
        Some("Ctrl+W"),
    ),
];

impl CommandId {
    pub fn descriptor(self) -> &'static CommandDescriptor {
        // The table lists every id in declaration order.
        &COMMANDS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn all() -> impl Iterator<Item = CommandId> {
        COMMANDS.iter().map(|d| d.id)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown command name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct ParseCommandError(pub String);

impl FromStr for CommandId {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        COMMANDS
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.id)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

/// Derived state of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandState {
    pub id: CommandId,
    pub enabled: bool,
    pub checked: bool,
}

/// A row of commands whose state is refreshed from the engine
#[derive(Debug, Clone)]
pub struct CommandBar {
    states: Vec<CommandState>,
}

impl CommandBar {
    pub fn builder() -> CommandBarBuilder {
        CommandBarBuilder::default()
    }

    /// Bar holding every command.
    pub fn standard() -> Self {
        Self::builder().commands(CommandId::all()).build()
    }

    pub fn states(&self) -> &[CommandState] {
        &self.states
    }

    pub fn state(&self, id: CommandId) -> Option<CommandState> {
        self.states.iter().find(|s| s.id == id).copied()
    }

    /// Re-evaluates every command against the engine.
    pub fn refresh(&mut self, engine: &ViewerEngine) {
        for state in &mut self.states {
            state.enabled = engine.is_command_enabled(state.id);
            state.checked = engine.is_command_checked(state.id);
        }
    }

    /// Runs a command and refreshes the bar.
    pub fn click(&mut self, engine: &mut ViewerEngine, id: CommandId) -> Result<(), ViewerError> {
        let result = engine.execute(id);
        self.refresh(engine);
        result
    }
}

/// Builder for [`CommandBar`]
#[derive(Debug, Default)]
pub struct CommandBarBuilder {
    commands: Vec<CommandId>,
}

impl CommandBarBuilder {
    pub fn command(mut self, id: CommandId) -> Self {
        if !self.commands.contains(&id) {
            self.commands.push(id);
        }
        self
    }

    pub fn commands(self, ids: impl IntoIterator<Item = CommandId>) -> Self {
        ids.into_iter().fold(self, Self::command)
    }

    pub fn build(self) -> CommandBar {
        CommandBar {
            states: self
                .commands
                .into_iter()
                .map(|id| CommandState {
                    id,
                    enabled: false,
                    checked: false,
                })
                .collect(),
        }
    }
}
