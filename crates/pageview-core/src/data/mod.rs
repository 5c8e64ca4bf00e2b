//! Viewing-state vocabularies shared across the engine.
//!
//! These are closed enums with a single authoritative value held by the
//! engine. Toolbar and menu adapters derive their checked state by comparing
//! against that value instead of owning booleans of their own.

mod geometry;

pub use geometry::{Point, Rect, Size};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy deriving the zoom scale from page and viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Manual zoom; no tiling.
    #[default]
    None,
    /// Whole page visible; one tile per page.
    FitToPage,
    /// Page width fills the viewport; the page is read as vertical tiles.
    FitToWidth,
}

impl FitMode {
    /// Returns true for the modes that define a tiling.
    pub fn is_fitted(self) -> bool {
        !matches!(self, FitMode::None)
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitMode::None => write!(f, "None"),
            FitMode::FitToPage => write!(f, "Fit to page"),
            FitMode::FitToWidth => write!(f, "Fit to width"),
        }
    }
}

/// How mouse gestures on the canvas are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorTool {
    /// No document is open.
    #[default]
    None,
    /// Drag to scroll the visible rectangle.
    Pan,
    /// Drag a rectangle to zoom into it.
    ZoomWindow,
    /// Click to select a layer object, drag to move it.
    SelectLayerObject,
    /// Drag to draw an axis-aligned highlight.
    RectangularHighlight,
    /// Drag to draw a highlight band along an arbitrary line.
    AngularHighlight,
    /// Drag vertically to set the angular highlight height.
    SetHighlightHeight,
    /// Drag a rectangle to delete the layer objects it touches.
    DeleteLayerObjects,
}

impl CursorTool {
    /// Every tool, in toolbar order.
    pub const ALL: [CursorTool; 8] = [
        CursorTool::None,
        CursorTool::Pan,
        CursorTool::ZoomWindow,
        CursorTool::SelectLayerObject,
        CursorTool::RectangularHighlight,
        CursorTool::AngularHighlight,
        CursorTool::SetHighlightHeight,
        CursorTool::DeleteLayerObjects,
    ];

    /// Returns true for the two highlighter variants.
    pub fn is_highlighter(self) -> bool {
        matches!(
            self,
            CursorTool::RectangularHighlight | CursorTool::AngularHighlight
        )
    }

    /// The other member of the highlighter family, if any.
    pub fn highlight_partner(self) -> Option<CursorTool> {
        match self {
            CursorTool::RectangularHighlight => Some(CursorTool::AngularHighlight),
            CursorTool::AngularHighlight => Some(CursorTool::RectangularHighlight),
            _ => None,
        }
    }

    /// Tools that create, edit or remove layer objects.
    pub fn requires_annotations(self) -> bool {
        matches!(
            self,
            CursorTool::SelectLayerObject
                | CursorTool::RectangularHighlight
                | CursorTool::AngularHighlight
                | CursorTool::SetHighlightHeight
                | CursorTool::DeleteLayerObjects
        )
    }

    /// Tools that only last for a single gesture and then hand back control.
    pub fn is_override(self) -> bool {
        matches!(self, CursorTool::DeleteLayerObjects)
    }
}

impl fmt::Display for CursorTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CursorTool::None => "None",
            CursorTool::Pan => "Pan",
            CursorTool::ZoomWindow => "Zoom window",
            CursorTool::SelectLayerObject => "Select",
            CursorTool::RectangularHighlight => "Rectangular highlight",
            CursorTool::AngularHighlight => "Angular highlight",
            CursorTool::SetHighlightHeight => "Set highlight height",
            CursorTool::DeleteLayerObjects => "Delete layer objects",
        };
        write!(f, "{}", name)
    }
}

/// Clockwise page rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Rotation in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// Normalizes any multiple of 90 (negative means counter-clockwise).
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Orientation::Deg0),
            90 => Some(Orientation::Deg90),
            180 => Some(Orientation::Deg180),
            _ => Some(Orientation::Deg270),
        }
    }

    /// Adds a rotation, returning None if `degrees` is not a multiple of 90.
    pub fn rotated_by(self, degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        Self::from_degrees(i32::from(self.degrees()) + degrees.rem_euclid(360))
    }

    /// Returns true when width and height trade places.
    pub fn is_transposed(self) -> bool {
        matches!(self, Orientation::Deg90 | Orientation::Deg270)
    }

    /// Size of an unrotated page as displayed under this orientation.
    pub fn display_size(self, page: Size) -> Size {
        if self.is_transposed() {
            page.transposed()
        } else {
            page
        }
    }

    /// Maps a point from unrotated page space into displayed space.
    pub fn to_display(self, point: Point, page: Size) -> Point {
        match self {
            Orientation::Deg0 => point,
            Orientation::Deg90 => Point::new(page.height - point.y, point.x),
            Orientation::Deg180 => Point::new(page.width - point.x, page.height - point.y),
            Orientation::Deg270 => Point::new(point.y, page.width - point.x),
        }
    }

    /// Maps a point from displayed space back into unrotated page space.
    pub fn to_page(self, point: Point, page: Size) -> Point {
        match self {
            Orientation::Deg0 => point,
            Orientation::Deg90 => Point::new(point.y, page.height - point.x),
            Orientation::Deg180 => Point::new(page.width - point.x, page.height - point.y),
            Orientation::Deg270 => Point::new(page.width - point.y, point.x),
        }
    }

    /// Maps a rectangle from unrotated page space into displayed space.
    pub fn rect_to_display(self, rect: Rect, page: Size) -> Rect {
        let a = self.to_display(Point::new(rect.left(), rect.top()), page);
        let b = self.to_display(Point::new(rect.right(), rect.bottom()), page);
        Rect::from_points(a, b)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Kinds of user-created layer objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerObjectKind {
    RectangularHighlight,
    AngularHighlight,
}

/// Licensed optional capabilities, fixed when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    /// Layer-object tools (highlights, selection, deletion).
    pub annotations: bool,
    /// Rotating pages while keeping their annotations visible.
    pub view_perspective: bool,
}

impl FeatureSet {
    /// Every optional capability enabled.
    pub fn all() -> Self {
        Self {
            annotations: true,
            view_perspective: true,
        }
    }

    /// No optional capability enabled.
    pub fn none() -> Self {
        Self {
            annotations: false,
            view_perspective: false,
        }
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::all()
    }
}
