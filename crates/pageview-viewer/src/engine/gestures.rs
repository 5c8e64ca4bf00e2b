//! Pointer input interpreted by the active cursor tool.
//!
//! Positions are viewport pixels. They are mapped to displayed-page
//! coordinates through the view and then to unrotated page coordinates
//! through the page orientation before touching layer objects.

use pageview_core::{CursorTool, Point, Rect, ViewerEvent};

use super::{OpenDocument, ViewerEngine};
use crate::layer_objects::LayerObjectShape;

/// Pick tolerance around layer objects, in viewport pixels
const HIT_TOLERANCE_PX: f64 = 4.0;

/// Pointer gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Dragging the view; `last` is the previous pointer position.
    Pan { last: Point },
    /// Dragging a zoom rectangle from `start` (displayed page coordinates).
    ZoomWindow { start: Point },
    /// Dragging layer object `id` from `start` (page coordinates).
    MoveObject { id: u64, start: Point },
    /// Drawing a highlight from `start` (page coordinates).
    Highlight { tool: CursorTool, start: Point },
    /// Measuring a highlight height from the pointer row `start_y`.
    HighlightHeight { start_y: f64 },
    /// Dragging a delete rectangle from `start` (displayed page coordinates).
    Delete { start: Point },
}

fn to_page_point(doc: &OpenDocument, display: Point) -> Point {
    let page = doc.pages.current_page();
    match doc.pages.page_size(page) {
        Some(size) => doc.pages.orientation(page).to_page(display, size),
        None => display,
    }
}

impl ViewerEngine {
    /// Gesture started by the last `pointer_down`, if still running.
    pub fn gesture(&self) -> Option<Gesture> {
        self.document.as_ref().and_then(|d| d.gesture)
    }

    pub fn pointer_down(&mut self, position: Point) {
        let tool = self.tools.active();
        let overlay_visible = self.is_overlay_visible(self.current_page());
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        let page = doc.pages.current_page();
        if page == 0 {
            return;
        }

        let display = doc.view.screen_to_display(position);
        let page_point = to_page_point(doc, display);

        let gesture = match tool {
            CursorTool::None => return,
            CursorTool::Pan => Gesture::Pan { last: position },
            CursorTool::ZoomWindow => Gesture::ZoomWindow { start: display },
            _ if !overlay_visible => {
                tracing::debug!("Layer objects hidden on page {}; {} ignored", page, tool);
                if tool.is_override() {
                    let transition = self.tools.end_override_gesture();
                    self.publish_tool_change(transition);
                }
                return;
            }
            CursorTool::SelectLayerObject => {
                let tolerance = HIT_TOLERANCE_PX / doc.view.scale_factor;
                doc.selected = doc.layers.hit_test(page, page_point, tolerance);
                match doc.selected {
                    Some(id) => Gesture::MoveObject {
                        id,
                        start: page_point,
                    },
                    None => return,
                }
            }
            CursorTool::RectangularHighlight | CursorTool::AngularHighlight => Gesture::Highlight {
                tool,
                start: page_point,
            },
            CursorTool::SetHighlightHeight => Gesture::HighlightHeight {
                start_y: position.y,
            },
            CursorTool::DeleteLayerObjects => Gesture::Delete { start: display },
        };
        doc.gesture = Some(gesture);
    }

    /// Only panning reacts while the pointer moves.
    pub fn pointer_move(&mut self, position: Point) {
        let fit_mode = self.fit_mode;
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        let Some(Gesture::Pan { last }) = doc.gesture else {
            return;
        };
        let (dx, dy) = (position.x - last.x, position.y - last.y);
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        doc.view.pan_by_pixels(dx, dy);
        doc.tiles.follow(doc.view.source_rectangle.top());
        doc.gesture = Some(Gesture::Pan { last: position });
        let snapshot = doc.snapshot(fit_mode);
        doc.history.replace_current(snapshot);

        let events = vec![doc.zoom_event()];
        self.emit_all(events);
    }

    pub fn pointer_up(&mut self, position: Point) {
        let highlight_height = self.highlight_height;
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        let Some(gesture) = doc.gesture.take() else {
            return;
        };

        let page = doc.pages.current_page();
        let display = doc.view.screen_to_display(position);
        let page_point = to_page_point(doc, display);
        let mut events = Vec::new();
        let mut tool_change = None;

        match gesture {
            Gesture::Pan { .. } => {}
            Gesture::ZoomWindow { start } => {
                self.zoom_to_rectangle(Rect::from_points(start, display));
            }
            Gesture::MoveObject { id, start } => {
                let (dx, dy) = (page_point.x - start.x, page_point.y - start.y);
                if dx != 0.0 || dy != 0.0 {
                    if let Some(object) = doc.layers.get_mut(id) {
                        object.shape.translate(dx, dy);
                        events.push(ViewerEvent::LayerObjectChanged { page, id });
                    }
                }
            }
            Gesture::Highlight { tool, start } => {
                let shape = if tool == CursorTool::RectangularHighlight {
                    LayerObjectShape::Rectangle(Rect::from_points(start, page_point))
                } else {
                    LayerObjectShape::Angular {
                        start,
                        end: page_point,
                        height: highlight_height,
                    }
                };
                if !shape.is_degenerate() {
                    let id = doc.layers.add(page, shape);
                    events.push(ViewerEvent::LayerObjectAdded {
                        page,
                        id,
                        kind: shape.kind(),
                    });
                }
            }
            Gesture::HighlightHeight { start_y } => {
                let height = (position.y - start_y).abs() / doc.view.scale_factor;
                if height > 0.0 {
                    self.highlight_height = height;
                    let selected = doc.selected.and_then(|id| doc.layers.get_mut(id));
                    if let Some(object) = selected {
                        if let LayerObjectShape::Angular { height: h, .. } = &mut object.shape {
                            *h = height;
                            events.push(ViewerEvent::LayerObjectChanged {
                                page,
                                id: object.id,
                            });
                        }
                    }
                    tracing::debug!("Highlight height set to {:.1}", height);
                }
            }
            Gesture::Delete { start } => {
                let corner = to_page_point(doc, start);
                let area = Rect::from_points(corner, page_point);
                for id in doc.layers.intersecting(page, &area) {
                    if doc.layers.remove(id).is_some() {
                        if doc.selected == Some(id) {
                            doc.selected = None;
                        }
                        events.push(ViewerEvent::LayerObjectDeleted { page, id });
                    }
                }
                tool_change = self.tools.end_override_gesture();
            }
        }

        self.emit_all(events);
        self.publish_tool_change(tool_change);
    }

    /// Abandons the running gesture and ends any override tool.
    pub fn cancel_gesture(&mut self) {
        if let Some(doc) = self.document.as_mut() {
            doc.gesture = None;
        }
        let transition = self.tools.end_override_gesture();
        self.publish_tool_change(transition);
    }
}
