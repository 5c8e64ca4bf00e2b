//! Layer objects (highlights) and their per-page store.
//!
//! Geometry is kept in unrotated page coordinates. Rotating a page only
//! changes how that geometry is displayed, never the stored values.

use pageview_core::{LayerObjectKind, Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geometry of a highlight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LayerObjectShape {
    /// Axis-aligned highlight
    Rectangle(Rect),
    /// Band of `height` centred on the segment `start`-`end`
    Angular { start: Point, end: Point, height: f64 },
}

impl LayerObjectShape {
    pub fn kind(&self) -> LayerObjectKind {
        match self {
            LayerObjectShape::Rectangle(_) => LayerObjectKind::RectangularHighlight,
            LayerObjectShape::Angular { .. } => LayerObjectKind::AngularHighlight,
        }
    }

    /// Axis-aligned bounds, including the band of an angular highlight.
    pub fn bounds(&self) -> Rect {
        match *self {
            LayerObjectShape::Rectangle(rect) => rect,
            LayerObjectShape::Angular { start, end, height } => {
                let half = height / 2.0;
                let line = Rect::from_points(start, end);
                Rect::new(
                    line.x - half,
                    line.y - half,
                    line.width + height,
                    line.height + height,
                )
            }
        }
    }

    /// Returns true when the shape is too small to keep.
    pub fn is_degenerate(&self) -> bool {
        match *self {
            LayerObjectShape::Rectangle(rect) => rect.is_empty(),
            LayerObjectShape::Angular { start, end, height } => {
                height <= 0.0 || (start.x == end.x && start.y == end.y)
            }
        }
    }

    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        match *self {
            LayerObjectShape::Rectangle(rect) => Rect::new(
                rect.x - tolerance,
                rect.y - tolerance,
                rect.width + 2.0 * tolerance,
                rect.height + 2.0 * tolerance,
            )
            .contains(point),
            LayerObjectShape::Angular { start, end, height } => {
                distance_to_segment(point, start, end) <= height / 2.0 + tolerance
            }
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            LayerObjectShape::Rectangle(rect) => *rect = rect.translated(dx, dy),
            LayerObjectShape::Angular { start, end, .. } => {
                *start = Point::new(start.x + dx, start.y + dy);
                *end = Point::new(end.x + dx, end.y + dy);
            }
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

/// A highlight owned by one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerObject {
    pub id: u64,
    pub page: u32,
    pub shape: LayerObjectShape,
}

impl LayerObject {
    pub fn kind(&self) -> LayerObjectKind {
        self.shape.kind()
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }
}

/// Layer objects of an open document, keyed by page
#[derive(Debug, Clone)]
pub struct LayerObjectStore {
    next_id: u64,
    pages: HashMap<u32, Vec<LayerObject>>,
}

impl LayerObjectStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pages: HashMap::new(),
        }
    }

    /// Adds a shape to `page` and returns its id.
    pub fn add(&mut self, page: u32, shape: LayerObjectShape) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pages.entry(page).or_default().push(LayerObject { id, page, shape });
        id
    }

    pub fn get(&self, id: u64) -> Option<&LayerObject> {
        self.pages.values().flatten().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut LayerObject> {
        self.pages.values_mut().flatten().find(|o| o.id == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<LayerObject> {
        for objects in self.pages.values_mut() {
            if let Some(pos) = objects.iter().position(|o| o.id == id) {
                return Some(objects.remove(pos));
            }
        }
        None
    }

    /// Objects of `page` in creation order (topmost last).
    pub fn on_page(&self, page: u32) -> &[LayerObject] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Topmost object of `page` under `point`.
    pub fn hit_test(&self, page: u32, point: Point, tolerance: f64) -> Option<u64> {
        self.on_page(page)
            .iter()
            .rev()
            .find(|o| o.shape.contains(point, tolerance))
            .map(|o| o.id)
    }

    /// Ids of the objects of `page` whose bounds touch `rect`.
    pub fn intersecting(&self, page: u32, rect: &Rect) -> Vec<u64> {
        self.on_page(page)
            .iter()
            .filter(|o| o.bounds().intersects(rect))
            .map(|o| o.id)
            .collect()
    }

    pub fn has_objects(&self, page: u32) -> bool {
        !self.on_page(page).is_empty()
    }

    pub fn count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}

impl Default for LayerObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> LayerObjectShape {
        LayerObjectShape::Angular {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 100.0),
            height: 10.0,
        }
    }

    #[test]
    fn test_ids_are_unique_across_pages() {
        let mut store = LayerObjectStore::new();
        let a = store.add(1, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let b = store.add(2, band());
        assert_ne!(a, b);
        assert_eq!(store.count(), 2);
        assert_eq!(store.get(b).map(|o| o.page), Some(2));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut store = LayerObjectStore::new();
        let below = store.add(1, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 50.0, 50.0)));
        let above = store.add(1, LayerObjectShape::Rectangle(Rect::new(10.0, 10.0, 50.0, 50.0)));

        assert_eq!(store.hit_test(1, Point::new(20.0, 20.0), 0.0), Some(above));
        assert_eq!(store.hit_test(1, Point::new(5.0, 5.0), 0.0), Some(below));
        assert_eq!(store.hit_test(2, Point::new(5.0, 5.0), 0.0), None);
    }

    #[test]
    fn test_angular_contains_uses_band() {
        let shape = band();
        assert!(shape.contains(Point::new(50.0, 50.0), 0.0));
        assert!(shape.contains(Point::new(52.0, 48.0), 0.0));
        assert!(!shape.contains(Point::new(80.0, 20.0), 0.0));
        assert_eq!(shape.bounds(), Rect::new(-5.0, -5.0, 110.0, 110.0));
    }

    #[test]
    fn test_intersecting_and_remove() {
        let mut store = LayerObjectStore::new();
        let a = store.add(1, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let b = store.add(1, LayerObjectShape::Rectangle(Rect::new(100.0, 100.0, 10.0, 10.0)));

        let hits = store.intersecting(1, &Rect::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(hits, vec![a]);

        assert!(store.remove(a).is_some());
        assert!(store.remove(a).is_none());
        assert_eq!(store.on_page(1).len(), 1);
        assert_eq!(store.on_page(1)[0].id, b);
    }

    #[test]
    fn test_translate_moves_geometry() {
        let mut shape = band();
        shape.translate(10.0, -5.0);
        match shape {
            LayerObjectShape::Angular { start, end, .. } => {
                assert_eq!(start, Point::new(10.0, -5.0));
                assert_eq!(end, Point::new(110.0, 95.0));
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_shapes() {
        assert!(LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 0.0, 5.0)).is_degenerate());
        assert!(!band().is_degenerate());
    }
}
