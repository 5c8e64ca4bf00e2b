//! Fit mode, zoom steps and zoom history.

use pageview_core::{FitMode, Point, Rect, ViewerEvent};

use super::{ViewerEngine, SCALE_EPSILON};
use crate::tiling::TilePosition;
use crate::view::ViewState;
use crate::zoom_history::ZoomSnapshot;

impl ViewerEngine {
    pub fn is_fit_mode_checked(&self, mode: FitMode) -> bool {
        self.fit_mode == mode
    }

    /// Switches to `mode` and refits the current page.
    ///
    /// Does nothing without a document or when `mode` is already active.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        if mode == self.fit_mode {
            return;
        }
        let frame = self.frame();
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        let previous = self.fit_mode;
        self.fit_mode = mode;

        if mode.is_fitted() {
            let top = doc.view.source_rectangle.top();
            doc.relayout(&frame, mode, TilePosition::Nearest(top));
        } else {
            doc.tiles.clear();
        }
        let snapshot = doc.snapshot(mode);
        let unchanged = doc
            .history
            .current()
            .is_some_and(|s| ViewState::from(*s).approx_eq(&doc.view));
        if unchanged {
            doc.history.replace_current(snapshot);
        } else {
            doc.history.push(snapshot);
        }

        tracing::debug!("Fit mode: {} -> {}", previous, mode);
        let events = vec![
            ViewerEvent::FitModeChanged {
                fit_mode: mode,
                previous,
            },
            doc.zoom_event(),
        ];
        self.emit_all(events);
    }

    /// Activates `mode`, or returns to manual zoom when it is already active.
    pub fn toggle_fit_mode(&mut self, mode: FitMode) {
        if !mode.is_fitted() {
            return;
        }
        if self.fit_mode == mode {
            self.set_fit_mode(FitMode::None);
        } else {
            self.set_fit_mode(mode);
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|d| d.view.scale_factor < self.limits.max_scale - SCALE_EPSILON)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|d| d.view.scale_factor > self.limits.min_scale + SCALE_EPSILON)
    }

    pub fn can_zoom_previous(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|d| d.history.can_go_back())
    }

    pub fn can_zoom_next(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|d| d.history.can_go_forward())
    }

    /// Zooms in by one step around the centre of the view.
    pub fn zoom_in(&mut self) {
        if self.can_zoom_in() {
            let scale = self.scale_factor() * self.limits.step_factor;
            self.zoom_around_center(scale);
        }
    }

    /// Zooms out by one step around the centre of the view.
    pub fn zoom_out(&mut self) {
        if self.can_zoom_out() {
            let scale = self.scale_factor() / self.limits.step_factor;
            self.zoom_around_center(scale);
        }
    }

    /// Zooms so that `rect` (displayed page coordinates) fills the viewport.
    ///
    /// Rectangles without area are ignored.
    pub fn zoom_to_rectangle(&mut self, rect: Rect) {
        if rect.is_empty() || self.document.is_none() {
            tracing::debug!("Ignoring zoom to degenerate rectangle {}", rect);
            return;
        }
        let viewport = self.viewport;
        let scale = self.limits.clamp(
            (viewport.width / rect.width).min(viewport.height / rect.height),
        );
        self.apply_manual_zoom(ViewState::centered(scale, rect.center(), viewport));
    }

    /// Restores the previous zoom snapshot; does nothing at the oldest one.
    pub fn zoom_previous(&mut self) {
        if !self.can_zoom_previous() {
            return;
        }
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        if let Ok(snapshot) = doc.history.go_back() {
            self.restore_snapshot(snapshot);
        }
    }

    /// Re-applies the next zoom snapshot; does nothing at the newest one.
    pub fn zoom_next(&mut self) {
        if !self.can_zoom_next() {
            return;
        }
        let Some(doc) = self.document.as_mut() else {
            return;
        };
        if let Ok(snapshot) = doc.history.go_forward() {
            self.restore_snapshot(snapshot);
        }
    }

    fn zoom_around_center(&mut self, scale: f64) {
        let Some(view) = self.view() else {
            return;
        };
        let scale = self.limits.clamp(scale);
        let center = view.source_rectangle.center();
        self.apply_manual_zoom(ViewState::centered(scale, center, self.viewport));
    }

    /// Applies a user zoom: leaves any fit mode and bookmarks the new view.
    fn apply_manual_zoom(&mut self, view: ViewState) {
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        let mut events = Vec::new();
        if self.fit_mode.is_fitted() {
            events.push(ViewerEvent::FitModeChanged {
                fit_mode: FitMode::None,
                previous: self.fit_mode,
            });
            self.fit_mode = FitMode::None;
        }

        doc.tiles.clear();
        doc.view = view;
        let snapshot = doc.snapshot(FitMode::None);
        doc.history.push(snapshot);
        events.push(doc.zoom_event());

        tracing::debug!("Zoom: {}", view);
        self.emit_all(events);
    }

    fn restore_snapshot(&mut self, snapshot: ZoomSnapshot) {
        let frame = self.frame();
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        let mut events = Vec::new();
        if snapshot.fit_mode != self.fit_mode {
            events.push(ViewerEvent::FitModeChanged {
                fit_mode: snapshot.fit_mode,
                previous: self.fit_mode,
            });
            self.fit_mode = snapshot.fit_mode;
        }

        // A fitted entry is laid out again for the current viewport; only
        // manual entries keep their stored scale.
        let stored = ViewState::from(snapshot);
        if snapshot.fit_mode.is_fitted() {
            doc.relayout(
                &frame,
                snapshot.fit_mode,
                TilePosition::Nearest(stored.source_rectangle.top()),
            );
        } else {
            let origin = stored.source_rectangle;
            doc.tiles.clear();
            doc.view = ViewState::at(
                stored.scale_factor,
                Point::new(origin.x, origin.y),
                frame.viewport,
            );
        }
        let current = doc.snapshot(snapshot.fit_mode);
        doc.history.replace_current(current);
        events.push(doc.zoom_event());

        self.emit_all(events);
    }
}
