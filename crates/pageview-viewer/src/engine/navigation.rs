//! Tile and page navigation, rotation and viewport size.

use pageview_core::{FitMode, Point, Size, ViewerError, ViewerEvent};

use super::{Frame, OpenDocument, ViewerEngine};
use crate::page::{PageController, RotateOptions};
use crate::tiling::{TilePosition, TileStep};
use crate::view::ViewState;

/// Shows another tile of the current page. Tile moves add no history entry.
fn move_within_page(doc: &mut OpenDocument, fit_mode: FitMode, index: usize) -> Vec<ViewerEvent> {
    let Some(view) = doc.tiles.select(index) else {
        return Vec::new();
    };
    doc.view = view;
    let snapshot = doc.snapshot(fit_mode);
    doc.history.replace_current(snapshot);
    vec![doc.zoom_event()]
}

/// Applies a page move and lays out the new page.
///
/// Returns no events when `go` leaves the page unchanged.
fn change_page(
    doc: &mut OpenDocument,
    frame: &Frame,
    fit_mode: FitMode,
    position: TilePosition,
    go: impl FnOnce(&mut PageController) -> Option<u32>,
) -> Vec<ViewerEvent> {
    let Some(previous) = go(&mut doc.pages) else {
        return Vec::new();
    };

    doc.leave_page();
    doc.relayout(frame, fit_mode, position);
    doc.reseed_history(fit_mode);

    let page = doc.pages.current_page();
    tracing::debug!("Page {} -> {}", previous, page);
    vec![
        ViewerEvent::PageChanged {
            page,
            previous,
            page_count: doc.pages.page_count(),
        },
        doc.zoom_event(),
    ]
}

impl ViewerEngine {
    pub fn can_select_next_tile(&self) -> bool {
        self.document.as_ref().is_some_and(|d| {
            d.tiles.next_step(d.pages.can_go_next()) != TileStep::Blocked
        })
    }

    pub fn can_select_previous_tile(&self) -> bool {
        self.document.as_ref().is_some_and(|d| {
            d.tiles.previous_step(d.pages.can_go_previous()) != TileStep::Blocked
        })
    }

    /// Shows the next tile, crossing to the first tile of the next page
    /// after the last one. Returns false when there is nowhere to go.
    pub fn select_next_tile(&mut self) -> bool {
        let frame = self.frame();
        let fit_mode = self.fit_mode;
        let Some(doc) = self.document.as_mut() else {
            return false;
        };

        let events = match doc.tiles.next_step(doc.pages.can_go_next()) {
            TileStep::WithinPage(index) => move_within_page(doc, fit_mode, index),
            TileStep::CrossPage => {
                change_page(doc, &frame, fit_mode, TilePosition::First, |p| p.go_to_next())
            }
            TileStep::Blocked => Vec::new(),
        };
        self.publish_navigation(events)
    }

    /// Shows the previous tile, crossing to the last tile of the previous
    /// page before the first one.
    pub fn select_previous_tile(&mut self) -> bool {
        let frame = self.frame();
        let fit_mode = self.fit_mode;
        let Some(doc) = self.document.as_mut() else {
            return false;
        };

        let events = match doc.tiles.previous_step(doc.pages.can_go_previous()) {
            TileStep::WithinPage(index) => move_within_page(doc, fit_mode, index),
            TileStep::CrossPage => change_page(doc, &frame, fit_mode, TilePosition::Last, |p| {
                p.go_to_previous()
            }),
            TileStep::Blocked => Vec::new(),
        };
        self.publish_navigation(events)
    }

    pub fn can_go_previous(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|d| d.pages.can_go_previous())
    }

    pub fn can_go_next(&self) -> bool {
        self.document.as_ref().is_some_and(|d| d.pages.can_go_next())
    }

    /// Shows page `page` (1-based).
    ///
    /// Pages outside the document are ignored: no state change, no event.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.navigate(move |p| p.go_to_page(page))
    }

    pub fn go_to_first(&mut self) -> bool {
        self.navigate(PageController::go_to_first)
    }

    pub fn go_to_previous(&mut self) -> bool {
        self.navigate(PageController::go_to_previous)
    }

    pub fn go_to_next(&mut self) -> bool {
        self.navigate(PageController::go_to_next)
    }

    pub fn go_to_last(&mut self) -> bool {
        self.navigate(PageController::go_to_last)
    }

    fn navigate(&mut self, go: impl FnOnce(&mut PageController) -> Option<u32>) -> bool {
        let frame = self.frame();
        let fit_mode = self.fit_mode;
        let Some(doc) = self.document.as_mut() else {
            return false;
        };
        let events = change_page(doc, &frame, fit_mode, TilePosition::First, go);
        self.publish_navigation(events)
    }

    fn publish_navigation(&self, events: Vec<ViewerEvent>) -> bool {
        if events.is_empty() {
            return false;
        }
        self.emit_all(events);
        true
    }

    /// Rotates the current page (or every page) clockwise by `degrees`.
    ///
    /// The tiling is recomputed and the zoom history restarts from the
    /// rotated view. Stored layer-object geometry is left as is.
    pub fn rotate(&mut self, degrees: i32, options: RotateOptions) -> Result<(), ViewerError> {
        let frame = self.frame();
        let Some(doc) = self.document.as_mut() else {
            return Err(ViewerError::NoDocument);
        };

        let orientation = doc.pages.rotate(degrees, options.current_page_only)?;
        let page = doc.pages.current_page();

        if !self.features.view_perspective {
            let hidden: Vec<u32> = doc
                .pages
                .rotated_pages()
                .filter(|p| doc.layers.has_objects(*p))
                .collect();
            if !hidden.is_empty() {
                tracing::warn!(
                    "View perspective not licensed; hiding layer objects on rotated page(s) {:?}",
                    hidden
                );
            }
        }

        let mut events = vec![ViewerEvent::OrientationChanged {
            page,
            orientation,
            all_pages: !options.current_page_only,
        }];
        if !options.recompute_fit && self.fit_mode.is_fitted() {
            events.push(ViewerEvent::FitModeChanged {
                fit_mode: FitMode::None,
                previous: self.fit_mode,
            });
            self.fit_mode = FitMode::None;
        }

        doc.leave_page();
        doc.relayout(&frame, self.fit_mode, TilePosition::First);
        doc.reseed_history(self.fit_mode);
        events.push(doc.zoom_event());

        tracing::debug!("Rotated page {} to {}", page, orientation);
        self.emit_all(events);
        Ok(())
    }

    /// Records the viewport size reported by the host and refits the view.
    pub fn set_viewport_size(&mut self, size: Size) {
        if size.is_empty() {
            tracing::warn!("Ignoring empty viewport size {}x{}", size.width, size.height);
            return;
        }
        if size == self.viewport {
            return;
        }
        self.viewport = size;

        let frame = self.frame();
        let fit_mode = self.fit_mode;
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        let origin = doc.view.source_rectangle;
        if fit_mode.is_fitted() {
            doc.relayout(&frame, fit_mode, TilePosition::Nearest(origin.top()));
        } else {
            doc.view = ViewState::at(doc.view.scale_factor, Point::new(origin.x, origin.y), size);
        }
        let snapshot = doc.snapshot(fit_mode);
        doc.history.replace_current(snapshot);

        let events = vec![doc.zoom_event()];
        self.emit_all(events);
    }
}
