//! Opening and closing documents.

use pageview_core::{Point, ViewerError, ViewerEvent};

use super::{OpenDocument, ViewerEngine};
use crate::layer_objects::LayerObjectStore;
use crate::page::{DocumentInfo, PageController};
use crate::tiling::{TileNavigator, TilePosition};
use crate::view::ViewState;
use crate::zoom_history::ZoomHistory;

impl ViewerEngine {
    /// Opens a document, closing the current one first.
    ///
    /// The configured start-up fit mode and cursor tool are applied and the
    /// zoom history is seeded with the first view.
    pub fn open_document(&mut self, info: DocumentInfo) -> Result<(), ViewerError> {
        info.validate()?;
        self.close_document();

        let frame = self.frame();
        let previous_fit = self.fit_mode;
        self.fit_mode = self.config.defaults.fit_mode;

        let mut doc = OpenDocument {
            pages: PageController::new(&info),
            history: ZoomHistory::with_capacity(self.config.zoom.history_capacity),
            view: ViewState::at(1.0, Point::new(0.0, 0.0), frame.viewport),
            tiles: TileNavigator::new(),
            layers: LayerObjectStore::new(),
            selected: None,
            gesture: None,
        };
        doc.relayout(&frame, self.fit_mode, TilePosition::First);
        doc.reseed_history(self.fit_mode);

        let page_count = doc.pages.page_count();
        let mut events = vec![ViewerEvent::DocumentOpened { page_count }];
        if page_count > 0 {
            events.push(ViewerEvent::PageChanged {
                page: doc.pages.current_page(),
                previous: 0,
                page_count,
            });
        }
        if previous_fit != self.fit_mode {
            events.push(ViewerEvent::FitModeChanged {
                fit_mode: self.fit_mode,
                previous: previous_fit,
            });
        }
        events.push(doc.zoom_event());
        if let Some(change) = self.tools.document_opened(self.config.defaults.cursor_tool) {
            events.push(ViewerEvent::CursorToolChanged {
                tool: change.tool,
                previous: change.previous,
            });
        }

        self.document = Some(doc);
        tracing::info!("Opened document with {} page(s)", page_count);
        self.emit_all(events);
        Ok(())
    }

    /// Closes the open document; does nothing without one.
    pub fn close_document(&mut self) {
        if self.document.take().is_none() {
            return;
        }

        let mut events = Vec::new();
        if let Some(change) = self.tools.document_closed() {
            events.push(ViewerEvent::CursorToolChanged {
                tool: change.tool,
                previous: change.previous,
            });
        }
        events.push(ViewerEvent::DocumentClosed);

        tracing::info!("Closed document");
        self.emit_all(events);
    }
}
