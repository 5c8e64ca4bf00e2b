//! Layer-object verbs.
//!
//! Unlike navigation input, these report their precondition failures.

use pageview_core::{ViewerError, ViewerEvent};

use super::{OpenDocument, ViewerEngine};
use crate::layer_objects::LayerObjectShape;

impl ViewerEngine {
    fn annotatable_document(&mut self) -> Result<&mut OpenDocument, ViewerError> {
        if !self.features.annotations {
            return Err(ViewerError::FeatureUnavailable {
                feature: "annotations".to_string(),
            });
        }
        self.document.as_mut().ok_or(ViewerError::NoDocument)
    }

    /// Adds a highlight to the current page. Geometry is in page coordinates.
    pub fn add_layer_object(&mut self, shape: LayerObjectShape) -> Result<u64, ViewerError> {
        let page = self.current_page();
        let overlay_visible = self.is_overlay_visible(page);
        let doc = self.annotatable_document()?;

        if page == 0 {
            return Err(ViewerError::invalid_operation(
                "add_layer_object",
                "document has no pages",
            ));
        }
        if !overlay_visible {
            return Err(ViewerError::FeatureUnavailable {
                feature: "view_perspective".to_string(),
            });
        }
        if shape.is_degenerate() {
            return Err(ViewerError::invalid_operation(
                "add_layer_object",
                "shape has no area",
            ));
        }

        let id = doc.layers.add(page, shape);
        self.emit_all(vec![ViewerEvent::LayerObjectAdded {
            page,
            id,
            kind: shape.kind(),
        }]);
        Ok(id)
    }

    pub fn delete_layer_object(&mut self, id: u64) -> Result<(), ViewerError> {
        let doc = self.annotatable_document()?;
        let object = doc
            .layers
            .remove(id)
            .ok_or(ViewerError::LayerObjectNotFound { id })?;
        if doc.selected == Some(id) {
            doc.selected = None;
        }

        self.emit_all(vec![ViewerEvent::LayerObjectDeleted {
            page: object.page,
            id,
        }]);
        Ok(())
    }

    /// Selects a layer object of the current page, or clears the selection.
    pub fn select_layer_object(&mut self, id: Option<u64>) -> Result<(), ViewerError> {
        let doc = self.annotatable_document()?;
        if let Some(id) = id {
            let page = doc.pages.current_page();
            if !doc.layers.on_page(page).iter().any(|o| o.id == id) {
                return Err(ViewerError::LayerObjectNotFound { id });
            }
        }
        doc.selected = id;
        Ok(())
    }

    /// Deletes the selected layer object; does nothing without a selection.
    pub fn delete_selected_layer_object(&mut self) -> Result<(), ViewerError> {
        let selected = self.annotatable_document()?.selected;
        match selected {
            Some(id) => self.delete_layer_object(id),
            None => Ok(()),
        }
    }
}
