//! Error handling for PageView
//!
//! Provides error types for the engine layers:
//! - Viewer errors (verb preconditions surfaced to the caller)
//! - Event bus errors (dispatch)
//!
//! Input the engine deliberately ignores (out-of-range pages, redundant tool
//! re-selection) never produces an error; only precondition failures do.

use thiserror::Error;

pub use crate::event_bus::EventBusError;

/// Viewer error type
///
/// Raised synchronously by a verb that could not run. A verb that fails
/// leaves the engine state untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// The verb needs an open document
    #[error("No document is open")]
    NoDocument,

    /// The verb was invoked while its precondition did not hold
    #[error("Invalid operation '{operation}': {reason}")]
    InvalidOperation {
        /// The verb that was rejected.
        operation: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Rotation not expressible as quarter turns
    #[error("Rotation must be a multiple of 90 degrees, got {degrees}")]
    InvalidRotation {
        /// The requested rotation.
        degrees: i32,
    },

    /// Page number outside the document
    #[error("Page {page} out of range 1..={page_count}")]
    PageOutOfRange {
        /// The requested page.
        page: u32,
        /// Pages in the document.
        page_count: u32,
    },

    /// Unknown layer object id
    #[error("Layer object {id} not found")]
    LayerObjectNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// Optional capability not licensed
    #[error("Feature not licensed: {feature}")]
    FeatureUnavailable {
        /// The capability name.
        feature: String,
    },

    /// Document description rejected on open
    #[error("Invalid document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },
}

impl ViewerError {
    /// Shorthand for [`ViewerError::InvalidOperation`].
    pub fn invalid_operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ViewerError::InvalidOperation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for PageView
///
/// A unified error type that can represent any error from the engine
/// layers. This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Viewer error
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    /// Event bus error
    #[error(transparent)]
    EventBus(#[from] EventBusError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a viewer precondition failure
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Error::Viewer(ViewerError::InvalidOperation { .. }))
    }

    /// Check if this is a viewer error
    pub fn is_viewer_error(&self) -> bool {
        matches!(self, Error::Viewer(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_error_display() {
        let err = ViewerError::invalid_operation("zoom_previous", "history is at its oldest entry");
        assert_eq!(
            err.to_string(),
            "Invalid operation 'zoom_previous': history is at its oldest entry"
        );

        let err = ViewerError::InvalidRotation { degrees: 45 };
        assert_eq!(
            err.to_string(),
            "Rotation must be a multiple of 90 degrees, got 45"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ViewerError::NoDocument.into();
        assert!(err.is_viewer_error());
        assert!(!err.is_invalid_operation());

        let err: Error = ViewerError::invalid_operation("go_back", "empty").into();
        assert!(err.is_invalid_operation());
    }
}
