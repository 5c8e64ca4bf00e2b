//! Zoom history for zoom previous/next
//!
//! A linear undo history of view states: pushing while not at the newest
//! entry discards the forward branch, and the oldest entry is evicted once
//! the capacity is exceeded.

use pageview_core::{FitMode, Rect, ViewerError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::view::ViewState;

/// Default number of snapshots kept per document
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// A recorded view state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSnapshot {
    /// Display scale
    pub scale_factor: f64,
    /// Visible part of the displayed page
    pub source_rectangle: Rect,
    /// Page the snapshot was taken on
    pub page: u32,
    /// Fit mode that produced the view
    pub fit_mode: FitMode,
}

impl From<ZoomSnapshot> for ViewState {
    fn from(snapshot: ZoomSnapshot) -> Self {
        ViewState {
            scale_factor: snapshot.scale_factor,
            source_rectangle: snapshot.source_rectangle,
        }
    }
}

/// Bounded zoom history with a cursor
#[derive(Debug, Clone)]
pub struct ZoomHistory {
    entries: VecDeque<ZoomSnapshot>,
    cursor: usize,
    capacity: usize,
}

impl ZoomHistory {
    /// Create a history with the default capacity (20)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create with a custom capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Record a new view state after the cursor
    ///
    /// Forward entries are discarded, then the oldest entry if the history
    /// is over capacity. The cursor moves to the new entry.
    pub fn push(&mut self, snapshot: ZoomSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push_back(snapshot);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the entry at the cursor without adding a bookmark
    pub fn replace_current(&mut self, snapshot: ZoomSnapshot) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = snapshot,
            None => self.push(snapshot),
        }
    }

    /// Step back to the previous snapshot
    pub fn go_back(&mut self) -> Result<ZoomSnapshot, ViewerError> {
        if !self.can_go_back() {
            return Err(ViewerError::invalid_operation(
                "zoom_previous",
                "zoom history is at its oldest entry",
            ));
        }
        self.cursor -= 1;
        Ok(self.entries[self.cursor])
    }

    /// Step forward to the next snapshot
    pub fn go_forward(&mut self) -> Result<ZoomSnapshot, ViewerError> {
        if !self.can_go_forward() {
            return Err(ViewerError::invalid_operation(
                "zoom_next",
                "zoom history is at its newest entry",
            ));
        }
        self.cursor += 1;
        Ok(self.entries[self.cursor])
    }

    /// Check if zoom previous is available
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Check if zoom next is available
    pub fn can_go_forward(&self) -> bool {
        !self.entries.is_empty() && self.cursor < self.entries.len() - 1
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&ZoomSnapshot> {
        self.entries.get(self.cursor)
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ZoomHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(scale: f64) -> ZoomSnapshot {
        ZoomSnapshot {
            scale_factor: scale,
            source_rectangle: Rect::new(0.0, 0.0, 100.0 / scale, 100.0 / scale),
            page: 1,
            fit_mode: FitMode::None,
        }
    }

    #[test]
    fn test_empty_history() {
        let mut history = ZoomHistory::new();
        assert!(history.is_empty());
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
        assert!(history.go_back().is_err());
        assert!(history.go_forward().is_err());
    }

    #[test]
    fn test_push_moves_cursor_to_newest() {
        let mut history = ZoomHistory::new();
        history.push(snapshot(1.0));
        assert!(!history.can_go_back());

        history.push(snapshot(2.0));
        assert_eq!(history.cursor(), 1);
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_back_then_forward() {
        let mut history = ZoomHistory::new();
        history.push(snapshot(1.0));
        history.push(snapshot(2.0));

        let back = history.go_back().expect("back");
        assert_eq!(back.scale_factor, 1.0);
        assert!(history.can_go_forward());

        let forward = history.go_forward().expect("forward");
        assert_eq!(forward.scale_factor, 2.0);
    }

    #[test]
    fn test_push_truncates_forward_branch() {
        let mut history = ZoomHistory::new();
        history.push(snapshot(1.0));
        history.push(snapshot(2.0));
        history.push(snapshot(3.0));
        history.go_back().expect("back");
        history.go_back().expect("back");

        history.push(snapshot(5.0));
        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.current().map(|s| s.scale_factor), Some(5.0));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = ZoomHistory::new();
        for i in 0..24 {
            history.push(snapshot(1.0 + i as f64));
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.cursor(), DEFAULT_HISTORY_CAPACITY - 1);

        let mut oldest = 0.0;
        while history.can_go_back() {
            oldest = history.go_back().expect("back").scale_factor;
        }
        assert_eq!(oldest, 5.0);
    }

    #[test]
    fn test_replace_current_adds_no_entry() {
        let mut history = ZoomHistory::new();
        history.push(snapshot(1.0));
        history.replace_current(snapshot(1.5));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().map(|s| s.scale_factor), Some(1.5));
    }

    #[test]
    fn test_error_is_invalid_operation() {
        let mut history = ZoomHistory::new();
        history.push(snapshot(1.0));
        assert!(matches!(
            history.go_back(),
            Err(ViewerError::InvalidOperation { .. })
        ));
    }
}
