//! Page tiling and tile sequencing.
//!
//! Under a fit mode each displayed page is cut into viewport-sized tiles
//! that are read in order:
//! - `FitToPage` yields exactly one tile, the whole page
//! - `FitToWidth` yields N vertically stacked tiles, the last one aligned
//!   with the bottom of the page
//! - `None` has no tiling
//!
//! [`TileNavigator`] tracks the tile being shown and decides whether a
//! next/previous request stays on the page or crosses to a neighbour page.
//! Page changes themselves belong to the engine.

use pageview_core::{FitMode, Point, Rect, Size};

use crate::view::{fit_scale, visible_size, ViewState, ZoomLimits};

/// Tiling of one displayed page under one fit mode
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayout {
    fit_mode: FitMode,
    scale_factor: f64,
    tiles: Vec<Rect>,
}

impl TileLayout {
    /// Computes the tiles of a page, or None when the mode has no tiling.
    ///
    /// `page` is the displayed size (after rotation). `overlap` is the
    /// fraction of a tile repeated at the top of the next one.
    pub fn compute(
        fit_mode: FitMode,
        page: Size,
        viewport: Size,
        overlap: f64,
        limits: &ZoomLimits,
    ) -> Option<Self> {
        if page.is_empty() || viewport.is_empty() {
            return None;
        }
        let scale_factor = fit_scale(fit_mode, viewport, page, limits)?;
        let visible = visible_size(viewport, scale_factor);

        let tiles = match fit_mode {
            FitMode::None => return None,
            FitMode::FitToPage => vec![Rect::centered_at(
                Point::new(page.width / 2.0, page.height / 2.0),
                visible,
            )],
            FitMode::FitToWidth => {
                let x = (page.width - visible.width) / 2.0;
                vertical_tops(page.height, visible.height, overlap)
                    .into_iter()
                    .map(|top| Rect::new(x, top, visible.width, visible.height))
                    .collect()
            }
        };

        Some(Self {
            fit_mode,
            scale_factor,
            tiles,
        })
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, index: usize) -> Option<Rect> {
        self.tiles.get(index).copied()
    }

    pub fn last_index(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    /// View showing the given tile.
    pub fn view(&self, index: usize) -> Option<ViewState> {
        self.tile(index).map(|rect| ViewState {
            scale_factor: self.scale_factor,
            source_rectangle: rect,
        })
    }

    /// Index of the tile whose top is closest to `top`.
    pub fn index_nearest(&self, top: f64) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.top() - top).abs();
                let db = (b.top() - top).abs();
                da.total_cmp(&db)
            })
            .map(|(index, _)| index)
            .unwrap_or(0)
    }
}

/// Tops of the stacked tiles covering `page_height`.
fn vertical_tops(page_height: f64, tile_height: f64, overlap: f64) -> Vec<f64> {
    const EPS: f64 = 1e-9;
    if page_height <= tile_height + EPS {
        return vec![0.0];
    }

    let step = tile_height * (1.0 - overlap);
    let last_top = page_height - tile_height;
    let count = ((last_top / step) - EPS).ceil() as usize + 1;

    (0..count)
        .map(|i| (i as f64 * step).min(last_top))
        .collect()
}

/// Where to land after a relayout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TilePosition {
    /// First tile of the page.
    First,
    /// Last tile of the page.
    Last,
    /// Tile whose top is closest to the given top.
    Nearest(f64),
}

/// Result of asking for the next or previous tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStep {
    /// Move to this tile on the current page.
    WithinPage(usize),
    /// Move to the neighbouring page.
    CrossPage,
    /// Nothing to move to.
    Blocked,
}

/// Tracks the tile being shown on the current page
#[derive(Debug, Clone, Default)]
pub struct TileNavigator {
    layout: Option<TileLayout>,
    index: usize,
}

impl TileNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new layout and selects a tile in it.
    pub fn relayout(&mut self, layout: Option<TileLayout>, position: TilePosition) {
        self.index = match &layout {
            Some(layout) => match position {
                TilePosition::First => 0,
                TilePosition::Last => layout.last_index(),
                TilePosition::Nearest(top) => layout.index_nearest(top),
            },
            None => 0,
        };
        self.layout = layout;
    }

    /// Drops the tiling (manual zoom).
    pub fn clear(&mut self) {
        self.layout = None;
        self.index = 0;
    }

    pub fn layout(&self) -> Option<&TileLayout> {
        self.layout.as_ref()
    }

    pub fn is_tiled(&self) -> bool {
        self.layout.is_some()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tile_count(&self) -> usize {
        self.layout.as_ref().map_or(0, TileLayout::len)
    }

    /// View of the selected tile.
    pub fn current_view(&self) -> Option<ViewState> {
        self.layout.as_ref().and_then(|layout| layout.view(self.index))
    }

    /// Selects a tile on the current page; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<ViewState> {
        let view = self.layout.as_ref()?.view(index)?;
        self.index = index;
        Some(view)
    }

    /// Re-derives the selected tile from a visible top after a pan.
    pub fn follow(&mut self, top: f64) {
        if let Some(layout) = &self.layout {
            self.index = layout.index_nearest(top);
        }
    }

    pub fn next_step(&self, has_next_page: bool) -> TileStep {
        let Some(layout) = &self.layout else {
            return TileStep::Blocked;
        };
        if self.index < layout.last_index() {
            TileStep::WithinPage(self.index + 1)
        } else if has_next_page {
            TileStep::CrossPage
        } else {
            TileStep::Blocked
        }
    }

    pub fn previous_step(&self, has_previous_page: bool) -> TileStep {
        if self.layout.is_none() {
            return TileStep::Blocked;
        }
        if self.index > 0 {
            TileStep::WithinPage(self.index - 1)
        } else if has_previous_page {
            TileStep::CrossPage
        } else {
            TileStep::Blocked
        }
    }
}
