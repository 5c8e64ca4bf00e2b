//! View state and coordinate mapping.
//!
//! The view is a scale factor plus the rectangle of the displayed (rotated)
//! page that is visible in the viewport. Its size is always the viewport
//! size divided by the scale.
//!
//! ```text
//! display_x = source.x + screen_x / scale
//! screen_x  = (display_x - source.x) * scale
//! ```

use pageview_core::{FitMode, Point, Rect, Size};
use std::fmt;

/// Scale and visible rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub scale_factor: f64,
    pub source_rectangle: Rect,
}

impl ViewState {
    /// View at `scale` with its top-left corner at `origin`.
    pub fn at(scale_factor: f64, origin: Point, viewport: Size) -> Self {
        let visible = visible_size(viewport, scale_factor);
        Self {
            scale_factor,
            source_rectangle: Rect::new(origin.x, origin.y, visible.width, visible.height),
        }
    }

    /// View at `scale` centered on `center`.
    pub fn centered(scale_factor: f64, center: Point, viewport: Size) -> Self {
        Self {
            scale_factor,
            source_rectangle: Rect::centered_at(center, visible_size(viewport, scale_factor)),
        }
    }

    /// View at `scale` showing the top of the page, centered horizontally
    /// when the page is narrower than the viewport.
    pub fn page_top(scale_factor: f64, page: Size, viewport: Size) -> Self {
        let visible = visible_size(viewport, scale_factor);
        let x = if visible.width >= page.width {
            (page.width - visible.width) / 2.0
        } else {
            0.0
        };
        Self::at(scale_factor, Point::new(x, 0.0), viewport)
    }

    /// Converts a viewport pixel position to displayed-page coordinates.
    pub fn screen_to_display(&self, screen: Point) -> Point {
        Point::new(
            self.source_rectangle.x + screen.x / self.scale_factor,
            self.source_rectangle.y + screen.y / self.scale_factor,
        )
    }

    /// Converts displayed-page coordinates to a viewport pixel position.
    pub fn display_to_screen(&self, display: Point) -> Point {
        Point::new(
            (display.x - self.source_rectangle.x) * self.scale_factor,
            (display.y - self.source_rectangle.y) * self.scale_factor,
        )
    }

    /// Moves the visible rectangle by a delta in viewport pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.source_rectangle = self
            .source_rectangle
            .translated(-dx / self.scale_factor, -dy / self.scale_factor);
    }

    /// Returns true if both views match within a small tolerance.
    pub fn approx_eq(&self, other: &ViewState) -> bool {
        const EPS: f64 = 1e-9;
        let (a, b) = (self.source_rectangle, other.source_rectangle);
        (self.scale_factor - other.scale_factor).abs() < EPS
            && (a.x - b.x).abs() < EPS
            && (a.y - b.y).abs() < EPS
            && (a.width - b.width).abs() < EPS
            && (a.height - b.height).abs() < EPS
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Source: {}",
            self.scale_factor, self.source_rectangle
        )
    }
}

/// Scale limits and zoom step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    pub step_factor: f64,
}

impl ZoomLimits {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 50.0,
            step_factor: 1.2,
        }
    }
}

/// Page units visible at `scale`.
pub fn visible_size(viewport: Size, scale: f64) -> Size {
    Size::new(viewport.width / scale, viewport.height / scale)
}

/// Scale at which the whole page fits the viewport.
pub fn fit_to_page_scale(viewport: Size, page: Size) -> f64 {
    if viewport.is_empty() || page.is_empty() {
        return 1.0;
    }
    (viewport.width / page.width).min(viewport.height / page.height)
}

/// Scale at which the page width fills the viewport.
pub fn fit_to_width_scale(viewport: Size, page: Size) -> f64 {
    if viewport.is_empty() || page.is_empty() {
        return 1.0;
    }
    viewport.width / page.width
}

/// Scale a fit mode derives for a page, or None for manual zoom.
pub fn fit_scale(mode: FitMode, viewport: Size, page: Size, limits: &ZoomLimits) -> Option<f64> {
    match mode {
        FitMode::None => None,
        FitMode::FitToPage => Some(limits.clamp(fit_to_page_scale(viewport, page))),
        FitMode::FitToWidth => Some(limits.clamp(fit_to_width_scale(viewport, page))),
    }
}
