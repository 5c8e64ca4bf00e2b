//! Page state: current page, page count and per-page orientation.

use pageview_core::{Orientation, Size, ViewerError};

/// Page geometry reported by the rendering collaborator on open
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentInfo {
    /// Unrotated size of each page, in page units
    pub page_sizes: Vec<Size>,
}

impl DocumentInfo {
    pub fn new(page_sizes: Vec<Size>) -> Self {
        Self { page_sizes }
    }

    /// Document whose pages all share one size.
    pub fn uniform(page_count: u32, size: Size) -> Self {
        Self {
            page_sizes: vec![size; page_count as usize],
        }
    }

    pub fn page_count(&self) -> u32 {
        self.page_sizes.len() as u32
    }

    /// Rejects pages without area.
    pub fn validate(&self) -> Result<(), ViewerError> {
        match self.page_sizes.iter().position(Size::is_empty) {
            Some(index) => Err(ViewerError::InvalidDocument {
                reason: format!("page {} has an empty size", index + 1),
            }),
            None => Ok(()),
        }
    }
}

/// Options for [`PageController::rotate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateOptions {
    /// Rotate only the current page instead of every page
    pub current_page_only: bool,
    /// Re-derive the scale from the fit mode after rotating
    pub recompute_fit: bool,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            current_page_only: true,
            recompute_fit: true,
        }
    }
}

/// Current page and per-page orientation of an open document
#[derive(Debug, Clone)]
pub struct PageController {
    sizes: Vec<Size>,
    orientations: Vec<Orientation>,
    current: u32,
}

impl PageController {
    pub fn new(info: &DocumentInfo) -> Self {
        let count = info.page_sizes.len();
        Self {
            sizes: info.page_sizes.clone(),
            orientations: vec![Orientation::Deg0; count],
            current: if count > 0 { 1 } else { 0 },
        }
    }

    pub fn page_count(&self) -> u32 {
        self.sizes.len() as u32
    }

    /// 1-based current page, 0 for an empty document.
    pub fn current_page(&self) -> u32 {
        self.current
    }

    pub fn is_valid_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.page_count()
    }

    /// Moves to `page`, returning the previous page.
    ///
    /// Out-of-range pages and the current page are ignored.
    pub fn go_to_page(&mut self, page: u32) -> Option<u32> {
        if !self.is_valid_page(page) {
            tracing::debug!(
                "Ignoring page {} outside 1..={}",
                page,
                self.page_count()
            );
            return None;
        }
        if page == self.current {
            return None;
        }
        let previous = self.current;
        self.current = page;
        Some(previous)
    }

    pub fn go_to_first(&mut self) -> Option<u32> {
        self.go_to_page(1)
    }

    pub fn go_to_last(&mut self) -> Option<u32> {
        self.go_to_page(self.page_count())
    }

    pub fn go_to_next(&mut self) -> Option<u32> {
        self.go_to_page(self.current + 1)
    }

    pub fn go_to_previous(&mut self) -> Option<u32> {
        self.go_to_page(self.current.saturating_sub(1))
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current >= 1 && self.current < self.page_count()
    }

    /// Orientation of `page`; out-of-range pages report 0°.
    pub fn orientation(&self, page: u32) -> Orientation {
        self.index(page)
            .and_then(|i| self.orientations.get(i).copied())
            .unwrap_or_default()
    }

    /// Unrotated size of `page`.
    pub fn page_size(&self, page: u32) -> Option<Size> {
        self.index(page).and_then(|i| self.sizes.get(i).copied())
    }

    /// Size of `page` as displayed under its orientation.
    pub fn display_size(&self, page: u32) -> Option<Size> {
        self.page_size(page)
            .map(|size| self.orientation(page).display_size(size))
    }

    /// Rotates the current page (or every page) clockwise by `degrees`.
    ///
    /// Returns the new orientation of the current page. Nothing changes
    /// unless `degrees` is a multiple of 90.
    pub fn rotate(
        &mut self,
        degrees: i32,
        current_page_only: bool,
    ) -> Result<Orientation, ViewerError> {
        if degrees % 90 != 0 {
            return Err(ViewerError::InvalidRotation { degrees });
        }
        let current = self
            .index(self.current)
            .ok_or_else(|| ViewerError::invalid_operation("rotate", "document has no pages"))?;

        let targets = if current_page_only {
            current..current + 1
        } else {
            0..self.orientations.len()
        };
        for orientation in &mut self.orientations[targets] {
            *orientation = orientation
                .rotated_by(degrees)
                .ok_or(ViewerError::InvalidRotation { degrees })?;
        }

        Ok(self.orientations[current])
    }

    /// Pages whose orientation is not 0°.
    pub fn rotated_pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.orientations
            .iter()
            .enumerate()
            .filter(|(_, o)| **o != Orientation::Deg0)
            .map(|(i, _)| i as u32 + 1)
    }

    fn index(&self, page: u32) -> Option<usize> {
        self.is_valid_page(page).then(|| page as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_pages() -> PageController {
        PageController::new(&DocumentInfo::uniform(4, Size::new(600.0, 800.0)))
    }

    #[test]
    fn test_starts_on_first_page() {
        let pages = four_pages();
        assert_eq!(pages.current_page(), 1);
        assert_eq!(pages.page_count(), 4);
        assert!(!pages.can_go_previous());
        assert!(pages.can_go_next());
    }

    #[test]
    fn test_empty_document_has_page_zero() {
        let pages = PageController::new(&DocumentInfo::default());
        assert_eq!(pages.current_page(), 0);
        assert!(!pages.can_go_next());
        assert!(!pages.can_go_previous());
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut pages = four_pages();
        assert_eq!(pages.go_to_page(33), None);
        assert_eq!(pages.go_to_page(0), None);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn test_boundary_moves_return_none() {
        let mut pages = four_pages();
        assert_eq!(pages.go_to_previous(), None);
        assert_eq!(pages.go_to_last(), Some(1));
        assert_eq!(pages.go_to_next(), None);
        assert_eq!(pages.go_to_previous(), Some(4));
        assert_eq!(pages.current_page(), 3);
    }

    #[test]
    fn test_rotation_is_per_page() {
        let mut pages = four_pages();
        assert_eq!(pages.rotate(90, true), Ok(Orientation::Deg90));
        assert_eq!(pages.orientation(1), Orientation::Deg90);
        assert_eq!(pages.orientation(2), Orientation::Deg0);
        assert_eq!(pages.display_size(1), Some(Size::new(800.0, 600.0)));
        assert_eq!(pages.display_size(2), Some(Size::new(600.0, 800.0)));
    }

    #[test]
    fn test_rotate_all_pages() {
        let mut pages = four_pages();
        pages.rotate(-90, false).expect("rotate");
        assert!((1..=4).all(|p| pages.orientation(p) == Orientation::Deg270));
        assert_eq!(pages.rotated_pages().count(), 4);
    }

    #[test]
    fn test_invalid_rotation_changes_nothing() {
        let mut pages = four_pages();
        assert_eq!(
            pages.rotate(45, false),
            Err(ViewerError::InvalidRotation { degrees: 45 })
        );
        assert_eq!(pages.rotated_pages().count(), 0);
    }

    #[test]
    fn test_document_validation() {
        let info = DocumentInfo::new(vec![Size::new(10.0, 10.0), Size::new(0.0, 10.0)]);
        assert!(matches!(
            info.validate(),
            Err(ViewerError::InvalidDocument { .. })
        ));
    }
}
