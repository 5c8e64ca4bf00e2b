use pageview_core::{Orientation, Size, ViewerError};
use pageview_viewer::{DocumentInfo, PageController};

fn mixed() -> PageController {
    PageController::new(&DocumentInfo::new(vec![
        Size::new(600.0, 800.0),
        Size::new(800.0, 600.0),
        Size::new(500.0, 500.0),
    ]))
}

#[test]
fn test_navigation_wrappers() {
    let mut pages = mixed();
    assert_eq!(pages.go_to_next(), Some(1));
    assert_eq!(pages.go_to_next(), Some(2));
    assert_eq!(pages.go_to_next(), None);
    assert_eq!(pages.go_to_first(), Some(3));
    assert_eq!(pages.go_to_first(), None);
}

#[test]
fn test_page_sizes_follow_rotation() {
    let mut pages = mixed();
    pages.go_to_page(2);
    pages.rotate(270, true).expect("rotate");
    assert_eq!(pages.orientation(2), Orientation::Deg270);
    assert_eq!(pages.display_size(2), Some(Size::new(600.0, 800.0)));
    assert_eq!(pages.page_size(2), Some(Size::new(800.0, 600.0)));
    assert_eq!(pages.orientation(1), Orientation::Deg0);
}

#[test]
fn test_full_turn_returns_to_zero() {
    let mut pages = mixed();
    for _ in 0..4 {
        pages.rotate(90, true).expect("rotate");
    }
    assert_eq!(pages.orientation(1), Orientation::Deg0);
}

#[test]
fn test_rotate_empty_document_fails() {
    let mut pages = PageController::new(&DocumentInfo::default());
    assert!(matches!(
        pages.rotate(90, true),
        Err(ViewerError::InvalidOperation { .. })
    ));
}
