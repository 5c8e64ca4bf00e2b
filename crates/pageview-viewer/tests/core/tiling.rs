use pageview_core::{FitMode, Rect, Size};
use pageview_viewer::{TileLayout, TileNavigator, TilePosition, TileStep, ZoomLimits};

fn width_layout(page: Size, viewport: Size) -> TileLayout {
    TileLayout::compute(FitMode::FitToWidth, page, viewport, 0.0, &ZoomLimits::default())
        .expect("fit to width tiles")
}

#[test]
fn test_tiles_cover_page_without_gaps() {
    let page = Size::new(600.0, 2900.0);
    let layout = width_layout(page, Size::new(600.0, 800.0));
    assert_eq!(layout.len(), 4);

    let mut covered = 0.0;
    for index in 0..layout.len() {
        let tile = layout.tile(index).expect("tile");
        assert!(tile.top() <= covered + 1e-9);
        covered = tile.bottom();
    }
    assert_eq!(covered, page.height);
}

#[test]
fn test_short_page_has_one_tile() {
    let layout = width_layout(Size::new(600.0, 500.0), Size::new(600.0, 800.0));
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.tile(0), Some(Rect::new(0.0, 0.0, 600.0, 800.0)));
}

#[test]
fn test_fit_to_page_centres_page() {
    let layout = TileLayout::compute(
        FitMode::FitToPage,
        Size::new(600.0, 800.0),
        Size::new(1200.0, 800.0),
        0.0,
        &ZoomLimits::default(),
    )
    .expect("single tile");
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.tile(0), Some(Rect::new(-300.0, 0.0, 1200.0, 800.0)));
}

#[test]
fn test_navigator_walks_tiles() {
    let mut nav = TileNavigator::new();
    nav.relayout(
        Some(width_layout(Size::new(600.0, 3200.0), Size::new(600.0, 800.0))),
        TilePosition::First,
    );

    let mut index = 0;
    while let TileStep::WithinPage(next) = nav.next_step(true) {
        nav.select(next).expect("tile");
        index += 1;
    }
    assert_eq!(index, 3);
    assert_eq!(nav.next_step(true), TileStep::CrossPage);
}

#[test]
fn test_cleared_navigator_blocks() {
    let mut nav = TileNavigator::new();
    nav.relayout(
        Some(width_layout(Size::new(600.0, 3200.0), Size::new(600.0, 800.0))),
        TilePosition::Last,
    );
    nav.clear();
    assert_eq!(nav.tile_count(), 0);
    assert_eq!(nav.previous_step(true), TileStep::Blocked);
}
