//! End-to-end behaviour of the viewer engine as seen by toolbar adapters

use pageview_core::{
    CursorTool, EventBus, EventBusConfig, EventCategory, EventFilter, FitMode, Orientation, Size,
    ViewerEvent,
};
use pageview_settings::ViewerConfig;
use pageview_viewer::{DocumentInfo, RotateOptions, ViewerEngine};
use std::sync::{Arc, Mutex};

/// Engine whose bus keeps every published event.
fn recording_engine(config: ViewerConfig) -> ViewerEngine {
    let bus = EventBus::with_config(EventBusConfig {
        enable_history: true,
        ..Default::default()
    });
    ViewerEngine::with_event_bus(config, bus)
}

/// Four 600x3200 pages read at fit width in a 600x800 viewport: 4 tiles per page.
fn four_page_fixture() -> ViewerEngine {
    let mut config = ViewerConfig::default();
    config.viewport.width = 600.0;
    config.viewport.height = 800.0;
    config.defaults.fit_mode = FitMode::FitToWidth;

    let mut engine = recording_engine(config);
    engine
        .open_document(DocumentInfo::uniform(4, Size::new(600.0, 3200.0)))
        .expect("open");
    engine.events().clear_history();
    engine
}

fn default_document(pages: u32) -> ViewerEngine {
    let mut engine = recording_engine(ViewerConfig::default());
    engine
        .open_document(DocumentInfo::uniform(pages, Size::new(600.0, 800.0)))
        .expect("open");
    engine.events().clear_history();
    engine
}

fn count(events: &[ViewerEvent], category: EventCategory) -> usize {
    events.iter().filter(|e| e.category() == category).count()
}

fn take_events(engine: &ViewerEngine) -> Vec<ViewerEvent> {
    let events = engine.events().history(None);
    engine.events().clear_history();
    events
}

#[test]
fn test_fit_width_tile_walk_crosses_page_once() {
    let mut engine = four_page_fixture();
    assert_eq!(engine.tile_count(), 4);

    let mut page_changes = Vec::new();
    for call in 1..=4 {
        assert!(engine.select_next_tile());
        let events = take_events(&engine);
        assert!(count(&events, EventCategory::Zoom) >= 1, "call {}", call);
        page_changes.push(count(&events, EventCategory::Page));
    }

    assert_eq!(page_changes, vec![0, 0, 0, 1]);
    assert_eq!(engine.current_page(), 2);
    assert_eq!(engine.tile_index(), 0);
}

#[test]
fn test_crossing_page_preserves_fit_mode_and_leaves_no_history() {
    let mut engine = four_page_fixture();
    for _ in 0..4 {
        engine.select_next_tile();
    }
    assert_eq!(engine.fit_mode(), FitMode::FitToWidth);
    assert!(!engine.can_zoom_previous());
    assert!(!engine.can_zoom_next());
}

#[test]
fn test_tile_moves_add_no_history() {
    let mut engine = four_page_fixture();
    engine.select_next_tile();
    engine.select_next_tile();
    assert!(!engine.can_zoom_previous());
    assert!(!engine.can_zoom_next());

    engine.select_previous_tile();
    assert_eq!(engine.tile_index(), 1);
    assert!(!engine.can_zoom_previous());
}

#[test]
fn test_page_change_event_carries_status_data() {
    let mut engine = four_page_fixture();
    engine.go_to_page(3);
    let events = take_events(&engine);
    assert_eq!(
        events[0],
        ViewerEvent::PageChanged {
            page: 3,
            previous: 1,
            page_count: 4
        }
    );
    assert!(matches!(events[1], ViewerEvent::ZoomChanged { page: 3, .. }));
    assert_eq!(events.len(), 2);
}

#[test]
fn test_out_of_range_page_is_silent() {
    let mut engine = four_page_fixture();
    assert!(!engine.go_to_page(33));
    assert!(!engine.go_to_page(0));
    assert_eq!(engine.current_page(), 1);
    assert!(take_events(&engine).is_empty());
}

#[test]
fn test_boundary_page_moves_are_silent() {
    let mut engine = four_page_fixture();
    assert!(!engine.go_to_first());
    assert!(!engine.go_to_previous());
    assert!(take_events(&engine).is_empty());

    assert!(engine.go_to_last());
    assert_eq!(count(&take_events(&engine), EventCategory::Page), 1);
    assert!(!engine.go_to_next());
    assert!(take_events(&engine).is_empty());
}

#[test]
fn test_zoom_history_exhausts() {
    let mut engine = default_document(1);
    for i in 0..10 {
        if i % 2 == 0 {
            engine.zoom_in();
        } else {
            engine.zoom_out();
        }
        assert!(engine.can_zoom_previous());
    }

    let mut steps = 0;
    while engine.can_zoom_previous() {
        engine.zoom_previous();
        steps += 1;
    }
    assert_eq!(steps, 10);
    engine.zoom_previous();
    assert!(!engine.can_zoom_previous());
    assert!(engine.can_zoom_next());
}

#[test]
fn test_zoom_history_capped_at_twenty() {
    let mut engine = default_document(1);
    for _ in 0..12 {
        engine.zoom_in();
        engine.zoom_out();
    }

    let mut steps = 0;
    while engine.can_zoom_previous() {
        engine.zoom_previous();
        steps += 1;
    }
    assert_eq!(steps, 19);
}

#[test]
fn test_fit_mode_toggle_and_exclusion() {
    let mut engine = default_document(2);
    engine.set_fit_mode(FitMode::None);

    engine.toggle_fit_mode(FitMode::FitToPage);
    assert!(engine.is_fit_mode_checked(FitMode::FitToPage));
    engine.toggle_fit_mode(FitMode::FitToPage);
    assert_eq!(engine.fit_mode(), FitMode::None);

    engine.toggle_fit_mode(FitMode::FitToWidth);
    engine.toggle_fit_mode(FitMode::FitToPage);
    assert!(engine.is_fit_mode_checked(FitMode::FitToPage));
    assert!(!engine.is_fit_mode_checked(FitMode::FitToWidth));
}

#[test]
fn test_fit_mode_change_raises_two_events() {
    let mut engine = default_document(1);
    engine.set_fit_mode(FitMode::FitToWidth);
    let events = take_events(&engine);
    assert_eq!(
        events[0],
        ViewerEvent::FitModeChanged {
            fit_mode: FitMode::FitToWidth,
            previous: FitMode::FitToPage
        }
    );
    assert!(matches!(events[1], ViewerEvent::ZoomChanged { .. }));
    assert_eq!(events.len(), 2);

    engine.set_fit_mode(FitMode::FitToWidth);
    assert!(take_events(&engine).is_empty());
}

#[test]
fn test_manual_zoom_forces_fit_mode_off() {
    let mut engine = default_document(1);
    engine.zoom_in();
    let events = take_events(&engine);
    assert_eq!(events.len(), 2);
    assert_eq!(engine.fit_mode(), FitMode::None);
    assert!(!engine.can_select_next_tile());
}

#[test]
fn test_rotation_is_isolated_per_page() {
    let mut engine = default_document(4);
    let unrotated = engine.view().expect("view");

    engine.rotate(90, RotateOptions::default()).expect("rotate");
    let events = take_events(&engine);
    assert_eq!(count(&events, EventCategory::Orientation), 1);

    engine.go_to_page(2);
    assert_eq!(engine.orientation(2), Orientation::Deg0);
    assert_eq!(engine.orientation(1), Orientation::Deg90);
    assert!(engine.view().expect("view").approx_eq(&unrotated));
}

#[test]
fn test_rotate_zero_still_notifies() {
    let mut engine = default_document(1);
    engine.rotate(0, RotateOptions::default()).expect("rotate");
    let events = take_events(&engine);
    assert_eq!(count(&events, EventCategory::Orientation), 1);
}

#[test]
fn test_rotation_refreshes_tile_enablement() {
    let mut engine = four_page_fixture();
    engine.go_to_last();
    for _ in 0..3 {
        engine.select_next_tile();
    }
    assert!(!engine.can_select_next_tile());

    // Rotated, the last page is a single wide tile and the walk restarts.
    engine.rotate(90, RotateOptions::default()).expect("rotate");
    assert_eq!(engine.tile_count(), 1);
    assert!(!engine.can_select_next_tile());
    assert!(engine.can_select_previous_tile());
}

#[test]
fn test_tool_change_raises_one_event() {
    let mut engine = default_document(1);
    engine.set_cursor_tool(CursorTool::ZoomWindow);
    engine.set_cursor_tool(CursorTool::ZoomWindow);
    let events = take_events(&engine);
    assert_eq!(
        events,
        vec![ViewerEvent::CursorToolChanged {
            tool: CursorTool::ZoomWindow,
            previous: CursorTool::Pan
        }]
    );
}

#[test]
fn test_subscribers_see_events_in_order() {
    let mut engine = default_document(3);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    engine.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Page, EventCategory::Zoom]),
        move |event| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(event.category());
            }
        },
    );

    engine.go_to_next();
    let seen = seen.lock().expect("lock").clone();
    assert_eq!(seen, vec![EventCategory::Page, EventCategory::Zoom]);
}

#[test]
#[should_panic(expected = "adapter failed")]
fn test_handler_panic_reaches_caller() {
    let mut engine = default_document(2);
    engine
        .events()
        .subscribe(EventFilter::All, |_| panic!("adapter failed"));
    engine.go_to_next();
}

#[test]
fn test_closed_engine_ignores_navigation() {
    let mut engine = recording_engine(ViewerConfig::default());
    engine.zoom_in();
    engine.zoom_previous();
    engine.select_next_tile();
    engine.go_to_page(1);
    engine.set_fit_mode(FitMode::FitToWidth);
    assert!(engine.events().history(None).is_empty());
    assert!(!engine.can_zoom_in());
    assert!(!engine.can_select_next_tile());
}
