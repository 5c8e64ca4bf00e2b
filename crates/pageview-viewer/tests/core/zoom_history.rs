use pageview_core::{FitMode, Rect};
use pageview_viewer::{ZoomHistory, ZoomSnapshot, DEFAULT_HISTORY_CAPACITY};
use proptest::prelude::*;

fn snapshot(scale: f64) -> ZoomSnapshot {
    ZoomSnapshot {
        scale_factor: scale,
        source_rectangle: Rect::new(0.0, 0.0, 1200.0 / scale, 800.0 / scale),
        page: 1,
        fit_mode: FitMode::None,
    }
}

#[test]
fn test_twelve_zoom_cycles_cap_at_twenty() {
    let mut history = ZoomHistory::new();
    for cycle in 0..12 {
        history.push(snapshot(1.2 + cycle as f64));
        history.push(snapshot(1.0 + cycle as f64));
    }
    assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);

    let mut steps = 0;
    while history.can_go_back() {
        history.go_back().expect("back");
        steps += 1;
    }
    assert_eq!(steps, DEFAULT_HISTORY_CAPACITY - 1);
    assert!(history.go_back().is_err());
}

#[test]
fn test_custom_capacity() {
    let mut history = ZoomHistory::with_capacity(3);
    for i in 0..10 {
        history.push(snapshot(1.0 + i as f64));
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.current().map(|s| s.scale_factor), Some(10.0));
}

#[test]
fn test_clear_disables_both_directions() {
    let mut history = ZoomHistory::new();
    history.push(snapshot(1.0));
    history.push(snapshot(2.0));
    history.go_back().expect("back");
    history.clear();
    assert!(!history.can_go_back());
    assert!(!history.can_go_forward());
    assert!(history.current().is_none());
}

#[derive(Debug, Clone)]
enum Op {
    Push(f64),
    Back,
    Forward,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.1f64..50.0).prop_map(Op::Push),
        Just(Op::Back),
        Just(Op::Forward),
    ]
}

proptest! {
    #[test]
    fn prop_history_invariants(ops in prop::collection::vec(op(), 0..80)) {
        let mut history = ZoomHistory::new();
        for op in ops {
            match op {
                Op::Push(scale) => history.push(snapshot(scale)),
                Op::Back => {
                    let allowed = history.can_go_back();
                    prop_assert_eq!(history.go_back().is_ok(), allowed);
                }
                Op::Forward => {
                    let allowed = history.can_go_forward();
                    prop_assert_eq!(history.go_forward().is_ok(), allowed);
                }
            }

            prop_assert!(history.len() <= DEFAULT_HISTORY_CAPACITY);
            if !history.is_empty() {
                prop_assert!(history.cursor() < history.len());
                prop_assert_eq!(history.can_go_back(), history.cursor() > 0);
                prop_assert_eq!(
                    history.can_go_forward(),
                    history.cursor() < history.len() - 1
                );
            }
        }
    }
}
