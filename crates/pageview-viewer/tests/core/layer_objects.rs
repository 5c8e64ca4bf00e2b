use pageview_core::{LayerObjectKind, Point, Rect};
use pageview_viewer::{LayerObjectShape, LayerObjectStore};

#[test]
fn test_objects_stay_on_their_page() {
    let mut store = LayerObjectStore::new();
    store.add(1, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)));
    store.add(3, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)));

    assert!(store.has_objects(1));
    assert!(!store.has_objects(2));
    assert!(store.intersecting(2, &Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
}

#[test]
fn test_kind_follows_shape() {
    let mut store = LayerObjectStore::new();
    let id = store.add(
        1,
        LayerObjectShape::Angular {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
            height: 4.0,
        },
    );
    assert_eq!(
        store.get(id).map(|o| o.kind()),
        Some(LayerObjectKind::AngularHighlight)
    );
}

#[test]
fn test_hit_tolerance() {
    let mut store = LayerObjectStore::new();
    let id = store.add(1, LayerObjectShape::Rectangle(Rect::new(10.0, 10.0, 10.0, 10.0)));
    assert_eq!(store.hit_test(1, Point::new(8.0, 8.0), 0.0), None);
    assert_eq!(store.hit_test(1, Point::new(8.0, 8.0), 3.0), Some(id));
}

#[test]
fn test_clear_empties_every_page() {
    let mut store = LayerObjectStore::new();
    store.add(1, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 1.0, 1.0)));
    store.add(2, LayerObjectShape::Rectangle(Rect::new(0.0, 0.0, 1.0, 1.0)));
    store.clear();
    assert_eq!(store.count(), 0);
}
