//! Hit testing tests.
//!
//! The owner rect is the hit region; tracked rects are holes in it when
//! pass-through is on.

use rectmesh::{
    HitTester, OwnerTransform, RectRegistry, RectSourceStore, RectsGraphic, RectsGraphicConfig,
    SharedListener,
};
use rectmesh_core::Rect;
use rectmesh_core::math::{Vec2, Vec3};
use std::rc::Rc;

struct Fixture {
    store: RectSourceStore,
    registry: RectRegistry,
    _listener: SharedListener,
}

fn fixture() -> Fixture {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(10.0, 10.0, 10.0, 10.0));
    let b = store.insert(Rect::from_xywh(40.0, 10.0, 10.0, 10.0));
    let listener: SharedListener = Rc::new(rectmesh::InvalidationSignal::new());
    let mut registry = RectRegistry::new();
    registry.set_rects([Some(a), None, Some(b)], &mut store, &listener);
    Fixture {
        store,
        registry,
        _listener: listener,
    }
}

fn outer() -> Rect {
    Rect::from_xywh(0.0, 0.0, 100.0, 30.0)
}

#[test]
fn test_point_outside_outer_bounds_never_hits() {
    let f = fixture();
    let point = Vec2::new(150.0, 15.0);

    for raycast_target in [true, false] {
        for pass_through in [true, false] {
            let tester = HitTester {
                raycast_target,
                pass_through,
            };
            assert!(!tester.contains(point, outer(), f.registry.snapshot(), &f.store));
        }
    }
}

#[test]
fn test_tracked_rect_is_hole_with_pass_through() {
    let f = fixture();
    let inside_a = Vec2::new(15.0, 15.0);

    let pass = HitTester::default();
    assert!(!pass.contains(inside_a, outer(), f.registry.snapshot(), &f.store));

    let solid = HitTester {
        pass_through: false,
        ..Default::default()
    };
    assert!(solid.contains(inside_a, outer(), f.registry.snapshot(), &f.store));
}

#[test]
fn test_point_between_rects_hits() {
    let f = fixture();
    let tester = HitTester::default();

    assert!(tester.contains(Vec2::new(30.0, 15.0), outer(), f.registry.snapshot(), &f.store));
}

#[test]
fn test_disabled_target_never_hits() {
    let f = fixture();
    let tester = HitTester {
        raycast_target: false,
        pass_through: false,
    };

    assert!(!tester.contains(Vec2::new(30.0, 15.0), outer(), f.registry.snapshot(), &f.store));
}

#[test]
fn test_destroyed_rect_stops_being_a_hole() {
    let mut f = fixture();
    let a = f.registry.snapshot()[0].source().unwrap();
    f.store.remove(a);

    let tester = HitTester::default();
    assert!(tester.contains(Vec2::new(15.0, 15.0), outer(), f.registry.snapshot(), &f.store));
}

#[test]
fn test_empty_snapshot_hits_whole_outer_rect() {
    let store = RectSourceStore::new();
    let tester = HitTester::default();

    assert!(tester.contains(Vec2::new(1.0, 1.0), outer(), &[], &store));
}

#[test]
fn test_graphic_hit_test_uses_world_space() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(110.0, 10.0, 10.0, 10.0));
    let transform = OwnerTransform::new(
        Rect::from_xywh(0.0, 0.0, 50.0, 50.0),
        Vec3::new(100.0, 0.0, 0.0),
        Vec2::ONE,
    )
    .unwrap();
    let mut g = RectsGraphic::new(RectsGraphicConfig::default(), transform);
    g.set_rects([a], &mut store);

    assert!(!g.contains(Vec2::new(10.0, 10.0), &store));
    assert!(g.contains(Vec2::new(105.0, 5.0), &store));
    assert!(!g.contains(Vec2::new(115.0, 15.0), &store));

    g.set_pass_through_rects(false);
    assert!(g.contains(Vec2::new(115.0, 15.0), &store));

    g.set_raycast_target(false);
    assert!(!g.contains(Vec2::new(105.0, 5.0), &store));
}
