//! Component tests: subscriptions, invalidation and lifecycle.
//!
//! A `RectSourceStore` stands in for the host UI; moving a rect through it
//! must dirty the graphic exactly when that rect is tracked.

use rectmesh::{
    DirtyReason, OwnerTransform, PrimitiveKind, RectSourceStore, RectsGraphic, RectsGraphicConfig,
};
use rectmesh_core::math::{Vec2, Vec3};
use rectmesh_core::{Color, Rect};

fn owner() -> OwnerTransform {
    OwnerTransform::identity(Rect::from_xywh(0.0, 0.0, 200.0, 50.0))
}

fn graphic() -> RectsGraphic {
    RectsGraphic::new(RectsGraphicConfig::default(), owner())
}

fn nudge(store: &mut RectSourceStore, handle: rectmesh::RectSourceHandle) {
    let rect = rectmesh::RectSources::world_rect(store, handle).unwrap();
    store.set_rect(
        handle,
        Rect::from_min_max(rect.min + Vec2::X, rect.max + Vec2::X),
    );
}

#[test]
fn test_new_graphic_builds_empty_mesh() {
    let store = RectSourceStore::new();
    let mut g = graphic();

    assert!(g.is_dirty());
    assert!(g.populate_mesh(&store).is_empty());
    assert!(!g.is_dirty());
}

#[test]
fn test_geometry_change_marks_dirty_and_rebuilds_once() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let b = store.insert(Rect::from_xywh(20.0, 0.0, 10.0, 10.0));
    let mut g = graphic();
    g.set_rects([a, b], &mut store);
    g.populate_mesh(&store);
    let rebuilds = g.rebuild_count();

    nudge(&mut store, a);
    nudge(&mut store, a);
    nudge(&mut store, b);
    assert!(g.is_dirty());
    assert_eq!(g.invalidation().reasons(), DirtyReason::RECT_GEOMETRY);

    g.populate_mesh(&store);
    g.populate_mesh(&store);
    assert_eq!(g.rebuild_count(), rebuilds + 1);
}

#[test]
fn test_rebuild_reads_moved_rect() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let mut g = graphic();
    g.set_rects([a], &mut store);
    g.populate_mesh(&store);

    store.set_rect(a, Rect::from_xywh(100.0, 0.0, 10.0, 10.0));
    let mesh = g.populate_mesh(&store);

    assert_eq!(mesh.vertices()[0].position, [100.0, 0.0, 0.0]);
}

#[test]
fn test_set_rects_replaces_subscriptions() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let b = store.insert(Rect::from_xywh(20.0, 0.0, 10.0, 10.0));
    let c = store.insert(Rect::from_xywh(40.0, 0.0, 10.0, 10.0));
    let mut g = graphic();

    g.set_rects([a, b], &mut store);
    g.populate_mesh(&store);
    nudge(&mut store, a);
    assert!(g.is_dirty());
    g.populate_mesh(&store);

    g.set_rects([c], &mut store);
    g.populate_mesh(&store);
    assert_eq!(store.listener_count(a), 0);
    assert_eq!(store.listener_count(b), 0);
    assert_eq!(store.listener_count(c), 1);

    nudge(&mut store, a);
    assert!(!g.is_dirty());
}

#[test]
fn test_repeated_update_keeps_one_subscription() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let mut g = graphic();

    g.set_rects([a], &mut store);
    g.initialize(&mut store);
    g.on_configuration_changed(RectsGraphicConfig::default(), &mut store);
    g.initialize(&mut store);
    assert_eq!(store.listener_count(a), 1);

    let before = g.invalidation().notification_count();
    nudge(&mut store, a);
    assert_eq!(g.invalidation().notification_count(), before + 1);
}

#[test]
fn test_duplicate_sources_are_kept() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let mut g = graphic();

    g.set_rects([a, a], &mut store);
    let mesh = g.populate_mesh(&store);

    assert_eq!(mesh.count_of(PrimitiveKind::Fill), 2);
    assert_eq!(mesh.count_of(PrimitiveKind::Bridge), 1);
    assert_eq!(store.listener_count(a), 1);
}

#[test]
fn test_destroyed_source_is_skipped() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let b = store.insert(Rect::from_xywh(20.0, 0.0, 10.0, 10.0));
    let c = store.insert(Rect::from_xywh(40.0, 0.0, 10.0, 10.0));
    let mut g = graphic();
    g.set_rects([a, b, c], &mut store);
    g.populate_mesh(&store);

    store.remove(b);
    g.set_connect_ends(true);
    g.set_fill_color(Color::RED);
    let mesh = g.populate_mesh(&store);

    assert_eq!(mesh.count_of(PrimitiveKind::Fill), 2);
    assert_eq!(mesh.count_of(PrimitiveKind::Bridge), 1);
    assert_eq!(g.last_build().skipped, 1);
    assert_eq!(g.snapshot().len(), 3);
}

#[test]
fn test_config_changes_mark_dirty_only_when_different() {
    let store = RectSourceStore::new();
    let mut g = graphic();
    g.populate_mesh(&store);

    g.set_connect_ends(true);
    g.set_fill_color(Color::WHITE);
    assert!(!g.is_dirty());

    g.set_connect_ends(false);
    assert!(g.is_dirty());
    assert_eq!(g.invalidation().reasons(), DirtyReason::CONFIG);
}

#[test]
fn test_configuration_change_adds_config_reason_only_for_geometry() {
    let mut store = RectSourceStore::new();
    let mut g = graphic();
    g.populate_mesh(&store);

    let hit_only = RectsGraphicConfig::default().with_pass_through_rects(false);
    g.on_configuration_changed(hit_only, &mut store);
    assert_eq!(g.invalidation().reasons(), DirtyReason::RECT_LIST);
    assert!(!g.config().pass_through_rects);
    g.populate_mesh(&store);

    let unbridged = hit_only.with_connect_ends(false);
    g.on_configuration_changed(unbridged, &mut store);
    assert_eq!(
        g.invalidation().reasons(),
        DirtyReason::RECT_LIST | DirtyReason::CONFIG
    );
}

#[test]
fn test_transform_change_relocates_mesh() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(50.0, 10.0, 10.0, 10.0));
    let mut g = graphic();
    g.set_rects([a], &mut store);
    g.populate_mesh(&store);

    let moved = owner().with_translation(Vec3::new(40.0, 0.0, 5.0));
    g.set_transform(moved);
    assert!(g.is_dirty());
    let mesh = g.populate_mesh(&store);

    assert_eq!(mesh.vertices()[0].position, [10.0, 10.0, 5.0]);
}

#[test]
fn test_teardown_is_idempotent() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let b = store.insert(Rect::from_xywh(20.0, 0.0, 10.0, 10.0));
    let mut g = graphic();
    g.set_rects([a, b], &mut store);
    g.initialize(&mut store);
    g.populate_mesh(&store);

    store.remove(a);
    g.teardown(&mut store);
    g.teardown(&mut store);

    assert!(!g.is_active());
    assert_eq!(store.listener_count(b), 0);
    nudge(&mut store, b);
    assert!(!g.is_dirty());
}

#[test]
fn test_dropped_graphic_does_not_break_store() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    {
        let mut g = graphic();
        g.set_rects([a], &mut store);
    }
    assert_eq!(store.listener_count(a), 0);
    assert!(store.set_rect(a, Rect::from_xywh(5.0, 5.0, 1.0, 1.0)));
}

#[test]
fn test_debug_overlay_outlines_present_rects() {
    let mut store = RectSourceStore::new();
    let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let b = store.insert(Rect::from_xywh(20.0, 0.0, 10.0, 10.0));
    let mut g = graphic();
    g.set_rects([Some(a), None, Some(b)], &mut store);

    let mut list = rectmesh::DebugDrawList::new();
    let drawn = g.draw_debug_overlay(&store, &mut list);

    assert_eq!(drawn, 2);
    // one fill and four outline segments per rect
    assert_eq!(list.len(), 10);
    assert!(matches!(
        &list.commands()[0],
        rectmesh::DebugCommand::Quad(q) if q.color == rectmesh::debug::DEBUG_FILL
    ));
}
