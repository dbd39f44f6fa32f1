//! Benchmarks for rect mesh rebuilds.
//!
//! Measures:
//! - A full rebuild pulled after one tracked rect moves
//! - The builder alone over a chain of local rects
//! - A clean pull (no rebuild)

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rectmesh::{
    BuildOptions, MeshBuilder, MeshData, OwnerTransform, RectSourceStore, RectsGraphic,
    RectsGraphicConfig,
};
use rectmesh_core::Rect;

fn setup(rect_count: usize) -> (RectSourceStore, RectsGraphic, Vec<rectmesh::RectSourceHandle>) {
    let mut store = RectSourceStore::new();
    let handles: Vec<_> = (0..rect_count)
        .map(|i| store.insert(Rect::from_xywh(i as f32 * 20.0, 0.0, 10.0, 10.0)))
        .collect();
    let owner = OwnerTransform::identity(Rect::from_xywh(0.0, 0.0, rect_count as f32 * 20.0, 10.0));
    let mut graphic = RectsGraphic::new(RectsGraphicConfig::default(), owner);
    graphic.set_rects(handles.iter().copied(), &mut store);
    graphic.populate_mesh(&store);
    (store, graphic, handles)
}

fn bench_rebuild_after_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_mesh/rebuild_after_move");

    for rect_count in [4, 32, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(rect_count),
            &rect_count,
            |b, &count| {
                let (mut store, mut graphic, handles) = setup(count);
                let mut offset = 0.0;

                b.iter(|| {
                    offset = if offset == 0.0 { 1.0 } else { 0.0 };
                    store.set_rect(handles[0], Rect::from_xywh(offset, 0.0, 10.0, 10.0));
                    black_box(graphic.populate_mesh(&store).vertex_count());
                });
            },
        );
    }

    group.finish();
}

fn bench_builder_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_mesh/builder");

    for rect_count in [4, 32, 256] {
        let rects: Vec<Option<Rect>> = (0..rect_count)
            .map(|i| Some(Rect::from_xywh(i as f32 * 20.0, 0.0, 10.0, 10.0)))
            .collect();
        let clip = Rect::from_xywh(0.0, 0.0, rect_count as f32 * 10.0, 10.0);

        group.bench_with_input(BenchmarkId::from_parameter(rect_count), &rects, |b, rects| {
            let mut builder = MeshBuilder::new();
            let mut mesh = MeshData::new();
            let options = BuildOptions::default();

            b.iter(|| {
                builder.build(rects.iter().copied(), clip, &options, &mut mesh);
                black_box(mesh.triangle_count());
            });
        });
    }

    group.finish();
}

fn bench_clean_pull(c: &mut Criterion) {
    c.bench_function("rect_mesh/clean_pull", |b| {
        let (store, mut graphic, _handles) = setup(256);

        b.iter(|| {
            black_box(graphic.populate_mesh(&store).vertex_count());
        });
    });
}

criterion_group!(
    benches,
    bench_rebuild_after_move,
    bench_builder_only,
    bench_clean_pull
);
criterion_main!(benches);
