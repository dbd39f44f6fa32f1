//! Mesh rebuild from an ordered chain of rectangles.
//!
//! Each present rectangle becomes a filled quad. When bridging is enabled,
//! a connector quad joins the right edge of the previous present rectangle
//! to the left edge of the current one. Bridging follows list order, not
//! spatial order, so a chain that doubles back produces crossing bridges.

use rectmesh_core::math::{Vec2, Vec3};
use rectmesh_core::profiling::{profile_function, profile_scope};
use rectmesh_core::{Color, Rect};

use crate::vertex::{MeshData, PrimitiveKind, UiVertex};

/// Per-rebuild options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    /// Emit bridging quads between consecutive present rectangles.
    pub connect_ends: bool,
    /// Fill applied to every emitted vertex.
    pub fill_color: Color,
    /// Z of every emitted vertex.
    pub depth: f32,
    /// Trace every emitted vertex and validate the result.
    pub debug_verts: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            connect_ends: true,
            fill_color: Color::WHITE,
            depth: 0.0,
            debug_verts: false,
        }
    }
}

/// Counts from one rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Entries walked, absent ones included.
    pub entries: usize,
    /// Entries skipped because the source was absent.
    pub skipped: usize,
    pub fills: usize,
    pub bridges: usize,
    pub vertices: usize,
    pub triangles: usize,
}

struct BuildState {
    prev: Option<Rect>,
    vertex_offset: u32,
}

/// Rebuilds the graphic mesh.
///
/// The builder owns a staging mesh that each pass writes into. Only a
/// completed pass is swapped into the caller's mesh, and the caller's old
/// buffers become the next staging area, so steady-state rebuilds reuse the
/// same two allocations.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    staging: MeshData,
    quad: [UiVertex; 4],
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mesh for `rects` (local space, `None` for absent entries)
    /// and swap it into `out`.
    pub fn build<I>(
        &mut self,
        rects: I,
        clip: Rect,
        options: &BuildOptions,
        out: &mut MeshData,
    ) -> BuildStats
    where
        I: IntoIterator<Item = Option<Rect>>,
    {
        profile_function!();
        let stats = if options.debug_verts {
            let span = tracing::debug_span!("rects_mesh_debug");
            let _guard = span.enter();
            let stats = self.build_staging(rects, clip, options);
            self.trace_staging();
            stats
        } else {
            self.build_staging(rects, clip, options)
        };

        std::mem::swap(out, &mut self.staging);
        tracing::debug!(
            "Rebuilt rect mesh: {} fills, {} bridges, {} vertices ({} absent skipped)",
            stats.fills,
            stats.bridges,
            stats.vertices,
            stats.skipped
        );
        stats
    }

    fn build_staging<I>(&mut self, rects: I, clip: Rect, options: &BuildOptions) -> BuildStats
    where
        I: IntoIterator<Item = Option<Rect>>,
    {
        self.staging.clear();
        let mut stats = BuildStats::default();
        let mut state = BuildState {
            prev: None,
            vertex_offset: 0,
        };

        for rect in rects {
            stats.entries += 1;
            let Some(cur) = rect else {
                stats.skipped += 1;
                continue;
            };

            if let Some(prev) = state.prev
                && options.connect_ends
            {
                profile_scope!("bridge");
                self.fill_bridge(prev, cur, options);
                let added = self
                    .staging
                    .add_quad_clipped(&self.quad, clip, PrimitiveKind::Bridge);
                if added > 0 {
                    stats.bridges += 1;
                }
                state.vertex_offset += added;
            }

            let added = self.staging.add_rect_clipped(
                cur,
                options.fill_color,
                clip,
                options.depth,
                PrimitiveKind::Fill,
            );
            if added > 0 {
                stats.fills += 1;
            }
            state.vertex_offset += added;
            state.prev = Some(cur);
        }

        debug_assert_eq!(state.vertex_offset as usize, self.staging.vertex_count());
        stats.vertices = self.staging.vertex_count();
        stats.triangles = self.staging.triangle_count();
        stats
    }

    /// Connector from `prev`'s right edge to `cur`'s left edge.
    fn fill_bridge(&mut self, prev: Rect, cur: Rect, options: &BuildOptions) {
        let z = options.depth;
        let color = options.fill_color;
        self.quad = [
            UiVertex::new(Vec3::new(prev.x_max(), prev.y_min(), z), color, Vec2::new(0.0, 0.0)),
            UiVertex::new(Vec3::new(prev.x_max(), prev.y_max(), z), color, Vec2::new(0.0, 1.0)),
            UiVertex::new(Vec3::new(cur.x_min(), cur.y_max(), z), color, Vec2::new(1.0, 1.0)),
            UiVertex::new(Vec3::new(cur.x_min(), cur.y_min(), z), color, Vec2::new(1.0, 0.0)),
        ];
    }

    fn trace_staging(&self) {
        for span in self.staging.primitives() {
            let first = span.first_vertex as usize;
            let vertices = &self.staging.vertices()[first..first + span.vertex_count as usize];
            for (i, v) in vertices.iter().enumerate() {
                tracing::trace!(
                    "{:?} vertex {}: pos={:?} uv={:?} color={:?}",
                    span.kind,
                    first + i,
                    v.position,
                    v.uv,
                    v.color
                );
            }
        }
        if let Err(err) = self.staging.validate() {
            tracing::warn!("Rect mesh failed validation: {}", err);
        }
    }
}
