//! Clipped quad emission.
//!
//! Every primitive is clipped to the owner's rectangle before it reaches the
//! mesh. Filled rectangles clip exactly by intersection. Arbitrary quads
//! (bridges) are split into two triangles and each triangle is clipped
//! polygon-wise against the clip edges.

use rectmesh_core::math::{Vec2, Vec3, Vec4};
use rectmesh_core::{Color, Rect};

use crate::vertex::{MeshData, PrimitiveKind, UiVertex};

/// Two triangles over four corners in winding order.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

const QUAD_TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [2, 3, 0]];

/// Twice-area threshold below which a clipped polygon is dropped.
const MIN_DOUBLE_AREA: f32 = 1e-6;

impl MeshData {
    /// Append `rect` filled with `color`, clipped to `clip`.
    ///
    /// UVs span (0,0)..(1,1) over the unclipped rect, so a clipped rect keeps
    /// the texture in place. Returns the number of vertices added.
    pub fn add_rect_clipped(
        &mut self,
        rect: Rect,
        color: Color,
        clip: Rect,
        depth: f32,
        kind: PrimitiveKind,
    ) -> u32 {
        let clipped = rect.intersect(&clip);
        if !clipped.has_area() {
            return 0;
        }
        let size = rect.size();
        let uv_min = (clipped.min - rect.min) / size;
        let uv_max = (clipped.max - rect.min) / size;

        let quad = [
            UiVertex::new(clipped.min.extend(depth), color, uv_min),
            UiVertex::new(
                Vec3::new(clipped.min.x, clipped.max.y, depth),
                color,
                Vec2::new(uv_min.x, uv_max.y),
            ),
            UiVertex::new(clipped.max.extend(depth), color, uv_max),
            UiVertex::new(
                Vec3::new(clipped.max.x, clipped.min.y, depth),
                color,
                Vec2::new(uv_max.x, uv_min.y),
            ),
        ];
        self.push_primitive(kind, &quad, &QUAD_INDICES)
    }

    /// Append an arbitrary quad clipped to `clip`.
    ///
    /// A quad fully inside the clip is appended as its 4 corners. Otherwise
    /// each of its two triangles is clipped against the four clip edges and
    /// the surviving polygons are fanned back into triangles. Returns the
    /// number of vertices added, 0 when nothing survives.
    pub fn add_quad_clipped(
        &mut self,
        quad: &[UiVertex; 4],
        clip: Rect,
        kind: PrimitiveKind,
    ) -> u32 {
        if quad.iter().all(|v| clip.contains(v.position().truncate())) {
            return self.push_primitive(kind, quad, &QUAD_INDICES);
        }

        let mut vertices = [<UiVertex as bytemuck::Zeroable>::zeroed(); 2 * MAX_POLYGON];
        let mut indices = [0u32; 2 * 3 * (MAX_POLYGON - 2)];
        let (mut vertex_count, mut index_count) = (0, 0);
        for triangle in QUAD_TRIANGLES {
            let polygon = clip_triangle(triangle.map(|i| quad[i]), clip);
            if polygon.is_degenerate() {
                continue;
            }
            let base = vertex_count as u32;
            for i in 1..polygon.len as u32 - 1 {
                let fan = [base, base + i, base + i + 1];
                indices[index_count..index_count + 3].copy_from_slice(&fan);
                index_count += 3;
            }
            vertices[vertex_count..vertex_count + polygon.len]
                .copy_from_slice(polygon.vertices());
            vertex_count += polygon.len;
        }
        self.push_primitive(kind, &vertices[..vertex_count], &indices[..index_count])
    }
}

/// A triangle clipped by four edges has at most 3 + 4 corners.
const MAX_POLYGON: usize = 7;

/// Convex polygon produced while clipping one triangle.
#[derive(Clone, Copy)]
struct ClipPolygon {
    corners: [UiVertex; MAX_POLYGON],
    len: usize,
}

impl ClipPolygon {
    fn from_triangle(triangle: [UiVertex; 3]) -> Self {
        let mut polygon = Self {
            corners: [<UiVertex as bytemuck::Zeroable>::zeroed(); MAX_POLYGON],
            len: 3,
        };
        polygon.corners[..3].copy_from_slice(&triangle);
        polygon
    }

    fn vertices(&self) -> &[UiVertex] {
        &self.corners[..self.len]
    }

    fn push(&mut self, vertex: UiVertex) {
        if self.len < MAX_POLYGON {
            self.corners[self.len] = vertex;
            self.len += 1;
        }
    }

    /// Fewer than three corners or (near) zero area.
    fn is_degenerate(&self) -> bool {
        if self.len < 3 {
            return true;
        }
        let points = self.vertices().iter().map(|v| v.position().truncate());
        let first = self.corners[0].position().truncate();
        let double_area: f32 = points
            .clone()
            .zip(points.skip(1))
            .map(|(a, b)| (a - first).perp_dot(b - first))
            .sum();
        double_area.abs() <= MIN_DOUBLE_AREA
    }

    /// Keep the part where `distance` is non-negative (Sutherland-Hodgman).
    fn clip_edge(&self, distance: impl Fn(Vec2) -> f32) -> Self {
        let mut out = Self {
            corners: self.corners,
            len: 0,
        };
        let vertices = self.vertices();
        for (i, &cur) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            let d_cur = distance(cur.position().truncate());
            let d_next = distance(next.position().truncate());
            if d_cur >= 0.0 {
                out.push(cur);
            }
            if (d_cur >= 0.0) != (d_next >= 0.0) {
                out.push(lerp_vertex(cur, next, d_cur / (d_cur - d_next)));
            }
        }
        out
    }
}

/// Clip a triangle against the four edges of `clip`.
fn clip_triangle(triangle: [UiVertex; 3], clip: Rect) -> ClipPolygon {
    let polygon = ClipPolygon::from_triangle(triangle);
    let polygon = polygon.clip_edge(|p| p.x - clip.min.x);
    let polygon = polygon.clip_edge(|p| clip.max.x - p.x);
    let polygon = polygon.clip_edge(|p| p.y - clip.min.y);
    polygon.clip_edge(|p| clip.max.y - p.y)
}

/// Vertex at `t` along the edge `a -> b`, with every attribute interpolated.
fn lerp_vertex(a: UiVertex, b: UiVertex, t: f32) -> UiVertex {
    let color = Vec4::from_array(a.color).lerp(Vec4::from_array(b.color), t);
    UiVertex {
        position: a.position().lerp(b.position(), t).to_array(),
        color: color.to_array(),
        uv: a.uv().lerp(b.uv(), t).to_array(),
    }
}
