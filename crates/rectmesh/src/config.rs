//! Options of a rectangles graphic.

use rectmesh_core::Color;

/// Configuration for [`RectsGraphic`](crate::RectsGraphic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectsGraphicConfig {
    /// Connect consecutive rects into a single contiguous graphic.
    pub connect_ends: bool,

    /// Hit test everywhere inside the owner EXCEPT the tracked rect areas.
    pub pass_through_rects: bool,

    /// Trace and validate emitted vertices on every rebuild.
    /// Diagnostic only; the mesh is unchanged.
    pub debug_verts: bool,

    /// Uniform fill of the whole graphic.
    pub fill_color: Color,

    /// When `false` the graphic ignores hit tests entirely.
    pub raycast_target: bool,
}

impl Default for RectsGraphicConfig {
    fn default() -> Self {
        Self {
            connect_ends: true,
            pass_through_rects: true,
            debug_verts: false,
            fill_color: Color::WHITE,
            raycast_target: true,
        }
    }
}

impl RectsGraphicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_ends(mut self, connect_ends: bool) -> Self {
        self.connect_ends = connect_ends;
        self
    }

    pub fn with_pass_through_rects(mut self, pass_through: bool) -> Self {
        self.pass_through_rects = pass_through;
        self
    }

    pub fn with_debug_verts(mut self, debug_verts: bool) -> Self {
        self.debug_verts = debug_verts;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_raycast_target(mut self, raycast_target: bool) -> Self {
        self.raycast_target = raycast_target;
        self
    }

    /// Returns `true` if switching from `self` to `other` changes the mesh.
    pub fn affects_geometry(&self, other: &RectsGraphicConfig) -> bool {
        self.connect_ends != other.connect_ends || self.fill_color != other.fill_color
    }
}
