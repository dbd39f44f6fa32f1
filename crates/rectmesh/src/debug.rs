//! Diagnostic overlay for tracked rectangles.
//!
//! Collects world-space drawing commands outlining every tracked rectangle.
//! The host renders them with whatever overlay renderer it has; nothing here
//! feeds back into the graphic mesh.

use rectmesh_core::math::Vec2;
use rectmesh_core::{Color, Rect};

use crate::registry::TrackedRect;
use crate::source::RectSources;

/// Translucent fill drawn over each tracked rect.
pub const DEBUG_FILL: Color = Color::CYAN.with_alpha(0.15);

/// Outline color of each tracked rect.
pub const DEBUG_OUTLINE: Color = Color::BLUE;

/// A filled quad command.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugQuad {
    /// Position (min corner).
    pub position: Vec2,
    /// Size of the quad.
    pub size: Vec2,
    /// Fill color.
    pub color: Color,
}

/// A line command.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugLine {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

/// Command types for the debug overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DebugCommand {
    Quad(DebugQuad),
    Line(DebugLine),
}

/// Accumulates debug overlay commands.
#[derive(Debug, Default)]
pub struct DebugDrawList {
    commands: Vec<DebugCommand>,
}

impl DebugDrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn commands(&self) -> &[DebugCommand] {
        &self.commands
    }

    /// Take ownership of all commands and clear the list.
    pub fn take_commands(&mut self) -> Vec<DebugCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn add_quad(&mut self, rect: Rect, color: Color) {
        self.commands.push(DebugCommand::Quad(DebugQuad {
            position: rect.min,
            size: rect.size(),
            color,
        }));
    }

    pub fn add_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.commands
            .push(DebugCommand::Line(DebugLine { start, end, color }));
    }

    /// Fill plus a closed four-line outline.
    pub fn add_outlined_rect(&mut self, rect: Rect, fill: Color, outline: Color) {
        self.add_quad(rect, fill);
        let corners = rect.corners();
        for i in 0..corners.len() {
            self.add_line(corners[i], corners[(i + 1) % corners.len()], outline);
        }
    }
}

/// Append an outlined rect for every present tracked rect. Returns how many
/// rects were drawn.
pub fn draw_tracked_rects(
    snapshot: &[TrackedRect],
    sources: &impl RectSources,
    list: &mut DebugDrawList,
) -> usize {
    let mut drawn = 0;
    for world in snapshot.iter().filter_map(|t| t.world_rect(sources)) {
        list.add_outlined_rect(world, DEBUG_FILL, DEBUG_OUTLINE);
        drawn += 1;
    }
    drawn
}
