//! Mapping between world space and the owner's local space.
//!
//! The host decides how the owning element is placed; the graphic only needs
//! to move rectangles in and out of the owner's local space. Only translation
//! and per-axis scale are supported, so rectangles stay axis-aligned.

use crate::error::{GraphicError, GraphicResult};
use rectmesh_core::Rect;
use rectmesh_core::math::{Vec2, Vec3};

/// Coordinate space of the element that owns the graphic.
pub trait RectTransform {
    /// The owner's own rectangle in its local space. Emitted geometry is
    /// clipped to it.
    fn local_rect(&self) -> Rect;

    /// Map a local rectangle into world space.
    fn transform_rect(&self, local: Rect) -> Rect;

    /// Map a world rectangle into local space.
    fn inverse_transform_rect(&self, world: Rect) -> Rect;

    /// Depth at which the graphic is drawn.
    fn depth(&self) -> f32;

    /// The owner's rectangle in world space.
    fn world_rect(&self) -> Rect {
        self.transform_rect(self.local_rect())
    }
}

/// Translation plus per-axis scale placement of an owner rectangle.
///
/// ```
/// use rectmesh::{OwnerTransform, RectTransform};
/// use rectmesh_core::Rect;
/// use rectmesh_core::math::{Vec2, Vec3};
///
/// let owner = OwnerTransform::new(
///     Rect::from_xywh(0.0, 0.0, 100.0, 50.0),
///     Vec3::new(10.0, 20.0, 0.0),
///     Vec2::ONE,
/// )
/// .unwrap();
/// assert_eq!(owner.world_rect(), Rect::from_xywh(10.0, 20.0, 100.0, 50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnerTransform {
    local_rect: Rect,
    translation: Vec3,
    scale: Vec2,
}

impl OwnerTransform {
    /// Create a transform. Fails when either scale axis is zero or not finite.
    pub fn new(local_rect: Rect, translation: Vec3, scale: Vec2) -> GraphicResult<Self> {
        if !scale.is_finite() || scale.x == 0.0 || scale.y == 0.0 {
            return Err(GraphicError::NonInvertibleTransform {
                scale: scale.to_array(),
            });
        }
        Ok(Self {
            local_rect,
            translation,
            scale,
        })
    }

    /// Identity placement: local space equals world space.
    pub fn identity(local_rect: Rect) -> Self {
        Self {
            local_rect,
            translation: Vec3::ZERO,
            scale: Vec2::ONE,
        }
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn with_local_rect(self, local_rect: Rect) -> Self {
        Self { local_rect, ..self }
    }

    pub fn with_translation(self, translation: Vec3) -> Self {
        Self {
            translation,
            ..self
        }
    }

    fn to_world(&self, point: Vec2) -> Vec2 {
        point * self.scale + self.translation.truncate()
    }

    fn to_local(&self, point: Vec2) -> Vec2 {
        (point - self.translation.truncate()) / self.scale
    }
}

impl RectTransform for OwnerTransform {
    fn local_rect(&self) -> Rect {
        self.local_rect
    }

    fn transform_rect(&self, local: Rect) -> Rect {
        // negative scale swaps corners, from_corners re-normalises
        Rect::from_corners(self.to_world(local.min), self.to_world(local.max))
    }

    fn inverse_transform_rect(&self, world: Rect) -> Rect {
        Rect::from_corners(self.to_local(world.min), self.to_local(world.max))
    }

    fn depth(&self) -> f32 {
        self.translation.z
    }
}
