//! Axis-aligned rectangles.

use crate::math::Vec2;

/// An axis-aligned rectangle stored as min/max corners.
///
/// `min` is the corner with the smallest coordinates on both axes. Rectangles
/// built through the constructors are normalised so `min <= max`.
///
/// ```
/// use rectmesh_core::Rect;
/// use rectmesh_core::math::Vec2;
///
/// let r = Rect::from_xywh(0.0, 0.0, 10.0, 5.0);
/// assert!(r.contains(Vec2::new(10.0, 5.0)));
/// assert_eq!(r.width(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Create a rect from two arbitrary corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a rect from min/max points; the points are normalised.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::from_corners(min, max)
    }

    /// Create a rect from position and size.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_corners(Vec2::new(x, y), Vec2::new(x + width, y + height))
    }

    pub fn x_min(&self) -> f32 {
        self.min.x
    }

    pub fn x_max(&self) -> f32 {
        self.max.x
    }

    pub fn y_min(&self) -> f32 {
        self.min.y
    }

    pub fn y_max(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Check if the rect has positive area.
    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check if a point is inside this rect. Edges count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Compute the overlapping region.
    ///
    /// If the rects don't overlap the result has no area; check with
    /// [`Rect::has_area`].
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Corners in winding order: bottom-left, top-left, top-right, bottom-right
    /// (y growing upwards).
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }
}
