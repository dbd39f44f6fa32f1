//! Rectmesh Core
//!
//! Foundation types shared by the rectmesh crates: generational storage,
//! axis-aligned rectangles, colors, logging and profiling setup.

pub mod alloc;
pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
pub use geometry::Rect;
