//! Re-exports of the SIMD-backed `glam` vector types used across rectmesh.
//!
//! ```
//! use rectmesh_core::math::{Vec2, Vec3};
//!
//! let local = Vec2::new(10.0, 20.0);
//! let world = local.extend(0.0) + Vec3::new(5.0, 5.0, 0.0);
//! assert_eq!(world.truncate(), Vec2::new(15.0, 25.0));
//! ```

pub use glam::{Vec2, Vec3, Vec4, vec2, vec3};
