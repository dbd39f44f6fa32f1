//! Rectmesh - one batched graphic traced from an ordered chain of UI rects
//!
//! This crate provides:
//! - A registry of tracked rectangle sources with change subscriptions
//! - A mesh builder that fills each rect and bridges consecutive ones
//! - Clipping of every primitive to the owner's rectangle
//! - Hit testing where tracked rects can act as holes
//! - Lazy invalidation: changes mark the mesh dirty, the next pull rebuilds
//!
//! # Example
//!
//! ```
//! use rectmesh::{OwnerTransform, RectSourceStore, RectsGraphic, RectsGraphicConfig};
//! use rectmesh_core::Rect;
//! use rectmesh_core::math::Vec2;
//!
//! let mut store = RectSourceStore::new();
//! let button = store.insert(Rect::from_xywh(10.0, 10.0, 20.0, 10.0));
//! let label = store.insert(Rect::from_xywh(50.0, 10.0, 20.0, 10.0));
//!
//! let owner = OwnerTransform::identity(Rect::from_xywh(0.0, 0.0, 100.0, 40.0));
//! let mut graphic = RectsGraphic::new(RectsGraphicConfig::default(), owner);
//! graphic.set_rects([button, label], &mut store);
//! graphic.initialize(&mut store);
//!
//! // Moving a tracked rect only marks the mesh dirty.
//! store.set_rect(label, Rect::from_xywh(60.0, 10.0, 20.0, 10.0));
//! assert!(graphic.is_dirty());
//!
//! // The next pull rebuilds.
//! let mesh = graphic.populate_mesh(&store);
//! assert_eq!(mesh.triangle_count(), 6);
//!
//! // Tracked rects are holes for hit testing.
//! assert!(!graphic.contains(Vec2::new(15.0, 15.0), &store));
//! assert!(graphic.contains(Vec2::new(5.0, 5.0), &store));
//!
//! graphic.teardown(&mut store);
//! ```

mod builder;
mod clip;
mod config;
pub mod debug;
mod dirty;
mod error;
mod graphic;
mod registry;
mod source;
mod transform;
mod vertex;

pub use builder::{BuildOptions, BuildStats, MeshBuilder};
pub use clip::QUAD_INDICES;
pub use config::RectsGraphicConfig;
pub use debug::{DebugCommand, DebugDrawList};
pub use dirty::{DirtyReason, DirtyState, InvalidationSignal};
pub use error::{GraphicError, GraphicResult};
pub use graphic::RectsGraphic;
pub use hit_test::HitTester;
pub use registry::{RectRegistry, TrackedRect};
pub use source::{
    RectChangeListener, RectSourceHandle, RectSourceStore, RectSources, SharedListener,
};
pub use transform::{OwnerTransform, RectTransform};
pub use vertex::{MeshData, PrimitiveKind, PrimitiveSpan, UiVertex};
