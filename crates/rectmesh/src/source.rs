//! Rectangle sources and geometry-change notification.
//!
//! The graphic never owns the rectangles it traces. It holds
//! [`RectSourceHandle`]s, resolves them through a [`RectSources`]
//! implementation supplied by the host, and subscribes a listener to be told
//! when a rectangle moves or resizes.
//!
//! [`RectSourceStore`] is an in-memory host implementation backed by a
//! generational [`SparseSet`].

use std::rc::{Rc, Weak};

use rectmesh_core::Rect;
use rectmesh_core::alloc::{IndexSlot, SparseSet};
use rectmesh_core::profiling::profile_function;

/// Non-owning, generation-checked handle to a rectangle source.
///
/// Once the source is destroyed the handle stops resolving; a new source
/// that reuses the slot gets a different handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectSourceHandle(IndexSlot);

impl RectSourceHandle {
    pub fn slot(&self) -> IndexSlot {
        self.0
    }
}

/// Receives geometry-change notifications from rectangle sources.
pub trait RectChangeListener {
    /// The world rectangle of `source` changed.
    fn rect_changed(&self, source: RectSourceHandle);
}

/// Shared listener reference. Registration is keyed by the allocation
/// address, so clones of the same `Rc` count as one listener.
pub type SharedListener = Rc<dyn RectChangeListener>;

fn same_listener(a: &Weak<dyn RectChangeListener>, b: &SharedListener) -> bool {
    std::ptr::addr_eq(a.as_ptr(), Rc::as_ptr(b))
}

/// Host-side access to rectangle sources.
pub trait RectSources {
    /// Current world rectangle, or `None` if the source was destroyed.
    fn world_rect(&self, source: RectSourceHandle) -> Option<Rect>;

    /// Attach `listener` to `source`.
    ///
    /// Returns `false` when the listener was already attached or the source
    /// is gone; neither is an error.
    fn subscribe(&mut self, source: RectSourceHandle, listener: &SharedListener) -> bool;

    /// Detach `listener` from `source`.
    ///
    /// Returns `false` when the listener was not attached or the source is
    /// gone.
    fn unsubscribe(&mut self, source: RectSourceHandle, listener: &SharedListener) -> bool;

    /// Returns `true` while the source exists.
    fn is_alive(&self, source: RectSourceHandle) -> bool {
        self.world_rect(source).is_some()
    }
}

struct RectSource {
    world_rect: Rect,
    listeners: Vec<Weak<dyn RectChangeListener>>,
}

/// In-memory rectangle sources with synchronous change notification.
///
/// Listeners are held weakly: an owner that is dropped without tearing down
/// simply stops receiving notifications.
#[derive(Default)]
pub struct RectSourceStore {
    sources: SparseSet<RectSource>,
}

impl RectSourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with an initial world rectangle.
    pub fn insert(&mut self, world_rect: Rect) -> RectSourceHandle {
        RectSourceHandle(self.sources.push(RectSource {
            world_rect,
            listeners: Vec::new(),
        }))
    }

    /// Move or resize a source and notify its listeners.
    ///
    /// Returns `false` if the source no longer exists.
    pub fn set_rect(&mut self, source: RectSourceHandle, world_rect: Rect) -> bool {
        profile_function!();
        let Some(entry) = self.sources.try_get_mut(source.0) else {
            tracing::trace!("Ignoring rect update for destroyed source {:?}", source);
            return false;
        };
        entry.world_rect = world_rect;
        entry.listeners.retain(|listener| match listener.upgrade() {
            Some(listener) => {
                listener.rect_changed(source);
                true
            }
            None => false,
        });
        true
    }

    /// Destroy a source. Handles to it become absent everywhere.
    pub fn remove(&mut self, source: RectSourceHandle) -> Option<Rect> {
        self.sources.try_remove(source.0).map(|entry| entry.world_rect)
    }

    /// Number of live listeners attached to `source`.
    pub fn listener_count(&self, source: RectSourceHandle) -> usize {
        self.sources.try_get(source.0).map_or(0, |entry| {
            entry
                .listeners
                .iter()
                .filter(|listener| listener.strong_count() > 0)
                .count()
        })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl RectSources for RectSourceStore {
    fn world_rect(&self, source: RectSourceHandle) -> Option<Rect> {
        self.sources.try_get(source.0).map(|entry| entry.world_rect)
    }

    fn subscribe(&mut self, source: RectSourceHandle, listener: &SharedListener) -> bool {
        let Some(entry) = self.sources.try_get_mut(source.0) else {
            return false;
        };
        if entry.listeners.iter().any(|l| same_listener(l, listener)) {
            return false;
        }
        entry.listeners.push(Rc::downgrade(listener));
        true
    }

    fn unsubscribe(&mut self, source: RectSourceHandle, listener: &SharedListener) -> bool {
        let Some(entry) = self.sources.try_get_mut(source.0) else {
            return false;
        };
        let before = entry.listeners.len();
        entry.listeners.retain(|l| !same_listener(l, listener));
        entry.listeners.len() != before
    }
}
