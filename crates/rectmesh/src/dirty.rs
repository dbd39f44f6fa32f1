//! Lazy invalidation of the built mesh.
//!
//! Anything that can change the emitted geometry marks the signal dirty.
//! Nothing is rebuilt at that point; the host's next mesh pull rebuilds once
//! and returns the signal to clean, so several changes in one frame cost one
//! rebuild.

use std::cell::Cell;

use bitflags::bitflags;

use crate::source::{RectChangeListener, RectSourceHandle};

bitflags! {
    /// Why the mesh was invalidated since the last rebuild.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyReason: u8 {
        /// The tracked rectangle list was replaced or re-subscribed.
        const RECT_LIST     = 1 << 0;

        /// A tracked rectangle reported a geometry change.
        const RECT_GEOMETRY = 1 << 1;

        /// Fill color, bridging or another option changed.
        const CONFIG        = 1 << 2;

        /// The owner moved, resized or changed depth.
        const TRANSFORM     = 1 << 3;
    }
}

/// Clean/dirty state of the built mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyState {
    Clean,
    Dirty,
}

/// The component's single persistent change listener.
///
/// It is registered with every tracked source and compared by address when
/// unregistering.
#[derive(Debug)]
pub struct InvalidationSignal {
    reasons: Cell<DirtyReason>,
    notifications: Cell<u64>,
}

impl Default for InvalidationSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl InvalidationSignal {
    /// A fresh signal starts dirty so the first pull always builds.
    pub fn new() -> Self {
        Self {
            reasons: Cell::new(DirtyReason::RECT_LIST),
            notifications: Cell::new(0),
        }
    }

    pub fn mark(&self, reason: DirtyReason) {
        self.reasons.set(self.reasons.get() | reason);
    }

    pub fn state(&self) -> DirtyState {
        if self.reasons.get().is_empty() {
            DirtyState::Clean
        } else {
            DirtyState::Dirty
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state() == DirtyState::Dirty
    }

    /// Reasons accumulated since the last rebuild.
    pub fn reasons(&self) -> DirtyReason {
        self.reasons.get()
    }

    /// Return to clean, handing back the accumulated reasons.
    pub fn take(&self) -> DirtyReason {
        self.reasons.replace(DirtyReason::empty())
    }

    /// Number of geometry-change notifications received so far.
    pub fn notification_count(&self) -> u64 {
        self.notifications.get()
    }
}

impl RectChangeListener for InvalidationSignal {
    fn rect_changed(&self, source: RectSourceHandle) {
        tracing::trace!("Tracked rect {:?} changed, marking mesh dirty", source);
        self.notifications.set(self.notifications.get() + 1);
        self.mark(DirtyReason::RECT_GEOMETRY);
    }
}
