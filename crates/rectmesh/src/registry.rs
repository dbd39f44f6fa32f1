//! Ordered list of tracked rectangle sources.

use rectmesh_core::Rect;
use rectmesh_core::alloc::HashSet;
use rectmesh_core::profiling::profile_function;

use crate::source::{RectSourceHandle, RectSources, SharedListener};
use crate::transform::RectTransform;

/// One entry of the tracked list.
///
/// `source` is `None` for placeholders that were absent when the list was
/// configured. A present handle can still turn absent later if the host
/// destroys the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedRect {
    source: Option<RectSourceHandle>,
    last_local: Option<Rect>,
}

impl TrackedRect {
    pub fn new(source: Option<RectSourceHandle>) -> Self {
        Self {
            source,
            last_local: None,
        }
    }

    pub fn source(&self) -> Option<RectSourceHandle> {
        self.source
    }

    /// Local rectangle as of the last refresh, `None` if the source was absent.
    pub fn last_local(&self) -> Option<Rect> {
        self.last_local
    }

    /// Current world rectangle, `None` if the source is absent.
    pub fn world_rect(&self, sources: &impl RectSources) -> Option<Rect> {
        self.source.and_then(|handle| sources.world_rect(handle))
    }
}

/// Tracked rectangle sources, in paint and bridging order.
///
/// The configured list may hold duplicates and absent entries; both are kept
/// so indices line up with what the host configured.
#[derive(Debug, Default)]
pub struct RectRegistry {
    configured: Vec<Option<RectSourceHandle>>,
    tracked: Vec<TrackedRect>,
    seen: HashSet<RectSourceHandle>,
}

impl RectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list and re-subscribe.
    pub fn set_rects<I, H>(
        &mut self,
        handles: I,
        sources: &mut impl RectSources,
        listener: &SharedListener,
    ) where
        I: IntoIterator<Item = H>,
        H: Into<Option<RectSourceHandle>>,
    {
        self.configured.clear();
        self.configured.extend(handles.into_iter().map(Into::into));
        tracing::debug!("Rect list replaced with {} entries", self.configured.len());
        self.update_rects(sources, listener);
    }

    /// Rebuild the snapshot from the configured list.
    ///
    /// The previous snapshot is unsubscribed first so repeated calls never
    /// stack listeners on the same source.
    pub fn update_rects(&mut self, sources: &mut impl RectSources, listener: &SharedListener) {
        profile_function!();
        self.unregister(sources, listener);

        self.tracked.clear();
        self.seen.clear();
        for &handle in &self.configured {
            self.tracked.push(TrackedRect::new(handle));
            let Some(handle) = handle else {
                continue;
            };
            // duplicates share one subscription
            if !self.seen.insert(handle) {
                continue;
            }
            sources.unsubscribe(handle, listener);
            if !sources.subscribe(handle, listener) {
                tracing::trace!("Tracked rect {:?} is absent, not subscribing", handle);
            }
        }
    }

    /// Detach `listener` from every still-present source.
    ///
    /// Returns the number of subscriptions removed. Safe to call repeatedly.
    pub fn unregister(
        &mut self,
        sources: &mut impl RectSources,
        listener: &SharedListener,
    ) -> usize {
        self.tracked
            .iter()
            .filter_map(|tracked| tracked.source)
            .filter(|&handle| sources.unsubscribe(handle, listener))
            .count()
    }

    /// Update each entry's cached local rectangle.
    pub fn refresh_local_rects(
        &mut self,
        sources: &impl RectSources,
        transform: &impl RectTransform,
    ) {
        for tracked in &mut self.tracked {
            tracked.last_local = tracked
                .world_rect(sources)
                .map(|world| transform.inverse_transform_rect(world));
        }
    }

    /// Current snapshot. Absent entries are not compacted out.
    pub fn snapshot(&self) -> &[TrackedRect] {
        &self.tracked
    }

    /// The configured handles, in order.
    pub fn configured(&self) -> &[Option<RectSourceHandle>] {
        &self.configured
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}
