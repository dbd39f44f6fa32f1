//! The rectangles-to-graphic component.

use std::rc::Rc;

use rectmesh_core::Color;
use rectmesh_core::math::Vec2;
use rectmesh_core::profiling::profile_function;

use crate::builder::{BuildOptions, BuildStats, MeshBuilder};
use crate::config::RectsGraphicConfig;
use crate::debug::{DebugDrawList, draw_tracked_rects};
use crate::dirty::{DirtyReason, InvalidationSignal};
use crate::hit_test::HitTester;
use crate::registry::{RectRegistry, TrackedRect};
use crate::source::{RectSourceHandle, RectSources, SharedListener};
use crate::transform::{OwnerTransform, RectTransform};
use crate::vertex::MeshData;

/// One batched graphic tracing an ordered chain of rectangles.
///
/// The host drives it:
/// - [`initialize`](Self::initialize) when the owner becomes active,
/// - [`teardown`](Self::teardown) when it goes away,
/// - [`populate_mesh`](Self::populate_mesh) whenever it wants geometry.
///
/// Changes to tracked rectangles only mark the mesh dirty; the rebuild
/// happens on the next pull.
///
/// ```
/// use rectmesh::{OwnerTransform, RectSourceStore, RectsGraphic, RectsGraphicConfig};
/// use rectmesh_core::Rect;
///
/// let mut store = RectSourceStore::new();
/// let a = store.insert(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
/// let b = store.insert(Rect::from_xywh(20.0, 0.0, 10.0, 10.0));
///
/// let owner = OwnerTransform::identity(Rect::from_xywh(0.0, 0.0, 30.0, 10.0));
/// let mut graphic = RectsGraphic::new(RectsGraphicConfig::default(), owner);
/// graphic.set_rects([a, b], &mut store);
///
/// let mesh = graphic.populate_mesh(&store);
/// assert_eq!(mesh.primitives().len(), 3);
/// ```
pub struct RectsGraphic<T: RectTransform = OwnerTransform> {
    config: RectsGraphicConfig,
    transform: T,
    registry: RectRegistry,
    signal: Rc<InvalidationSignal>,
    listener: SharedListener,
    builder: MeshBuilder,
    mesh: MeshData,
    last_build: BuildStats,
    rebuilds: u64,
    active: bool,
}

impl<T: RectTransform> RectsGraphic<T> {
    pub fn new(config: RectsGraphicConfig, transform: T) -> Self {
        let signal = Rc::new(InvalidationSignal::new());
        let listener: SharedListener = signal.clone();
        Self {
            config,
            transform,
            registry: RectRegistry::new(),
            signal,
            listener,
            builder: MeshBuilder::new(),
            mesh: MeshData::new(),
            last_build: BuildStats::default(),
            rebuilds: 0,
            active: false,
        }
    }

    /// Subscribe to the configured rects and schedule a rebuild.
    pub fn initialize(&mut self, sources: &mut impl RectSources) {
        self.registry.update_rects(sources, &self.listener);
        self.signal.mark(DirtyReason::RECT_LIST);
        self.active = true;
        tracing::debug!("Rects graphic initialized with {} rects", self.registry.len());
    }

    /// Unsubscribe from every still-present rect. Safe to call repeatedly.
    pub fn teardown(&mut self, sources: &mut impl RectSources) {
        let removed = self.registry.unregister(sources, &self.listener);
        if self.active {
            tracing::debug!("Rects graphic torn down ({} subscriptions removed)", removed);
        }
        self.active = false;
    }

    /// Apply a new configuration, re-subscribe and schedule a rebuild.
    ///
    /// `CONFIG` is only added to the dirty reasons when the new options
    /// change the emitted geometry.
    pub fn on_configuration_changed(
        &mut self,
        config: RectsGraphicConfig,
        sources: &mut impl RectSources,
    ) {
        let mut reasons = DirtyReason::RECT_LIST;
        if self.config.affects_geometry(&config) {
            reasons |= DirtyReason::CONFIG;
        }
        self.config = config;
        self.registry.update_rects(sources, &self.listener);
        self.signal.mark(reasons);
    }

    /// Replace the tracked rects. `None` entries are kept as absent
    /// placeholders.
    pub fn set_rects<I, H>(&mut self, handles: I, sources: &mut impl RectSources)
    where
        I: IntoIterator<Item = H>,
        H: Into<Option<RectSourceHandle>>,
    {
        self.registry.set_rects(handles, sources, &self.listener);
        self.signal.mark(DirtyReason::RECT_LIST);
    }

    pub fn set_transform(&mut self, transform: T) {
        self.transform = transform;
        self.signal.mark(DirtyReason::TRANSFORM);
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.config.fill_color != color {
            self.config.fill_color = color;
            self.signal.mark(DirtyReason::CONFIG);
        }
    }

    pub fn set_connect_ends(&mut self, connect_ends: bool) {
        if self.config.connect_ends != connect_ends {
            self.config.connect_ends = connect_ends;
            self.signal.mark(DirtyReason::CONFIG);
        }
    }

    pub fn set_pass_through_rects(&mut self, pass_through: bool) {
        self.config.pass_through_rects = pass_through;
    }

    pub fn set_raycast_target(&mut self, raycast_target: bool) {
        self.config.raycast_target = raycast_target;
    }

    /// Current mesh, rebuilt first if anything changed since the last pull.
    pub fn populate_mesh(&mut self, sources: &impl RectSources) -> &MeshData {
        profile_function!();
        if self.signal.is_dirty() {
            let reasons = self.signal.take();
            tracing::trace!("Rebuilding rect mesh ({:?})", reasons);

            self.registry.refresh_local_rects(sources, &self.transform);
            let options = BuildOptions {
                connect_ends: self.config.connect_ends,
                fill_color: self.config.fill_color,
                depth: self.transform.depth(),
                debug_verts: self.config.debug_verts,
            };
            let rects = self.registry.snapshot().iter().map(TrackedRect::last_local);
            self.last_build = self.builder.build(
                rects,
                self.transform.local_rect(),
                &options,
                &mut self.mesh,
            );
            self.rebuilds += 1;
        }
        &self.mesh
    }

    /// Last built mesh, without rebuilding.
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Returns `true` if `point` (world space) hits the graphic.
    pub fn contains(&self, point: Vec2, sources: &impl RectSources) -> bool {
        let tester = HitTester {
            raycast_target: self.config.raycast_target,
            pass_through: self.config.pass_through_rects,
        };
        tester.contains(
            point,
            self.transform.world_rect(),
            self.registry.snapshot(),
            sources,
        )
    }

    /// Outline every present tracked rect into `list`.
    pub fn draw_debug_overlay(
        &self,
        sources: &impl RectSources,
        list: &mut DebugDrawList,
    ) -> usize {
        draw_tracked_rects(self.registry.snapshot(), sources, list)
    }

    pub fn is_dirty(&self) -> bool {
        self.signal.is_dirty()
    }

    pub fn invalidation(&self) -> &InvalidationSignal {
        &self.signal
    }

    pub fn snapshot(&self) -> &[TrackedRect] {
        self.registry.snapshot()
    }

    pub fn config(&self) -> &RectsGraphicConfig {
        &self.config
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Stats of the most recent rebuild.
    pub fn last_build(&self) -> BuildStats {
        self.last_build
    }

    /// Number of rebuilds performed so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
