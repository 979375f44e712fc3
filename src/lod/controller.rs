use std::sync::Arc;
use std::time::Duration;

use glam::Vec3;

use crate::resources::MeshBuffer;
use crate::settings::PerformanceSettings;

use super::selector::{DetailSelector, DistanceSelector, PerformanceMonitor};
use super::tier::{LodGeometryBundle, LodTier};

/// Introspection snapshot of one rendered garment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodStats {
    pub tier: LodTier,
    pub frame_rate: Option<f32>,
    pub triangle_count: usize,
}

/// Per-instance LOD state: which tier a rendered garment shows this frame.
///
/// Purely observational; missing camera or geometry data yields `High`
/// with zero triangles rather than an error.
pub struct LodController<S: DetailSelector = DistanceSelector> {
    bundle: Option<Arc<LodGeometryBundle>>,
    anchor: Vec3,
    selector: S,
    monitor: PerformanceMonitor,
    current: LodTier,
}

impl LodController<DistanceSelector> {
    /// Controller using the bundle's own switch distances.
    #[must_use]
    pub fn new(bundle: Arc<LodGeometryBundle>, anchor: Vec3, performance: &PerformanceSettings) -> Self {
        let selector = DistanceSelector::new(bundle.distances, performance);
        Self::with_selector(Some(bundle), anchor, selector, PerformanceMonitor::new(performance))
    }

    /// Swaps in a regenerated bundle and adopts its distances.
    pub fn set_bundle(&mut self, bundle: Arc<LodGeometryBundle>) {
        self.selector.distances = bundle.distances;
        self.bundle = Some(bundle);
    }
}

impl<S: DetailSelector> LodController<S> {
    #[must_use]
    pub fn with_selector(
        bundle: Option<Arc<LodGeometryBundle>>,
        anchor: Vec3,
        selector: S,
        monitor: PerformanceMonitor,
    ) -> Self {
        Self {
            bundle,
            anchor,
            selector,
            monitor,
            current: LodTier::High,
        }
    }

    /// Evaluates the tier for this frame.
    pub fn update(&mut self, camera_position: Option<Vec3>, frame_delta: Duration) -> LodTier {
        let frame_rate = self.monitor.record_frame(frame_delta);
        let distance = camera_position.map(|p| p.distance(self.anchor));
        let tier = if self.bundle.is_some() {
            self.selector.select(distance, frame_rate)
        } else {
            LodTier::High
        };

        if tier != self.current {
            log::trace!(
                "LOD tier {} -> {} (distance {:?}, fps {:?})",
                self.current.as_str(),
                tier.as_str(),
                distance,
                frame_rate
            );
            self.current = tier;
        }
        tier
    }

    #[must_use]
    pub fn current_tier(&self) -> LodTier {
        self.current
    }

    /// Mesh to draw this frame.
    #[must_use]
    pub fn current_mesh(&self) -> Option<&Arc<MeshBuffer>> {
        self.bundle.as_ref().map(|b| b.tier(self.current))
    }

    #[must_use]
    pub fn bundle(&self) -> Option<&Arc<LodGeometryBundle>> {
        self.bundle.as_ref()
    }

    #[must_use]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    #[must_use]
    pub fn stats(&self) -> LodStats {
        LodStats {
            tier: self.current,
            frame_rate: self.monitor.frame_rate(),
            triangle_count: self.current_mesh().map_or(0, |m| m.triangle_count()),
        }
    }
}
