//! Preview Engine
//!
//! [`PreviewEngine`] is one preview session: it owns the viewport state and
//! every cache, and wires the LOD generator and material optimizer to them.
//! Nothing is global, so independent sessions (or tests) never share state.
//!
//! # Example
//!
//! ```rust,ignore
//! use drape::{PreviewEngine, PreviewSettings, ViewportSize};
//! use drape::resources::primitives::create_garment_panel;
//!
//! let engine = PreviewEngine::new(PreviewSettings::default(), ViewportSize::new(1280, 720));
//! let standard = drape::garment::standard_for("hoodie");
//! let bundle = engine.lod_bundle("hoodie", "front", || create_garment_panel(&standard, 64));
//! let mut controller = engine.controller("hoodie", bundle);
//!
//! // Per frame
//! let framing = engine.camera_framing("hoodie");
//! let tier = controller.update(Some(framing.position), frame_delta);
//! ```

use std::sync::Arc;

use crate::cache::{CacheStats, ResourceCache};
use crate::garment::normalize_key;
use crate::lod::{DistanceSelector, LodController, LodGenerator, LodGeometryBundle, PerformanceMonitor};
use crate::material::{GarmentMaterial, MaterialConfig, MaterialOptimizer};
use crate::resources::MeshBuffer;
use crate::settings::PreviewSettings;
use crate::utils::{BackgroundScheduler, Clock, SystemClock};
use crate::viewport::{BoundingBoxManager, CameraFraming, DeviceClass, ViewportManager, ViewportSize};

/// A preview session.
///
/// # Lifecycle
///
/// 1. Create with [`PreviewEngine::new`] at scene start
/// 2. Call [`resize`](Self::resize) whenever the host viewport changes
/// 3. Request bundles and materials as garments are shown; drive one
///    [`LodController`] per rendered garment every frame
/// 4. Call [`dispose`](Self::dispose) at teardown
pub struct PreviewEngine {
    settings: PreviewSettings,
    viewport: Arc<ViewportManager>,
    cache: Arc<ResourceCache>,
    lod: LodGenerator,
    materials: Arc<MaterialOptimizer>,
    guides: BoundingBoxManager,
}

impl PreviewEngine {
    #[must_use]
    pub fn new(settings: PreviewSettings, viewport_size: ViewportSize) -> Self {
        Self::with_clock(settings, viewport_size, Arc::new(SystemClock::new()))
    }

    /// Session with an injected clock (cache idle expiry).
    #[must_use]
    pub fn with_clock(settings: PreviewSettings, viewport_size: ViewportSize, clock: Arc<dyn Clock>) -> Self {
        let viewport = Arc::new(ViewportManager::new(viewport_size, settings.lod.clone()));
        let cache = Arc::new(ResourceCache::with_clock(settings.cache.clone(), clock));
        let lod = LodGenerator::new(viewport.clone());
        let materials = Arc::new(MaterialOptimizer::new(cache.clone(), viewport.clone()));

        log::info!(
            "Preview session started ({}x{}, {})",
            viewport_size.width,
            viewport_size.height,
            viewport.device_class().as_str()
        );

        Self {
            settings,
            viewport,
            cache,
            lod,
            materials,
            guides: BoundingBoxManager::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> &Arc<ViewportManager> {
        &self.viewport
    }

    #[inline]
    #[must_use]
    pub fn cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    #[inline]
    #[must_use]
    pub fn materials(&self) -> &Arc<MaterialOptimizer> {
        &self.materials
    }

    #[inline]
    #[must_use]
    pub fn guides(&self) -> &BoundingBoxManager {
        &self.guides
    }

    #[inline]
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.viewport.device_class()
    }

    /// Cached LOD bundle for `(garment_type, variant)`.
    ///
    /// On a miss the base generator runs once and the tiers are built with
    /// the distances of the current device.
    pub fn lod_bundle<F>(&self, garment_type: &str, variant: &str, base_generator: F) -> Arc<LodGeometryBundle>
    where
        F: FnOnce() -> MeshBuffer,
    {
        let key = format!("lod:{}:{}", normalize_key(garment_type), variant);
        self.cache
            .get_or_create_lod_bundle(&key, || self.lod.generate(garment_type, base_generator))
    }

    /// Cached single geometry (guide meshes, decals and other non-LOD data).
    pub fn geometry<F>(&self, key: &str, generator: F) -> Arc<MeshBuffer>
    where
        F: FnOnce() -> MeshBuffer,
    {
        self.cache.get_or_create_geometry(&format!("geometry:{key}"), generator)
    }

    pub fn material(&self, config: &MaterialConfig) -> Arc<GarmentMaterial> {
        self.materials.get_material(config)
    }

    /// Queues the common material combinations; see
    /// [`MaterialOptimizer::preload_common_materials`].
    pub fn preload_materials(&self, scheduler: &dyn BackgroundScheduler) -> usize {
        self.materials.preload_common_materials(scheduler)
    }

    #[must_use]
    pub fn camera_framing(&self, garment_type: &str) -> CameraFraming {
        self.viewport.current_camera_framing(garment_type)
    }

    /// Per-instance controller anchored at the garment's anchor point.
    ///
    /// Switch distances follow the current device rather than the device the
    /// bundle was generated on.
    #[must_use]
    pub fn controller(&self, garment_type: &str, bundle: Arc<LodGeometryBundle>) -> LodController {
        let bounds = self.viewport.bounds(garment_type);
        let anchor = self.viewport.anchor_position(garment_type, &bounds);
        let selector = DistanceSelector::new(self.viewport.lod_distances(garment_type), &self.settings.performance);

        LodController::with_selector(
            Some(bundle),
            anchor,
            selector,
            PerformanceMonitor::new(&self.settings.performance),
        )
    }

    /// Host viewport changed size.
    pub fn resize(&self, width: u32, height: u32) {
        self.viewport.set_viewport_size(width, height);
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drops every cached geometry, bundle, material and texture.
    ///
    /// References already handed out stay valid.
    pub fn dispose(&self) {
        self.cache.clear();
        self.materials.clear_texture_cache();
        log::info!("Preview session disposed");
    }
}

impl Default for PreviewEngine {
    fn default() -> Self {
        Self::new(PreviewSettings::default(), ViewportSize::default())
    }
}
