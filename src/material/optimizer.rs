use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::cache::ResourceCache;
use crate::garment::GarmentKind;
use crate::resources::Texture;
use crate::utils::BackgroundScheduler;
use crate::viewport::{DeviceClass, ViewportManager};

use super::fabric::{FabricProperties, FabricType};
use super::surface::{GarmentMaterial, MaterialConfig};
use super::print::PrintMethod;

/// Colors pre-warmed by [`MaterialOptimizer::preload_common_materials`]:
/// white, black, navy, heather grey.
pub const COMMON_COLORS: [u32; 4] = [0xFF_FF_FF, 0x00_00_00, 0x1E_3A_8A, 0x9C_A3_AF];
pub const COMMON_GARMENTS: [GarmentKind; 2] = [GarmentKind::TShirt, GarmentKind::Hoodie];
pub const COMMON_FABRICS: [FabricType; 1] = [FabricType::Cotton];
pub const COMMON_PRINT_METHODS: [PrintMethod; 2] = [PrintMethod::ScreenPrint, PrintMethod::Dtg];

/// Share of the original repeat kept on mobile viewports.
const MOBILE_REPEAT_FACTOR: f32 = 0.8;

/// Builds and caches garment materials and print-tuned design textures.
pub struct MaterialOptimizer {
    cache: Arc<ResourceCache>,
    viewport: Arc<ViewportManager>,
    textures: Mutex<FxHashMap<(Uuid, PrintMethod), Arc<Texture>>>,
}

impl MaterialOptimizer {
    #[must_use]
    pub fn new(cache: Arc<ResourceCache>, viewport: Arc<ViewportManager>) -> Self {
        Self {
            cache,
            viewport,
            textures: Mutex::new(FxHashMap::default()),
        }
    }

    /// Cached material for `config`.
    pub fn get_material(&self, config: &MaterialConfig) -> Arc<GarmentMaterial> {
        let key = config.cache_key();
        self.cache.get_or_create_material(&key, || {
            let map = config
                .design_texture
                .as_ref()
                .map(|texture| self.optimize_texture(texture, config.print_method));
            log::debug!("Material: building '{key}'");
            GarmentMaterial::build(config, map)
        })
    }

    #[must_use]
    pub fn get_fabric_properties(&self, fabric: &str) -> FabricProperties {
        FabricType::parse(fabric).properties()
    }

    /// Sampler and transform tuned for `print_method` and the current
    /// device, cached by texture id and print method.
    pub fn optimize_texture(&self, texture: &Texture, print_method: PrintMethod) -> Arc<Texture> {
        let mut textures = self.textures.lock();
        textures
            .entry((texture.id, print_method))
            .or_insert_with(|| {
                let mut optimized = texture.clone();
                optimized.sampler = print_method.sampler();

                if self.viewport.device_class() == DeviceClass::Mobile {
                    optimized.transform.repeat *= MOBILE_REPEAT_FACTOR;
                    optimized.generate_mipmaps = false;
                }

                optimized.needs_update();
                Arc::new(optimized)
            })
            .clone()
    }

    /// Queues the common color/garment/fabric/print combinations on
    /// `scheduler` and returns how many were queued.
    pub fn preload_common_materials(self: &Arc<Self>, scheduler: &dyn BackgroundScheduler) -> usize {
        let mut queued = 0;
        for color in COMMON_COLORS {
            for garment in COMMON_GARMENTS {
                for fabric in COMMON_FABRICS {
                    for print_method in COMMON_PRINT_METHODS {
                        let optimizer = Arc::clone(self);
                        let config = MaterialConfig::new(color, garment.as_str(), fabric, print_method);
                        scheduler.schedule(Box::new(move || {
                            optimizer.get_material(&config);
                        }));
                        queued += 1;
                    }
                }
            }
        }
        log::debug!("Material: queued {queued} preloads on {}", scheduler.name());
        queued
    }

    pub fn clear_texture_cache(&self) {
        self.textures.lock().clear();
    }

    #[must_use]
    pub fn texture_cache_len(&self) -> usize {
        self.textures.lock().len()
    }
}
