use std::sync::Arc;

use glam::{Vec3, Vec4};

use crate::garment::GarmentKind;
use crate::resources::Texture;

use super::fabric::{FabricProperties, FabricType};
use super::print::PrintMethod;

/// Everything that determines a garment's surface appearance.
#[derive(Debug, Clone)]
pub struct MaterialConfig {
    /// `0xRRGGBB`
    pub base_color: u32,
    pub garment_type: String,
    pub fabric: FabricType,
    pub print_method: PrintMethod,
    pub design_texture: Option<Arc<Texture>>,
    pub environment_lighting: bool,
    pub high_quality: bool,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            base_color: 0xFF_FF_FF,
            garment_type: GarmentKind::TShirt.as_str().to_string(),
            fabric: FabricType::Cotton,
            print_method: PrintMethod::ScreenPrint,
            design_texture: None,
            environment_lighting: true,
            high_quality: true,
        }
    }
}

impl MaterialConfig {
    #[must_use]
    pub fn new(base_color: u32, garment_type: &str, fabric: FabricType, print_method: PrintMethod) -> Self {
        Self {
            base_color,
            garment_type: garment_type.to_string(),
            fabric,
            print_method,
            ..Self::default()
        }
    }

    /// Builds a config from free-form identifiers, resolving unknown fabric or
    /// print-method names to their defaults.
    #[must_use]
    pub fn from_strs(base_color: u32, garment_type: &str, fabric: &str, print_method: &str) -> Self {
        Self::new(
            base_color,
            garment_type,
            FabricType::parse(fabric),
            PrintMethod::parse(print_method),
        )
    }

    #[must_use]
    pub fn with_design(mut self, texture: Arc<Texture>) -> Self {
        self.design_texture = Some(texture);
        self
    }

    #[must_use]
    pub fn with_environment_lighting(mut self, enabled: bool) -> Self {
        self.environment_lighting = enabled;
        self
    }

    #[must_use]
    pub fn with_high_quality(mut self, enabled: bool) -> Self {
        self.high_quality = enabled;
        self
    }

    /// Composite key covering every input that changes the material.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let texture = self
            .design_texture
            .as_ref()
            .map_or_else(|| "none".to_string(), |t| t.id.to_string());

        format!(
            "material:{:06x}:{}:{}:{}:{}:{}:{}",
            self.base_color & 0xFF_FF_FF,
            GarmentKind::parse(&self.garment_type).as_str(),
            self.fabric.as_str(),
            self.print_method.as_str(),
            texture,
            if self.environment_lighting { "env" } else { "flat" },
            if self.high_quality { "hq" } else { "lq" },
        )
    }
}

/// Unpacks `0xRRGGBB` into normalized sRGB components.
#[must_use]
pub fn color_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Physically-based parameter block for one garment surface.
///
/// Immutable once built; the render host maps it onto its own material type.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentMaterial {
    pub label: String,
    pub fabric: FabricType,
    pub print_method: PrintMethod,

    pub color: Vec4,
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub transmission: f32,
    pub sheen: f32,
    pub sheen_roughness: f32,
    pub sheen_color: Vec3,
    pub transparent: bool,
    pub env_map_intensity: f32,

    pub map: Option<Arc<Texture>>,
}

impl GarmentMaterial {
    /// Combines fabric properties, print-method adjustments, lighting and
    /// quality mode. `map` is the already-optimized design texture.
    #[must_use]
    pub fn build(config: &MaterialConfig, map: Option<Arc<Texture>>) -> Self {
        let FabricProperties {
            mut roughness,
            metalness,
            mut clearcoat,
            mut clearcoat_roughness,
            mut transmission,
            mut sheen,
            sheen_roughness,
            sheen_color,
            transparent,
        } = config.fabric.properties();

        // Ink sits on top of the fabric, so only printed garments change.
        if map.is_some() {
            match config.print_method {
                PrintMethod::ScreenPrint => roughness = (roughness + 0.1).min(1.0),
                PrintMethod::Dtg => {}
                PrintMethod::Vinyl => {
                    roughness = roughness.min(0.35);
                    clearcoat = clearcoat.max(0.5);
                    clearcoat_roughness = 0.3;
                }
                PrintMethod::Embroidery => {
                    roughness = roughness.max(0.9);
                    sheen = (sheen + 0.2).min(1.0);
                }
            }
        }

        if !config.high_quality {
            clearcoat = 0.0;
            clearcoat_roughness = 0.0;
            transmission = 0.0;
            sheen = 0.0;
        }

        let opacity = if transparent { 0.95 } else { 1.0 };

        Self {
            label: config.cache_key(),
            fabric: config.fabric,
            print_method: config.print_method,
            color: color_from_hex(config.base_color).extend(opacity),
            roughness,
            metalness,
            clearcoat,
            clearcoat_roughness,
            transmission,
            sheen,
            sheen_roughness,
            sheen_color,
            transparent,
            env_map_intensity: if config.environment_lighting { 1.0 } else { 0.0 },
            map,
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.color.w
    }
}
