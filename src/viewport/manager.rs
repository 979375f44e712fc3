use glam::Vec3;
use parking_lot::RwLock;

use crate::garment::{Anchor, GarmentStandard, standard_for};
use crate::lod::LodDistances;
use crate::settings::LodSettings;

use super::camera::CameraFraming;
use super::device::{DeviceClass, classify_device};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Garment extents in world units (`standard.bounds * standard.scale`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmentBounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl GarmentBounds {
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        Self {
            width: v.x,
            height: v.y,
            depth: v.z,
        }
    }

    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Larger of width and height.
    #[must_use]
    pub fn max_extent(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// Base scale and its per-device variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveScale {
    pub base: f32,
    pub mobile: f32,
    pub tablet: f32,
    pub desktop: f32,
}

impl ResponsiveScale {
    #[must_use]
    pub fn new(base: f32) -> Self {
        Self {
            base,
            mobile: base * DeviceClass::Mobile.scale_factor(),
            tablet: base * DeviceClass::Tablet.scale_factor(),
            desktop: base * DeviceClass::Desktop.scale_factor(),
        }
    }

    #[must_use]
    pub fn for_device(&self, device: DeviceClass) -> f32 {
        match device {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Tablet => self.tablet,
            DeviceClass::Desktop => self.desktop,
        }
    }
}

/// Device- and garment-aware viewport computations.
///
/// Holds the live viewport size; every query reads it at call time, so a
/// resize takes effect on the next call without any cached device class.
/// All functions are total and fall back to the default garment standard.
pub struct ViewportManager {
    size: RwLock<ViewportSize>,
    lod: LodSettings,
}

impl Default for ViewportManager {
    fn default() -> Self {
        Self::new(ViewportSize::default(), LodSettings::default())
    }
}

impl ViewportManager {
    #[must_use]
    pub fn new(size: ViewportSize, lod: LodSettings) -> Self {
        Self {
            size: RwLock::new(size),
            lod,
        }
    }

    pub fn set_viewport_size(&self, width: u32, height: u32) {
        let mut size = self.size.write();
        let previous = classify_device(size.width);
        *size = ViewportSize::new(width, height);

        let current = classify_device(width);
        if previous != current {
            log::debug!(
                "Viewport {}x{}: device class {} -> {}",
                width,
                height,
                previous.as_str(),
                current.as_str()
            );
        }
    }

    #[must_use]
    pub fn viewport_size(&self) -> ViewportSize {
        *self.size.read()
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport_size().aspect_ratio()
    }

    /// Device class of the live viewport.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        classify_device(self.viewport_size().width)
    }

    #[must_use]
    pub fn lod_settings(&self) -> &LodSettings {
        &self.lod
    }

    #[must_use]
    pub fn standard(&self, garment_type: &str) -> GarmentStandard {
        standard_for(garment_type)
    }

    #[must_use]
    pub fn bounds(&self, garment_type: &str) -> GarmentBounds {
        GarmentBounds::from_vec3(self.standard(garment_type).scaled_bounds())
    }

    #[must_use]
    pub fn anchor_position(&self, garment_type: &str, bounds: &GarmentBounds) -> Vec3 {
        anchor_offset(self.standard(garment_type).anchor, bounds)
    }

    #[must_use]
    pub fn responsive_scale(&self, garment_type: &str) -> ResponsiveScale {
        ResponsiveScale::new(self.standard(garment_type).scale)
    }

    /// Scale for the device class of the live viewport.
    #[must_use]
    pub fn current_scale(&self, garment_type: &str) -> f32 {
        self.responsive_scale(garment_type).for_device(self.device_class())
    }

    /// Framing for the live viewport.
    #[must_use]
    pub fn current_camera_framing(&self, garment_type: &str) -> CameraFraming {
        self.camera_framing(garment_type, self.viewport_size())
    }

    #[must_use]
    pub fn camera_framing(&self, garment_type: &str, viewport: ViewportSize) -> CameraFraming {
        let device = classify_device(viewport.width);
        let profile = device.camera_profile();

        let bounds = self.bounds(garment_type);
        let anchor = self.anchor_position(garment_type, &bounds);
        let distance = bounds.max_extent() * 0.8 * device.camera_distance_multiplier();

        CameraFraming {
            position: Vec3::new(0.0, anchor.y * 0.2, distance),
            target: anchor,
            fov: profile.fov,
            near: profile.near,
            far: profile.far,
            min_distance: distance * profile.min_zoom,
            max_distance: distance * profile.max_zoom,
            device,
        }
    }

    /// LOD switch distances for the live viewport.
    ///
    /// The base distances are divided by the garment's standard scale so a
    /// physically small garment (scaled up) switches tiers at the same
    /// apparent size as a large one, then stretched on mobile where pixel
    /// density hides detail loss.
    #[must_use]
    pub fn lod_distances(&self, garment_type: &str) -> LodDistances {
        self.lod_distances_for(garment_type, self.device_class())
    }

    #[must_use]
    pub fn lod_distances_for(&self, garment_type: &str, device: DeviceClass) -> LodDistances {
        let scale = self.standard(garment_type).scale.max(f32::EPSILON);
        let device_multiplier = match device {
            DeviceClass::Mobile => self.lod.mobile_distance_multiplier,
            DeviceClass::Tablet | DeviceClass::Desktop => 1.0,
        };
        let factor = device_multiplier / scale;
        let [high, medium, low] = self.lod.base_distances;

        LodDistances {
            high: high * factor,
            medium: medium * factor,
            low: low * factor,
        }
    }
}

/// Anchor point relative to the bounds' center.
#[must_use]
pub fn anchor_offset(anchor: Anchor, bounds: &GarmentBounds) -> Vec3 {
    match anchor {
        Anchor::Center => Vec3::ZERO,
        Anchor::BottomCenter => Vec3::new(0.0, -bounds.height * 0.5, 0.0),
        Anchor::TopCenter => Vec3::new(0.0, bounds.height * 0.5, 0.0),
    }
}
