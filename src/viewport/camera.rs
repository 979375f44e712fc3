use glam::{Mat4, Vec3};

use super::device::DeviceClass;

/// Camera placement computed for one garment on one device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFraming {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub device: DeviceClass,
}

impl CameraFraming {
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Right-handed view matrix, Y up.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Right-handed perspective projection (0..1 depth, as wgpu expects).
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect.max(f32::EPSILON), self.near, self.far)
    }

    /// `(min_distance, max_distance)` for an orbit control.
    #[must_use]
    pub fn zoom_limits(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    /// Orbit distance clamped into the allowed zoom range.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

/// Distance at which an object of height `extent` exactly fills a vertical
/// field of view of `fov_degrees`.
#[must_use]
pub fn fit_distance(extent: f32, fov_degrees: f32) -> f32 {
    let half_fov = (fov_degrees.to_radians() * 0.5).max(f32::EPSILON);
    (extent * 0.5) / half_fov.tan()
}
