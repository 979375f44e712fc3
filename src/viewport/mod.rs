//! Viewport Module
//!
//! Device classification, garment scale standardization, camera framing and
//! LOD distance derivation ([`ViewportManager`]), plus alignment-guide
//! geometry and snapping helpers ([`BoundingBoxManager`]).

pub mod camera;
pub mod device;
pub mod guides;
pub mod manager;

pub use camera::{CameraFraming, fit_distance};
pub use device::{CameraProfile, DeviceClass, classify_device};
pub use guides::{
    BoundingBoxManager, GuideLines, GuideStyle, Ruler, RulerTick, clamp_to_bounds, contains, snap_to_grid,
};
pub use manager::{GarmentBounds, ResponsiveScale, ViewportManager, ViewportSize, anchor_offset};
