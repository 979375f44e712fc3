#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Adaptive detail and resource caching core for real-time garment previews.
//!
//! - [`garment`]: per-garment scale, bounds and anchor table
//! - [`viewport`]: device classification, camera framing, alignment guides
//! - [`lod`]: detail tier generation and per-frame selection
//! - [`cache`]: session-owned geometry/bundle/material cache with eviction
//! - [`material`]: fabric shading, print-method texture tuning, preloading
//! - [`engine`]: [`PreviewEngine`], the session facade tying them together

pub mod cache;
pub mod engine;
pub mod errors;
pub mod garment;
pub mod lod;
pub mod material;
pub mod resources;
pub mod settings;
pub mod utils;
pub mod viewport;

pub use cache::{CacheKind, CacheStats, CacheValue, ResourceCache};
pub use engine::PreviewEngine;
pub use errors::{DrapeError, Result};
pub use garment::{Anchor, GarmentKind, GarmentStandard, standard_for};
pub use lod::{
    DetailSelector, DistanceSelector, LodController, LodDistances, LodGenerator, LodGeometryBundle, LodStats,
    LodTier, simplify,
};
pub use material::{FabricProperties, FabricType, GarmentMaterial, MaterialConfig, MaterialOptimizer, PrintMethod};
pub use resources::primitives::*;
pub use resources::{MeshBuffer, Texture};
pub use settings::PreviewSettings;
pub use viewport::{
    BoundingBoxManager, CameraFraming, DeviceClass, GarmentBounds, ViewportManager, ViewportSize, classify_device,
};
