//! Level of Detail
//!
//! - [`LodGenerator`] builds high/medium/low tiers from a base mesh
//! - [`simplify`] decimates a mesh to a triangle budget
//! - [`DetailSelector`] / [`DistanceSelector`] choose a tier per frame
//! - [`LodController`] tracks one rendered garment's tier and stats

pub mod controller;
pub mod generator;
pub mod selector;
pub mod simplify;
pub mod tier;

pub use controller::{LodController, LodStats};
pub use generator::LodGenerator;
pub use selector::{DetailSelector, DistanceSelector, PerformanceMonitor};
pub use simplify::simplify;
pub use tier::{LodDistances, LodGeometryBundle, LodTier};
