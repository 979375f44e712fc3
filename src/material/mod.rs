//! Materials
//!
//! - [`FabricType`] / [`FabricProperties`]: fixed shading table per fabric
//! - [`PrintMethod`]: design application method and its texture filtering
//! - [`GarmentMaterial`]: the parameter block handed to the render host
//! - [`MaterialOptimizer`]: material and texture caching, preloading

pub mod fabric;
pub mod surface;
pub mod optimizer;
pub mod print;

pub use fabric::{FabricProperties, FabricType, fabric_properties};
pub use surface::{GarmentMaterial, MaterialConfig, color_from_hex};
pub use optimizer::{
    COMMON_COLORS, COMMON_FABRICS, COMMON_GARMENTS, COMMON_PRINT_METHODS, MaterialOptimizer,
};
pub use print::PrintMethod;
