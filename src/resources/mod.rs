//! Core resource definitions, independent of any GPU backend:
//! - [`MeshBuffer`]: vertex/index data of one detail tier
//! - [`Texture`]: design texture sampling configuration
//! - [`primitives`]: procedural meshes (box, plane, sphere, garment panel)

pub mod geometry;
pub mod primitives;
pub mod texture;

pub use geometry::{Attribute, BoundingBox, BoundingSphere, MeshBuffer};
pub use texture::{Texture, TextureSampler, TextureTransform};
