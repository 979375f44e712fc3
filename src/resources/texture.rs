use glam::Vec2;
use uuid::Uuid;
use wgpu::{AddressMode, FilterMode, MipmapFilterMode};

/// Sampling state applied to a design texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSampler {
    pub address_mode_u: AddressMode,
    pub address_mode_v: AddressMode,
    pub mag_filter: FilterMode,
    pub min_filter: FilterMode,
    pub mipmap_filter: MipmapFilterMode,
    // 1 = off
    pub anisotropy_clamp: u16,
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            address_mode_u: AddressMode::Repeat,
            address_mode_v: AddressMode::Repeat,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: MipmapFilterMode::Linear,
            anisotropy_clamp: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureTransform {
    pub offset: Vec2,
    pub repeat: Vec2,
    pub rotation: f32,
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            repeat: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

/// A design texture as seen by the preview core.
///
/// Pixel data stays with the host; the core only tunes how it is sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,

    pub sampler: TextureSampler,
    pub transform: TextureTransform,
    pub generate_mipmaps: bool,

    pub version: u64,
}

impl Texture {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self::with_id(Uuid::new_v4(), name, width, height)
    }

    /// Creates a texture with a caller-chosen identity (stable cache keys).
    pub fn with_id(id: Uuid, name: &str, width: u32, height: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            width,
            height,
            sampler: TextureSampler::default(),
            transform: TextureTransform::default(),
            generate_mipmaps: true,
            version: 0,
        }
    }

    pub fn needs_update(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
