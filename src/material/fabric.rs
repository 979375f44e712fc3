use glam::Vec3;

use crate::garment::normalize_key;

/// Fabric category of a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FabricType {
    #[default]
    Cotton,
    Polyester,
    Blend,
    Fleece,
    Denim,
    Performance,
    Leather,
}

impl FabricType {
    pub const ALL: [FabricType; 7] = [
        Self::Cotton,
        Self::Polyester,
        Self::Blend,
        Self::Fleece,
        Self::Denim,
        Self::Performance,
        Self::Leather,
    ];

    /// Resolves a fabric identifier. Unknown values fall back to `Cotton`.
    #[must_use]
    pub fn parse(fabric: &str) -> Self {
        match normalize_key(fabric).as_str() {
            "cotton" | "organiccotton" => Self::Cotton,
            "polyester" | "poly" => Self::Polyester,
            "blend" | "cottonblend" | "triblend" | "polycotton" => Self::Blend,
            "fleece" => Self::Fleece,
            "denim" => Self::Denim,
            "performance" | "athletic" | "drifit" => Self::Performance,
            "leather" => Self::Leather,
            _ => {
                log::warn!("Unknown fabric type '{fabric}', using cotton");
                Self::Cotton
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cotton => "cotton",
            Self::Polyester => "polyester",
            Self::Blend => "blend",
            Self::Fleece => "fleece",
            Self::Denim => "denim",
            Self::Performance => "performance",
            Self::Leather => "leather",
        }
    }

    #[must_use]
    pub fn properties(self) -> FabricProperties {
        let white = Vec3::ONE;
        match self {
            Self::Cotton => FabricProperties {
                roughness: 0.8,
                sheen: 0.5,
                sheen_roughness: 0.8,
                sheen_color: white,
                ..FabricProperties::MATTE
            },
            Self::Polyester => FabricProperties {
                roughness: 0.4,
                clearcoat: 0.1,
                clearcoat_roughness: 0.3,
                sheen: 0.3,
                sheen_roughness: 0.5,
                sheen_color: white,
                ..FabricProperties::MATTE
            },
            Self::Blend => FabricProperties {
                roughness: 0.6,
                clearcoat: 0.05,
                clearcoat_roughness: 0.5,
                sheen: 0.4,
                sheen_roughness: 0.7,
                sheen_color: white,
                ..FabricProperties::MATTE
            },
            Self::Fleece => FabricProperties {
                roughness: 0.95,
                sheen: 0.8,
                sheen_roughness: 0.9,
                sheen_color: white,
                ..FabricProperties::MATTE
            },
            Self::Denim => FabricProperties {
                roughness: 0.85,
                sheen: 0.2,
                sheen_roughness: 0.9,
                sheen_color: Vec3::new(0.8, 0.85, 1.0),
                ..FabricProperties::MATTE
            },
            Self::Performance => FabricProperties {
                roughness: 0.3,
                clearcoat: 0.2,
                clearcoat_roughness: 0.2,
                transmission: 0.05,
                sheen: 0.2,
                sheen_roughness: 0.4,
                sheen_color: white,
                transparent: true,
                ..FabricProperties::MATTE
            },
            Self::Leather => FabricProperties {
                roughness: 0.5,
                clearcoat: 0.3,
                clearcoat_roughness: 0.4,
                ..FabricProperties::MATTE
            },
        }
    }
}

/// Surface-shading parameters of one fabric category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabricProperties {
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub transmission: f32,
    pub sheen: f32,
    pub sheen_roughness: f32,
    pub sheen_color: Vec3,
    pub transparent: bool,
}

impl FabricProperties {
    const MATTE: Self = Self {
        roughness: 1.0,
        metalness: 0.0,
        clearcoat: 0.0,
        clearcoat_roughness: 0.0,
        transmission: 0.0,
        sheen: 0.0,
        sheen_roughness: 0.0,
        sheen_color: Vec3::ZERO,
        transparent: false,
    };
}

/// String-keyed fabric lookup; never fails.
#[must_use]
pub fn fabric_properties(fabric: &str) -> FabricProperties {
    FabricType::parse(fabric).properties()
}
