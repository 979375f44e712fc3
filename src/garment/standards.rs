use glam::Vec3;

/// Reference point the garment's bounds are positioned around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Center,
    BottomCenter,
    TopCenter,
}

/// Physical proportions of one garment type.
///
/// `bounds` are in garment units (inches) before `scale` is applied; the
/// scale normalizes garments of very different sizes to a comparable
/// on-screen footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmentStandard {
    pub scale: f32,
    pub bounds: Vec3,
    pub anchor: Anchor,
}

impl GarmentStandard {
    pub const DEFAULT: Self = Self {
        scale: 1.0,
        bounds: Vec3::new(12.0, 16.0, 0.6),
        anchor: Anchor::BottomCenter,
    };

    /// `bounds * scale`, component-wise.
    #[inline]
    #[must_use]
    pub fn scaled_bounds(&self) -> Vec3 {
        self.bounds * self.scale
    }
}

impl Default for GarmentStandard {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GarmentKind {
    TShirt,
    LongSleeve,
    TankTop,
    Polo,
    Hoodie,
    Sweatshirt,
    Jacket,
    Cap,
    Beanie,
    ToteBag,
    Default,
}

impl GarmentKind {
    pub const ALL: [GarmentKind; 11] = [
        GarmentKind::TShirt,
        GarmentKind::LongSleeve,
        GarmentKind::TankTop,
        GarmentKind::Polo,
        GarmentKind::Hoodie,
        GarmentKind::Sweatshirt,
        GarmentKind::Jacket,
        GarmentKind::Cap,
        GarmentKind::Beanie,
        GarmentKind::ToteBag,
        GarmentKind::Default,
    ];

    /// Resolves a free-form identifier; unknown identifiers map to `Default`.
    #[must_use]
    pub fn parse(garment_type: &str) -> Self {
        match normalize_key(garment_type).as_str() {
            "tshirt" | "tee" | "shirt" | "teeshirt" => Self::TShirt,
            "longsleeve" | "longsleeveshirt" | "longsleevetee" => Self::LongSleeve,
            "tanktop" | "tank" | "singlet" => Self::TankTop,
            "polo" | "poloshirt" => Self::Polo,
            "hoodie" | "hoody" | "hooded" | "hoodedsweatshirt" => Self::Hoodie,
            "sweatshirt" | "crewneck" | "sweater" | "pullover" => Self::Sweatshirt,
            "jacket" | "coat" | "windbreaker" => Self::Jacket,
            "cap" | "hat" | "baseballcap" | "snapback" | "truckerhat" => Self::Cap,
            "beanie" | "toque" | "knithat" => Self::Beanie,
            "totebag" | "tote" | "bag" => Self::ToteBag,
            _ => Self::Default,
        }
    }

    /// Canonical (already normalized) key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TShirt => "tshirt",
            Self::LongSleeve => "longsleeve",
            Self::TankTop => "tanktop",
            Self::Polo => "polo",
            Self::Hoodie => "hoodie",
            Self::Sweatshirt => "sweatshirt",
            Self::Jacket => "jacket",
            Self::Cap => "cap",
            Self::Beanie => "beanie",
            Self::ToteBag => "totebag",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub fn standard(self) -> GarmentStandard {
        let (scale, bounds, anchor) = match self {
            Self::TShirt => (1.0, Vec3::new(12.0, 16.0, 0.6), Anchor::BottomCenter),
            Self::LongSleeve => (1.0, Vec3::new(18.0, 16.0, 0.6), Anchor::BottomCenter),
            Self::TankTop => (1.0, Vec3::new(10.0, 15.0, 0.5), Anchor::BottomCenter),
            Self::Polo => (0.95, Vec3::new(13.0, 16.0, 0.7), Anchor::BottomCenter),
            Self::Hoodie => (0.85, Vec3::new(15.0, 18.0, 0.8), Anchor::BottomCenter),
            Self::Sweatshirt => (0.9, Vec3::new(14.0, 17.0, 0.8), Anchor::BottomCenter),
            Self::Jacket => (0.8, Vec3::new(16.0, 20.0, 1.2), Anchor::BottomCenter),
            Self::Cap => (1.6, Vec3::new(8.0, 5.0, 8.0), Anchor::Center),
            Self::Beanie => (1.5, Vec3::new(8.0, 7.0, 8.0), Anchor::Center),
            Self::ToteBag => (1.0, Vec3::new(14.0, 15.0, 0.4), Anchor::TopCenter),
            Self::Default => return GarmentStandard::DEFAULT,
        };
        GarmentStandard { scale, bounds, anchor }
    }
}

/// Lowercases and strips `-`, `_` and whitespace.
#[must_use]
pub fn normalize_key(garment_type: &str) -> String {
    garment_type
        .chars()
        .filter(|c| !(c.is_whitespace() || *c == '-' || *c == '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Standard for a free-form garment identifier. Never fails.
#[must_use]
pub fn standard_for(garment_type: &str) -> GarmentStandard {
    let kind = GarmentKind::parse(garment_type);
    if kind == GarmentKind::Default && normalize_key(garment_type) != "default" {
        log::debug!("Unknown garment type '{garment_type}', using default standard");
    }
    kind.standard()
}
