use wgpu::{FilterMode, MipmapFilterMode};

use crate::garment::normalize_key;
use crate::resources::TextureSampler;

/// How a design is applied to the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrintMethod {
    #[default]
    ScreenPrint,
    Dtg,
    Vinyl,
    Embroidery,
}

impl PrintMethod {
    pub const ALL: [PrintMethod; 4] = [Self::ScreenPrint, Self::Dtg, Self::Vinyl, Self::Embroidery];

    /// Resolves a print-method identifier. Unknown values fall back to
    /// `ScreenPrint`.
    #[must_use]
    pub fn parse(method: &str) -> Self {
        match normalize_key(method).as_str() {
            "screenprint" | "screen" | "screenprinting" => Self::ScreenPrint,
            "dtg" | "directtogarment" => Self::Dtg,
            "vinyl" | "htv" | "heattransfer" => Self::Vinyl,
            "embroidery" | "embroidered" => Self::Embroidery,
            _ => {
                log::warn!("Unknown print method '{method}', using screen-print");
                Self::ScreenPrint
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScreenPrint => "screen-print",
            Self::Dtg => "dtg",
            Self::Vinyl => "vinyl",
            Self::Embroidery => "embroidery",
        }
    }

    /// Filtering for a design texture printed with this method.
    ///
    /// Flat-ink methods keep crisp edges under magnification; photographic
    /// and stitched designs filter smoothly.
    #[must_use]
    pub fn sampler(self) -> TextureSampler {
        let (mag_filter, min_filter, mipmap_filter) = match self {
            Self::ScreenPrint => (FilterMode::Nearest, FilterMode::Linear, MipmapFilterMode::Nearest),
            Self::Dtg | Self::Embroidery => (FilterMode::Linear, FilterMode::Linear, MipmapFilterMode::Linear),
            Self::Vinyl => (FilterMode::Nearest, FilterMode::Nearest, MipmapFilterMode::Nearest),
        };

        TextureSampler {
            mag_filter,
            min_filter,
            mipmap_filter,
            ..TextureSampler::default()
        }
    }
}
