/// Viewport width below which a device counts as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Viewport width below which a device counts as tablet.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Coarse device bucket derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// `< 768` is mobile, `768..1024` is tablet, `>= 1024` is desktop.
    #[inline]
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Multiplier applied to the garment's base scale.
    #[must_use]
    pub fn scale_factor(self) -> f32 {
        match self {
            Self::Mobile => 0.9,
            Self::Tablet => 0.95,
            Self::Desktop => 1.0,
        }
    }

    /// Camera pull-back so the garment keeps its margin on smaller screens.
    #[must_use]
    pub fn camera_distance_multiplier(self) -> f32 {
        match self {
            Self::Mobile => 1.4,
            Self::Tablet => 1.2,
            Self::Desktop => 1.0,
        }
    }

    #[must_use]
    pub fn camera_profile(self) -> CameraProfile {
        match self {
            Self::Mobile => CameraProfile {
                fov: 50.0,
                near: 0.1,
                far: 500.0,
                min_zoom: 0.6,
                max_zoom: 3.0,
            },
            Self::Tablet => CameraProfile {
                fov: 45.0,
                near: 0.1,
                far: 750.0,
                min_zoom: 0.5,
                max_zoom: 2.5,
            },
            Self::Desktop => CameraProfile {
                fov: 40.0,
                near: 0.1,
                far: 1000.0,
                min_zoom: 0.4,
                max_zoom: 2.0,
            },
        }
    }
}

/// Per-device projection and zoom limits. Zoom limits are multiples of the
/// framing distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraProfile {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

/// Pure classification of a viewport width.
#[inline]
#[must_use]
pub fn classify_device(width: u32) -> DeviceClass {
    DeviceClass::from_width(width)
}
