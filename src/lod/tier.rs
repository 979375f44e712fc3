use std::sync::Arc;

use crate::resources::MeshBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LodTier {
    #[default]
    High,
    Medium,
    Low,
}

impl LodTier {
    pub const ALL: [LodTier; 3] = [LodTier::High, LodTier::Medium, LodTier::Low];

    /// Next cheaper tier; `Low` stays `Low`.
    #[must_use]
    pub fn lower(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    /// Next richer tier; `High` stays `High`.
    #[must_use]
    pub fn higher(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Camera distances at which each tier starts to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodDistances {
    pub high: f32,
    pub medium: f32,
    pub low: f32,
}

impl LodDistances {
    /// `High` below `medium`, `Medium` below `low`, `Low` beyond.
    #[must_use]
    pub fn tier_for(&self, distance: f32) -> LodTier {
        if !distance.is_finite() || distance < self.medium {
            LodTier::High
        } else if distance < self.low {
            LodTier::Medium
        } else {
            LodTier::Low
        }
    }
}

/// Three detail tiers of one garment mesh plus their switch distances.
///
/// Tiers are shared behind `Arc` and never mutated after construction; a
/// regenerated bundle replaces the old one instead of editing it.
#[derive(Debug, Clone)]
pub struct LodGeometryBundle {
    pub high: Arc<MeshBuffer>,
    pub medium: Arc<MeshBuffer>,
    pub low: Arc<MeshBuffer>,
    pub distances: LodDistances,
}

impl LodGeometryBundle {
    #[must_use]
    pub fn tier(&self, tier: LodTier) -> &Arc<MeshBuffer> {
        match tier {
            LodTier::High => &self.high,
            LodTier::Medium => &self.medium,
            LodTier::Low => &self.low,
        }
    }

    /// Triangle counts `[high, medium, low]`.
    #[must_use]
    pub fn triangle_counts(&self) -> [usize; 3] {
        LodTier::ALL.map(|t| self.tier(t).triangle_count())
    }

    /// Bytes across all three tiers.
    #[must_use]
    pub fn byte_length(&self) -> usize {
        LodTier::ALL.iter().map(|&t| self.tier(t).byte_length()).sum()
    }
}
