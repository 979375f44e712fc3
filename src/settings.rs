//! Preview Settings
//!
//! Tunables for the adaptive detail and caching core. Every field has a
//! default matching the shipped behavior, so hosts usually start from
//! [`PreviewSettings::default`] and override a handful of values, either in
//! code or from a JSON document:
//!
//! ```rust,ignore
//! use drape::settings::PreviewSettings;
//!
//! let settings = PreviewSettings::from_json_str(r#"{ "cache": { "max_entries": 80 } }"#)?;
//! assert_eq!(settings.cache.idle_ttl_secs, 30.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{DrapeError, Result};

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Bounds for the [`ResourceCache`](crate::cache::ResourceCache).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Entry count above which the oldest entries are evicted.
    pub max_entries: usize,
    /// Entries idle for longer than this are expired on the next cleanup.
    pub idle_ttl_secs: f32,
    /// Share of the remaining entries evicted when over `max_entries`.
    pub evict_fraction: f32,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: 50,
            idle_ttl_secs: 30.0,
            evict_fraction: 0.3,
        }
    }
}

impl CacheSettings {
    #[inline]
    #[must_use]
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs_f32(self.idle_ttl_secs.max(0.0))
    }
}

// ---------------------------------------------------------------------------
// LOD
// ---------------------------------------------------------------------------

/// Triangle budgets per detail tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleBudgets {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Default for TriangleBudgets {
    fn default() -> Self {
        Self {
            high: 10_000,
            medium: 5_000,
            low: 2_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodSettings {
    /// Switch distances `[high, medium, low]` for a garment at scale 1.0 on desktop.
    pub base_distances: [f32; 3],
    /// Extra distance factor on mobile viewports.
    pub mobile_distance_multiplier: f32,
    pub budgets: TriangleBudgets,
}

impl Default for LodSettings {
    fn default() -> Self {
        Self {
            base_distances: [2.0, 6.0, 15.0],
            mobile_distance_multiplier: 1.5,
            budgets: TriangleBudgets::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Performance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSettings {
    /// Frame rate below which auto-quality drops one tier.
    pub min_frame_rate: f32,
    /// Length of the rolling frame-rate window.
    pub window_secs: f32,
    pub auto_quality: bool,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            min_frame_rate: 30.0,
            window_secs: 1.0,
            auto_quality: true,
        }
    }
}

impl PerformanceSettings {
    #[inline]
    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::from_secs_f32(self.window_secs.max(0.001))
    }
}

// ---------------------------------------------------------------------------
// PreviewSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub cache: CacheSettings,
    pub lod: LodSettings,
    pub performance: PerformanceSettings,
}

impl PreviewSettings {
    /// Parses settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values the core cannot operate with.
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            Err(DrapeError::InvalidSettings(msg))
        }

        if self.cache.max_entries == 0 {
            return invalid("cache.max_entries must be at least 1".into());
        }
        if !(self.cache.evict_fraction > 0.0 && self.cache.evict_fraction <= 1.0) {
            return invalid(format!(
                "cache.evict_fraction must be in (0, 1], got {}",
                self.cache.evict_fraction
            ));
        }
        if self.cache.idle_ttl_secs < 0.0 {
            return invalid("cache.idle_ttl_secs must not be negative".into());
        }

        let [high, medium, low] = self.lod.base_distances;
        if !(high > 0.0 && high < medium && medium < low) {
            return invalid(format!(
                "lod.base_distances must be positive and increasing, got {:?}",
                self.lod.base_distances
            ));
        }
        if self.lod.mobile_distance_multiplier <= 0.0 {
            return invalid("lod.mobile_distance_multiplier must be positive".into());
        }
        let budgets = self.lod.budgets;
        if budgets.low == 0 || budgets.low > budgets.medium || budgets.medium > budgets.high {
            return invalid(format!(
                "lod.budgets must satisfy 0 < low <= medium <= high, got {budgets:?}"
            ));
        }

        if self.performance.min_frame_rate <= 0.0 || self.performance.window_secs <= 0.0 {
            return invalid("performance thresholds must be positive".into());
        }

        Ok(())
    }
}
