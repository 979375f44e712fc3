use std::time::Duration;

use crate::settings::PerformanceSettings;
use crate::utils::FpsCounter;

use super::tier::{LodDistances, LodTier};

/// Per-frame tier selection policy, independent of any renderer.
pub trait DetailSelector {
    /// `distance` is camera-to-anchor; `frame_rate` is the rolling rate.
    /// Missing inputs never fail: no distance selects `High`, no frame rate
    /// disables the performance rule.
    fn select(&self, distance: Option<f32>, frame_rate: Option<f32>) -> LodTier;
}

/// Distance thresholds with an optional frame-rate fallback.
///
/// With `auto_quality` on, a frame rate below `min_frame_rate` forces the
/// next cheaper tier than distance alone would pick. The rule is evaluated
/// fresh every frame, so quality recovers as soon as the rate does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSelector {
    pub distances: LodDistances,
    pub auto_quality: bool,
    pub min_frame_rate: f32,
}

impl DistanceSelector {
    #[must_use]
    pub fn new(distances: LodDistances, performance: &PerformanceSettings) -> Self {
        Self {
            distances,
            auto_quality: performance.auto_quality,
            min_frame_rate: performance.min_frame_rate,
        }
    }
}

impl DetailSelector for DistanceSelector {
    fn select(&self, distance: Option<f32>, frame_rate: Option<f32>) -> LodTier {
        let tier = distance.map_or(LodTier::High, |d| self.distances.tier_for(d));

        match frame_rate {
            Some(fps) if self.auto_quality && fps < self.min_frame_rate => tier.lower(),
            _ => tier,
        }
    }
}

/// Rolling frame-rate bookkeeping for auto-quality decisions.
pub struct PerformanceMonitor {
    counter: FpsCounter,
    min_frame_rate: f32,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(&PerformanceSettings::default())
    }
}

impl PerformanceMonitor {
    #[must_use]
    pub fn new(settings: &PerformanceSettings) -> Self {
        Self {
            counter: FpsCounter::new(settings.window()),
            min_frame_rate: settings.min_frame_rate,
        }
    }

    pub fn record_frame(&mut self, delta: Duration) -> Option<f32> {
        self.counter.record_frame(delta)
    }

    /// Rolling frame rate, `None` before the first frame.
    #[must_use]
    pub fn frame_rate(&self) -> Option<f32> {
        self.counter.current_fps
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.frame_rate().is_some_and(|fps| fps < self.min_frame_rate)
    }

    pub fn reset(&mut self) {
        self.counter.reset();
    }
}
