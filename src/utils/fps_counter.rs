use std::collections::VecDeque;
use std::time::Duration;

/// Frames the window must hold before a rate is reported.
pub const MIN_FPS_SAMPLES: usize = 3;

/// Rolling-window frame rate counter.
///
/// Frame deltas are pushed once per rendered frame; the rate is computed over
/// the most recent `window` worth of frames so a single long frame cannot
/// dominate the reading for long. No rate is reported until
/// [`MIN_FPS_SAMPLES`] frames have been seen.
pub struct FpsCounter {
    window: Duration,
    samples: VecDeque<Duration>,
    accumulated_time: Duration,
    pub current_fps: Option<f32>,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.max(Duration::from_millis(1)),
            samples: VecDeque::new(),
            accumulated_time: Duration::ZERO,
            current_fps: None,
        }
    }

    /// Records one frame and returns the updated rate.
    pub fn record_frame(&mut self, delta: Duration) -> Option<f32> {
        if delta.is_zero() {
            return self.current_fps;
        }

        self.samples.push_back(delta);
        self.accumulated_time += delta;

        while self.samples.len() > MIN_FPS_SAMPLES && self.accumulated_time > self.window {
            if let Some(oldest) = self.samples.pop_front() {
                self.accumulated_time -= oldest;
            }
        }

        let secs = self.accumulated_time.as_secs_f32();
        self.current_fps = if self.samples.len() >= MIN_FPS_SAMPLES && secs > 0.0 {
            Some(self.samples.len() as f32 / secs)
        } else {
            None
        };
        self.current_fps
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.accumulated_time = Duration::ZERO;
        self.current_fps = None;
    }
}
