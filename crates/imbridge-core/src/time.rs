//! Frame timing.
//!
//! [`GuiRenderer::begin_layout`](crate::GuiRenderer::begin_layout) takes the
//! elapsed time from the host. Hosts without their own game clock can use
//! [`FrameClock`].

use std::time::{Duration, Instant};

/// Produces clamped per-frame elapsed times.
///
/// The lower clamp keeps the GUI's delta time strictly positive; the upper
/// clamp stops a debugger pause or a minimized window from turning into one
/// enormous step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    min: Duration,
    max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(min: Duration, max: Duration) -> Self {
        debug_assert!(min <= max);
        Self {
            last: Instant::now(),
            min,
            max,
        }
    }

    /// Restarts the baseline, e.g. after the host resumes from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Returns the time since the previous tick (or construction), clamped.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.clamp(self.min, self.max)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
