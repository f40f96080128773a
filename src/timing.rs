//! Frame delta timing for hosts
//!
//! The simulation takes `dt` as given and never clamps it; this just turns a
//! stream of instants into per-frame seconds.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call (0 on the first frame)
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        dt.as_secs_f32()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
