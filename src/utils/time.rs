#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Measures the wall-clock time between display frames.
pub struct Timer {
    last_frame: Instant,
    delta: Duration,
    /// Frames recorded so far.
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Records one frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Time between the last two frames, in milliseconds.
    #[must_use]
    pub fn dt_ms(&self) -> f64 {
        self.delta.as_secs_f64() * 1000.0
    }
}
