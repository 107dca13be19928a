//! Fixed-interval step gate
//!
//! The host calls [`FrameScheduler::poll`] once per animation frame. At most
//! one simulation step runs per frame, and only once the current step
//! interval has elapsed since the previous one.

/// Tracks when the simulation last stepped
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    /// Host timestamp (ms) of the last step
    last_step_ms: f64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a step is due at `now_ms`, recording it as taken.
    pub fn poll(&mut self, now_ms: f64, interval_ms: u32) -> bool {
        if now_ms - self.last_step_ms >= f64::from(interval_ms) {
            self.last_step_ms = now_ms;
            true
        } else {
            false
        }
    }

    pub fn last_step_ms(&self) -> f64 {
        self.last_step_ms
    }
}
