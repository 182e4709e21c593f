//! Running/paused bookkeeping for the frame loop.

/// Tracks whether frames should run and the timestamp of the previous one.
///
/// Starting again after a pause resets the baseline, so the first resumed
/// frame reports the time since `start` rather than the length of the pause.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    running: bool,
    last_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if the clock was stopped, i.e. the caller must schedule a frame.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_ms = now_ms;
        true
    }

    /// Returns true if the clock was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Elapsed milliseconds since the previous frame, or `None` once stopped.
    pub fn advance(&mut self, now_ms: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        // Frame timestamps may precede the start baseline by a fraction of a frame
        let dt = (now_ms - self.last_ms).max(0.0);
        self.last_ms = now_ms;
        Some(dt)
    }
}
