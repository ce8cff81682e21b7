//! Race clock — wall-clock sampling with per-tick delta clamping.

use duckrace_core::constants::MAX_TICK_DELTA_MS;
use duckrace_core::types::TickTiming;

/// Tracks the race start and previous tick times, producing clamped
/// deltas for integration.
#[derive(Debug, Clone, Copy)]
pub struct RaceClock {
    start_ms: f64,
    prev_ms: f64,
}

impl RaceClock {
    /// Start the clock at the given wall-clock time.
    pub fn start(now_ms: f64) -> Self {
        Self {
            start_ms: now_ms,
            prev_ms: now_ms,
        }
    }

    /// Advance to `now_ms`.
    ///
    /// The delta is clamped to [0, MAX_TICK_DELTA_MS]: a stalled or
    /// backwards-stepping clock never produces a huge or negative
    /// integration step.
    pub fn advance(&mut self, now_ms: f64) -> TickTiming {
        let delta_ms = (now_ms - self.prev_ms).clamp(0.0, MAX_TICK_DELTA_MS);
        self.prev_ms = now_ms;

        TickTiming {
            now_ms,
            elapsed_ms: (now_ms - self.start_ms).max(0.0),
            delta_ms,
        }
    }
}
