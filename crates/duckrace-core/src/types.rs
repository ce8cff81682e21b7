//! Fundamental timing types for the race simulation.

use serde::{Deserialize, Serialize};

/// Timing inputs for one simulation tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickTiming {
    /// Wall-clock time of this tick (ms).
    pub now_ms: f64,
    /// Time since race start (ms).
    pub elapsed_ms: f64,
    /// Clamped time since the previous tick (ms).
    pub delta_ms: f64,
}

/// Format a race clock value as `MM:SS:CC` (minutes, seconds,
/// centiseconds), the way the summary display shows it.
pub fn format_race_clock(ms: f64) -> String {
    let ms = ms.max(0.0);
    let minutes = (ms / 60_000.0).floor() as u64;
    let seconds = ((ms % 60_000.0) / 1000.0).floor() as u64;
    let centis = ((ms % 1000.0) / 10.0).floor() as u64;
    format!("{minutes:02}:{seconds:02}:{centis:02}")
}
