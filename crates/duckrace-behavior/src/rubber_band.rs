//! Rubber-band catch-up policy.
//!
//! Keeps the race competitive regardless of random variance: trailing
//! ducks get a speed bonus proportional to their gap to the leader,
//! and the sole leader carries a slight drag.

use duckrace_core::constants::{
    LEADER_DRAG_FACTOR, RUBBER_BAND_GAP_CAP, RUBBER_BAND_PER_UNIT,
};

/// Multiplicative catch-up factor for one duck.
///
/// - Behind the leader: up to +30% bonus, saturating once the gap
///   exceeds the cap.
/// - At the front with the race underway: 0.96 drag.
/// - All ducks still at the start line: no adjustment.
pub fn catch_up_factor(progress: f64, leader_progress: f64) -> f64 {
    let gap = leader_progress - progress;

    if gap > 0.0 {
        1.0 + gap.min(RUBBER_BAND_GAP_CAP) * RUBBER_BAND_PER_UNIT
    } else if leader_progress > 0.0 {
        LEADER_DRAG_FACTOR
    } else {
        1.0
    }
}
