//! Kinematics: behavioral state + rubber-band factor → smoothed motion.
//!
//! Every function here is a pure function of its inputs (the turbulence
//! flux is passed in, not drawn), so two ticks with identical inputs
//! produce identical speed and progress deltas.

use duckrace_core::constants::*;
use duckrace_core::enums::DuckState;

/// Base velocity in progress units per millisecond: a multiplier-1.0
/// duck covers the nominal distance in the configured duration minus
/// the start slack.
pub fn ideal_velocity_per_ms(duration_ms: f64) -> f64 {
    NOMINAL_DISTANCE / (duration_ms - DURATION_SLACK_MS)
}

/// Target speed multiplier for the duck's current state.
///
/// `flux` is the per-tick turbulence draw in [FLUX_MIN, FLUX_MIN +
/// FLUX_SPAN); it only affects the `Running` waddle.
pub fn target_multiplier(
    state: DuckState,
    rubber_band_factor: f64,
    now_ms: f64,
    phase_offset: f64,
    flux: f64,
) -> f64 {
    match state {
        DuckState::Boosting => BOOST_MULTIPLIER * rubber_band_factor,
        DuckState::Tired => TIRED_MULTIPLIER * rubber_band_factor,
        // A tripped duck is fully stopped; rubber-band is ignored.
        DuckState::Tripped => 0.0,
        DuckState::Idle | DuckState::Running => {
            let waddle = (now_ms / WADDLE_PERIOD_MS + phase_offset).sin();
            (1.0 + waddle * WADDLE_AMPLITUDE) * rubber_band_factor * flux
        }
    }
}

/// Move `speed` toward `target` with asymmetric exponential smoothing:
/// snappier when accelerating, gentler when decelerating.
pub fn smooth_speed(speed: f64, target: f64) -> f64 {
    let factor = if speed < target {
        ACCEL_SMOOTHING
    } else {
        DECEL_SMOOTHING
    };
    speed + (target - speed) * factor
}

/// Progress delta for one tick. No upper clamp here — the finish check
/// treats any value past the line as "reached".
pub fn progress_delta(speed: f64, duration_ms: f64, delta_ms: f64) -> f64 {
    ideal_velocity_per_ms(duration_ms) * speed * delta_ms
}
