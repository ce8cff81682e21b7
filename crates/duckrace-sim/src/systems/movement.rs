//! Movement system — rubber band, target speed, smoothing, integration.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use duckrace_behavior::{kinematics, rubber_band};
use duckrace_core::constants::{FLUX_MIN, FLUX_SPAN};
use duckrace_core::enums::DuckState;
use duckrace_core::roster::Duck;
use duckrace_core::types::TickTiming;

/// Update speed and progress for every unfinished duck whose reaction
/// time has elapsed. `leader_progress` comes from pre-update positions,
/// so every duck this tick sees the same leader.
pub fn run(
    ducks: &mut [Duck],
    leader_progress: f64,
    timing: &TickTiming,
    duration_ms: f64,
    rng: &mut ChaCha8Rng,
) {
    for duck in ducks.iter_mut() {
        if duck.is_finished() || timing.elapsed_ms < duck.reaction_time_ms {
            continue;
        }

        let factor = rubber_band::catch_up_factor(duck.progress, leader_progress);

        // Turbulence only applies to the running waddle.
        let flux = if duck.state == DuckState::Running {
            FLUX_MIN + rng.gen::<f64>() * FLUX_SPAN
        } else {
            1.0
        };

        let target = kinematics::target_multiplier(
            duck.state,
            factor,
            timing.now_ms,
            duck.phase_offset,
            flux,
        );
        duck.speed = kinematics::smooth_speed(duck.speed, target);
        duck.progress += kinematics::progress_delta(duck.speed, duration_ms, timing.delta_ms);
    }
}
