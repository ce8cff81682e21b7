//! Behavioral state system — advances each active duck's state machine.

use rand_chacha::ChaCha8Rng;

use duckrace_behavior::fsm::{self, BehaviorContext};
use duckrace_core::enums::DuckState;
use duckrace_core::events::RaceEvent;
use duckrace_core::roster::Duck;
use duckrace_core::types::TickTiming;

/// Run the state machine for every unfinished duck whose reaction time
/// has elapsed. `leader_progress` comes from pre-update positions.
pub fn run(
    ducks: &mut [Duck],
    leader_progress: f64,
    timing: &TickTiming,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<RaceEvent>,
) {
    for duck in ducks.iter_mut() {
        if duck.is_finished() || timing.elapsed_ms < duck.reaction_time_ms {
            continue;
        }

        let ctx = BehaviorContext {
            state: duck.state,
            state_timer_ms: duck.state_timer_ms,
            progress: duck.progress,
            leader_progress,
            delta_ms: timing.delta_ms,
        };
        let update = fsm::advance(&ctx, rng);

        if update.state_changed {
            match update.new_state {
                DuckState::Boosting => events.push(RaceEvent::DuckBoosted { id: duck.id }),
                DuckState::Tripped => events.push(RaceEvent::DuckTripped { id: duck.id }),
                _ => {}
            }
        }

        duck.state = update.new_state;
        duck.state_timer_ms = update.new_timer_ms;
    }
}
