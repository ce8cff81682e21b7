//! Duck behavioral state machine.
//!
//! Computes the next behavioral state for a single duck. States run on
//! a countdown: while the timer is positive it only decays; once it
//! reaches zero the duck settles back into `Running` and a new state
//! is rolled with position-dependent probabilities.

use rand::Rng;

use duckrace_core::constants::*;
use duckrace_core::enums::DuckState;

/// Input to the state machine for a single duck.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorContext {
    pub state: DuckState,
    pub state_timer_ms: f64,
    pub progress: f64,
    /// Maximum progress across the roster this tick, from pre-update
    /// positions.
    pub leader_progress: f64,
    pub delta_ms: f64,
}

/// Output from the state machine.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorUpdate {
    pub new_state: DuckState,
    pub new_timer_ms: f64,
    pub state_changed: bool,
}

/// Advance the state machine by one tick.
///
/// A running timer consumes the tick's delta with no new roll. A
/// decayed timer triggers exactly one uniform draw, banded into
/// boost / tired / tripped / keep-running outcomes; timed states get a
/// fresh draw for their duration.
pub fn advance<R: Rng>(ctx: &BehaviorContext, rng: &mut R) -> BehaviorUpdate {
    if ctx.state_timer_ms > 0.0 {
        return BehaviorUpdate {
            new_state: ctx.state,
            new_timer_ms: ctx.state_timer_ms - ctx.delta_ms,
            state_changed: false,
        };
    }

    let mut state = DuckState::Running;
    let mut timer_ms = 0.0;

    let (boost_chance, trip_chance) = outcome_chances(ctx.progress, ctx.leader_progress);

    let r: f64 = rng.gen();
    if r < boost_chance {
        state = DuckState::Boosting;
        timer_ms = BOOST_DURATION_MIN_MS + rng.gen::<f64>() * BOOST_DURATION_SPAN_MS;
    } else if r < boost_chance + TIRED_CHANCE {
        state = DuckState::Tired;
        timer_ms = TIRED_DURATION_MIN_MS + rng.gen::<f64>() * TIRED_DURATION_SPAN_MS;
    } else if r < boost_chance + TIRED_CHANCE + trip_chance {
        state = DuckState::Tripped;
        timer_ms = TRIP_DURATION_MIN_MS + rng.gen::<f64>() * TRIP_DURATION_SPAN_MS;
    }

    BehaviorUpdate {
        new_state: state,
        new_timer_ms: timer_ms,
        state_changed: state != ctx.state,
    }
}

/// Position-dependent (boost, trip) chances for the settle roll.
///
/// The far-behind override favors boosting and suppresses trips; the
/// final-stretch override raises both. The final-stretch check is
/// evaluated second and wins when a duck satisfies both.
pub fn outcome_chances(progress: f64, leader_progress: f64) -> (f64, f64) {
    let mut boost = BOOST_CHANCE_BASE;
    let mut trip = TRIP_CHANCE_BASE;

    if leader_progress - progress > BEHIND_GAP_THRESHOLD {
        boost = BOOST_CHANCE_BEHIND;
        trip = TRIP_CHANCE_BEHIND;
    }

    if progress > FINAL_STRETCH_PROGRESS {
        boost = BOOST_CHANCE_FINAL;
        trip = TRIP_CHANCE_FINAL;
    }

    (boost, trip)
}
