//! Race engine — the core of the simulation.
//!
//! Owns the roster, the race clock, and the seeded RNG; runs the
//! per-tick pipeline (state machine → rubber band → kinematics →
//! completion) and produces `RaceSnapshot`s. The caller drives ticks
//! with wall-clock timestamps, so the engine itself never sleeps.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use duckrace_core::constants::{
    DEFAULT_DURATION_SECS, MAX_DURATION_SECS, MIN_DURATION_SECS, MIN_RACERS, WINNER_GRACE_MS,
};
use duckrace_core::enums::RacePhase;
use duckrace_core::events::RaceEvent;
use duckrace_core::roster::Duck;
use duckrace_core::state::RaceSnapshot;

use crate::clock::RaceClock;
use crate::systems;

/// Configuration for a race.
pub struct RaceConfig {
    /// Race duration in seconds, clamped to the configurable range.
    pub duration_secs: f64,
    /// RNG seed. `None` seeds from entropy — every race plays out
    /// differently. `Some` gives exact replay for tests.
    pub seed: Option<u64>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            seed: None,
        }
    }
}

/// The race engine. One instance per race session; restartable.
pub struct RaceEngine {
    ducks: Vec<Duck>,
    phase: RacePhase,
    duration_ms: f64,
    clock: Option<RaceClock>,
    elapsed_ms: f64,
    rng: ChaCha8Rng,
    winner_id: Option<u32>,
    winner_elapsed_ms: Option<f64>,
    /// Wall-clock deadline after which a declared winner ends the race
    /// even if trailing ducks are still unranked.
    grace_deadline_ms: Option<f64>,
    events: Vec<RaceEvent>,
}

impl RaceEngine {
    /// Create an engine over the given roster. The roster order is
    /// display order and also the tie-break order for ranks.
    pub fn new(ducks: Vec<Duck>, config: RaceConfig) -> Self {
        let duration_secs = config
            .duration_secs
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            ducks,
            phase: RacePhase::Idle,
            duration_ms: duration_secs * 1000.0,
            clock: None,
            elapsed_ms: 0.0,
            rng,
            winner_id: None,
            winner_elapsed_ms: None,
            grace_deadline_ms: None,
            events: Vec::new(),
        }
    }

    /// Start (or restart) the race at the given wall-clock time.
    ///
    /// A roster below the minimum size is a silent no-op: the engine
    /// stays in its current phase and `false` tells the caller.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.ducks.len() < MIN_RACERS {
            return false;
        }

        for duck in &mut self.ducks {
            duck.reset_for_race(&mut self.rng);
        }

        self.phase = RacePhase::Running;
        self.clock = Some(RaceClock::start(now_ms));
        self.elapsed_ms = 0.0;
        self.winner_id = None;
        self.winner_elapsed_ms = None;
        self.grace_deadline_ms = None;
        self.events.clear();
        true
    }

    /// Advance the simulation by one tick and return the snapshot.
    ///
    /// Outside the `Running` phase this mutates nothing and returns the
    /// current state, so ticking after `stop()` is harmless.
    pub fn tick(&mut self, now_ms: f64) -> RaceSnapshot {
        if self.phase != RacePhase::Running {
            return self.snapshot();
        }

        // The clock is always present while Running.
        let timing = match self.clock.as_mut() {
            Some(clock) => clock.advance(now_ms),
            None => return self.snapshot(),
        };
        self.elapsed_ms = timing.elapsed_ms;

        // Leader position from pre-update positions, shared by the
        // state machine and the rubber band.
        let leader_progress = self
            .ducks
            .iter()
            .map(|d| d.progress)
            .fold(0.0, f64::max);

        systems::behavior::run(
            &mut self.ducks,
            leader_progress,
            &timing,
            &mut self.rng,
            &mut self.events,
        );
        systems::movement::run(
            &mut self.ducks,
            leader_progress,
            &timing,
            self.duration_ms,
            &mut self.rng,
        );

        if let Some(winner_id) =
            systems::completion::run(&mut self.ducks, timing.elapsed_ms, &mut self.events)
        {
            self.winner_id = Some(winner_id);
            self.winner_elapsed_ms = Some(timing.elapsed_ms);
            self.grace_deadline_ms = Some(timing.now_ms + WINNER_GRACE_MS);
        }

        let all_ranked = self.ducks.iter().all(Duck::is_finished);
        let grace_over = self
            .grace_deadline_ms
            .is_some_and(|deadline| timing.now_ms >= deadline);
        if all_ranked || grace_over {
            self.phase = RacePhase::Finished;
            self.events.push(RaceEvent::RaceFinished {
                elapsed_ms: timing.elapsed_ms,
            });
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.ducks,
            self.phase,
            self.elapsed_ms,
            self.winner_id,
            self.winner_elapsed_ms,
            events,
        )
    }

    /// Cancel the race. Idempotent, allowed from any phase; guarantees
    /// no further tick mutates any duck.
    pub fn stop(&mut self) {
        self.phase = RacePhase::Cancelled;
    }

    /// Current state without advancing the simulation. Pending events
    /// are left queued for the next tick.
    pub fn snapshot(&self) -> RaceSnapshot {
        systems::snapshot::build_snapshot(
            &self.ducks,
            self.phase,
            self.elapsed_ms,
            self.winner_id,
            self.winner_elapsed_ms,
            Vec::new(),
        )
    }

    /// Current session phase.
    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    /// Read-only roster access.
    pub fn ducks(&self) -> &[Duck] {
        &self.ducks
    }

    /// Configured duration in milliseconds (after clamping).
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// The winning duck, once rank 1 has been assigned.
    pub fn winner(&self) -> Option<&Duck> {
        let id = self.winner_id?;
        self.ducks.iter().find(|d| d.id == id)
    }

    /// Race clock value at the moment the winner finished (ms).
    pub fn winner_elapsed_ms(&self) -> Option<f64> {
        self.winner_elapsed_ms
    }
}
