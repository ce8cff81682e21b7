//! Snapshot system: builds the `RaceSnapshot` handed to collaborators.
//!
//! This system is read-only — it never modifies the roster.

use duckrace_core::enums::RacePhase;
use duckrace_core::events::RaceEvent;
use duckrace_core::roster::Duck;
use duckrace_core::state::{DuckView, RaceSnapshot};

/// Build a complete snapshot from the current race state.
pub fn build_snapshot(
    ducks: &[Duck],
    phase: RacePhase,
    elapsed_ms: f64,
    winner_id: Option<u32>,
    winner_elapsed_ms: Option<f64>,
    events: Vec<RaceEvent>,
) -> RaceSnapshot {
    let winner = winner_id
        .and_then(|id| ducks.iter().find(|d| d.id == id))
        .map(DuckView::from);

    RaceSnapshot {
        phase,
        elapsed_ms,
        ducks: ducks.iter().map(DuckView::from).collect(),
        winner,
        winner_elapsed_ms,
        finisher_count: ducks.iter().filter(|d| d.is_finished()).count() as u32,
        events,
    }
}
