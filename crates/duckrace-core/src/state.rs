//! Race snapshot — the complete visible state handed to collaborators
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{DuckState, RacePhase};
use crate::events::RaceEvent;
use crate::roster::{Duck, DuckStyle};

/// Complete race state returned from each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub phase: RacePhase,
    /// Time since race start (ms).
    pub elapsed_ms: f64,
    /// All ducks in display order.
    pub ducks: Vec<DuckView>,
    /// The rank-1 duck, once known.
    pub winner: Option<DuckView>,
    /// Race clock value at the moment the winner finished (ms).
    pub winner_elapsed_ms: Option<f64>,
    /// Number of ducks holding a rank.
    pub finisher_count: u32,
    /// Events since the previous tick.
    pub events: Vec<RaceEvent>,
}

impl RaceSnapshot {
    /// Whether the race has been declared over.
    pub fn is_finished(&self) -> bool {
        self.phase == RacePhase::Finished
    }
}

/// Per-duck view for the rendering collaborator: progress drives
/// horizontal position, state selects the animation, rank the badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuckView {
    pub id: u32,
    pub name: String,
    pub progress: f64,
    pub speed: f64,
    pub state: DuckState,
    pub rank: Option<u32>,
    pub style: DuckStyle,
}

impl From<&Duck> for DuckView {
    fn from(duck: &Duck) -> Self {
        Self {
            id: duck.id,
            name: duck.name.clone(),
            progress: duck.progress,
            speed: duck.speed,
            state: duck.state,
            rank: duck.rank,
            style: duck.style.clone(),
        }
    }
}
