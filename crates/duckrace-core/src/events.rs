//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Race events drained into each tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RaceEvent {
    /// A duck entered a boost burst.
    DuckBoosted { id: u32 },
    /// A duck stumbled and stopped.
    DuckTripped { id: u32 },
    /// A duck crossed the finish line.
    DuckFinished { id: u32, rank: u32, elapsed_ms: f64 },
    /// The first duck finished; the race clock freezes for the summary.
    WinnerDeclared { id: u32, elapsed_ms: f64 },
    /// The race is over (all ranked, or the grace window closed).
    RaceFinished { elapsed_ms: f64 },
}
