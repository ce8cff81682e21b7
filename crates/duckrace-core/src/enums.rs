//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Behavioral state governing a duck's target speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuckState {
    /// Waiting at the start line; only before reaction time elapses.
    #[default]
    Idle,
    /// Normal waddling pace with sine-wave oscillation.
    Running,
    /// Short burst of speed.
    Boosting,
    /// Slowed down, recovering.
    Tired,
    /// Fully stopped for the duration of the stumble.
    Tripped,
}

/// Race session state (top-level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RacePhase {
    /// No race in progress; the roster may be edited.
    #[default]
    Idle,
    /// Ticks are being processed.
    Running,
    /// Every duck holds a rank, or the winner grace window closed.
    Finished,
    /// Stopped by the caller; no further ticks mutate anything.
    Cancelled,
}
