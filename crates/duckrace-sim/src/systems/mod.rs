//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod behavior;
pub mod completion;
pub mod movement;
pub mod snapshot;
