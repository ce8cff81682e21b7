//! The race simulation engine.
//!
//! `RaceEngine` owns the duck roster, the race clock, and a single
//! seeded RNG, runs the per-tick system pipeline, and produces
//! `RaceSnapshot`s. Completely headless (no UI dependency), enabling
//! deterministic testing.

pub mod clock;
pub mod engine;
pub mod systems;

pub use duckrace_core as core;

#[cfg(test)]
mod tests;
