//! Behavioral logic for racing ducks.
//!
//! Implements the per-duck state machine, the rubber-band catch-up
//! policy, and the kinematics math. Pure functions on plain data —
//! no engine dependency, so every rule is testable in isolation.

pub mod fsm;
pub mod kinematics;
pub mod rubber_band;

pub use duckrace_core as core;
