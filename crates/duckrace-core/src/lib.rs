//! Core types and definitions for the duck race simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the duck entity model, behavioral states, snapshot views, events,
//! and tuning constants. It has no dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod events;
pub mod roster;
pub mod state;
pub mod types;
