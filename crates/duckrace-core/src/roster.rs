//! The duck entity model.
//!
//! Ducks are plain data; race logic lives in the simulation systems.
//! The roster collaborator creates ducks before a race starts; the
//! engine only resets per-race fields and never creates or destroys
//! entities.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{LANE_PALETTE_SIZE, REACTION_TIME_MAX_MS};
use crate::enums::DuckState;

/// Badge styling for one lane, as the rendering collaborator consumes
/// it (utility class names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuckStyle {
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_border")]
    pub border: String,
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_bg() -> String {
    "bg-yellow-400".into()
}

fn default_border() -> String {
    "border-yellow-600".into()
}

fn default_text() -> String {
    "text-black".into()
}

impl Default for DuckStyle {
    fn default() -> Self {
        Self {
            bg: default_bg(),
            border: default_border(),
            text: default_text(),
        }
    }
}

impl DuckStyle {
    /// Parse styling JSON from the roster collaborator.
    ///
    /// Malformed or missing data is non-fatal: any field that fails to
    /// parse falls back to the default badge style rather than
    /// aborting the race.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

/// Lane badge color palette, cycled by roster index.
const LANE_PALETTE: [(&str, &str, &str); LANE_PALETTE_SIZE] = [
    ("bg-red-500", "border-red-700", "text-white"),
    ("bg-orange-500", "border-orange-700", "text-white"),
    ("bg-yellow-400", "border-yellow-600", "text-black"),
    ("bg-green-500", "border-green-700", "text-white"),
    ("bg-teal-500", "border-teal-700", "text-white"),
    ("bg-cyan-500", "border-cyan-700", "text-white"),
    ("bg-blue-500", "border-blue-700", "text-white"),
    ("bg-indigo-500", "border-indigo-700", "text-white"),
    ("bg-purple-500", "border-purple-700", "text-white"),
    ("bg-pink-500", "border-pink-700", "text-white"),
];

/// Badge style for the duck at the given roster index.
pub fn lane_style(index: usize) -> DuckStyle {
    let (bg, border, text) = LANE_PALETTE[index % LANE_PALETTE.len()];
    DuckStyle {
        bg: bg.into(),
        border: border.into(),
        text: text.into(),
    }
}

/// Complete state for a single duck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duck {
    /// Stable unique id, immutable once created.
    pub id: u32,
    /// Display name, immutable once created.
    pub name: String,
    /// Lane badge styling.
    pub style: DuckStyle,
    /// Position along the track, 0 to 100.
    pub progress: f64,
    /// Smoothed speed multiplier of the base velocity.
    pub speed: f64,
    /// Current behavioral state.
    pub state: DuckState,
    /// Remaining duration of the current state (ms). A new state is
    /// rolled once this decays to zero or below.
    pub state_timer_ms: f64,
    /// Per-race delay before the duck starts moving (ms).
    pub reaction_time_ms: f64,
    /// Constant offset desynchronizing the waddle oscillation.
    /// Assigned once at creation, stable across races.
    pub phase_offset: f64,
    /// Final rank, assigned exactly once when progress first reaches
    /// the finish line.
    pub rank: Option<u32>,
}

impl Duck {
    /// Create a new duck. `phase_offset` is rolled by the roster at
    /// creation time and persists across races.
    pub fn new(id: u32, name: impl Into<String>, phase_offset: f64) -> Self {
        Self {
            id,
            name: name.into(),
            style: DuckStyle::default(),
            progress: 0.0,
            speed: 0.0,
            state: DuckState::Idle,
            state_timer_ms: 0.0,
            reaction_time_ms: 0.0,
            phase_offset,
            rank: None,
        }
    }

    /// Reset per-race fields and re-roll the reaction time. Identity,
    /// styling, and phase offset survive across races.
    pub fn reset_for_race<R: Rng>(&mut self, rng: &mut R) {
        self.progress = 0.0;
        self.speed = 0.0;
        self.state = DuckState::Idle;
        self.state_timer_ms = 0.0;
        self.reaction_time_ms = rng.gen::<f64>() * REACTION_TIME_MAX_MS;
        self.rank = None;
    }

    /// Whether the duck has crossed the finish line.
    pub fn is_finished(&self) -> bool {
        self.rank.is_some()
    }
}
