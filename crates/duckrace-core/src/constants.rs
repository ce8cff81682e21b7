//! Simulation constants and tuning parameters.

// --- Track ---

/// Track length in progress units. A duck finishes when it reaches this.
pub const TRACK_LENGTH: f64 = 100.0;

/// Nominal distance a multiplier-1.0 duck covers over one race duration.
/// Slightly longer than the track so most ducks finish near the
/// configured duration with slack left for variance.
pub const NOMINAL_DISTANCE: f64 = 105.0;

/// Slack subtracted from the race duration when deriving the base
/// velocity (ms).
pub const DURATION_SLACK_MS: f64 = 500.0;

// --- Roster ---

/// Minimum number of ducks for a valid race.
pub const MIN_RACERS: usize = 2;

/// Practical upper bound on roster size.
pub const MAX_RACERS: usize = 50;

/// Number of distinct lane badge styles before the palette repeats.
pub const LANE_PALETTE_SIZE: usize = 10;

// --- Race duration ---

/// Shortest configurable race duration (seconds).
pub const MIN_DURATION_SECS: f64 = 5.0;

/// Longest configurable race duration (seconds).
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Default race duration (seconds).
pub const DEFAULT_DURATION_SECS: f64 = 10.0;

// --- Clock ---

/// Maximum integration step per tick (ms), regardless of the actual
/// wall-clock gap. Bounds the jump after a pause or stall.
pub const MAX_TICK_DELTA_MS: f64 = 50.0;

/// Real-time grace window after the winner finishes before the race is
/// declared over (ms), so trailing near-simultaneous finishes are
/// still observed.
pub const WINNER_GRACE_MS: f64 = 1000.0;

// --- Reaction ---

/// Upper bound on the per-race reaction time roll (ms).
pub const REACTION_TIME_MAX_MS: f64 = 800.0;

/// Upper bound on the per-duck waddle phase offset.
pub const PHASE_OFFSET_MAX: f64 = 100.0;

// --- State machine chances ---

/// Baseline chance to start boosting on a settle roll.
pub const BOOST_CHANCE_BASE: f64 = 0.005;

/// Baseline chance to trip on a settle roll.
pub const TRIP_CHANCE_BASE: f64 = 0.008;

/// Chance to tire on a settle roll (position-independent).
pub const TIRED_CHANCE: f64 = 0.005;

/// Gap to the leader beyond which a duck counts as far behind.
pub const BEHIND_GAP_THRESHOLD: f64 = 15.0;

/// Boost chance for a far-behind duck (desperate catch-up).
pub const BOOST_CHANCE_BEHIND: f64 = 0.02;

/// Trip chance for a far-behind duck.
pub const TRIP_CHANCE_BEHIND: f64 = 0.001;

/// Progress past which final-stretch nerves kick in.
pub const FINAL_STRETCH_PROGRESS: f64 = 85.0;

/// Boost chance in the final stretch.
pub const BOOST_CHANCE_FINAL: f64 = 0.03;

/// Trip chance in the final stretch.
pub const TRIP_CHANCE_FINAL: f64 = 0.02;

// --- State durations (ms) ---

pub const BOOST_DURATION_MIN_MS: f64 = 600.0;
pub const BOOST_DURATION_SPAN_MS: f64 = 800.0;
pub const TIRED_DURATION_MIN_MS: f64 = 800.0;
pub const TIRED_DURATION_SPAN_MS: f64 = 800.0;
pub const TRIP_DURATION_MIN_MS: f64 = 400.0;
pub const TRIP_DURATION_SPAN_MS: f64 = 400.0;

// --- Rubber band ---

/// Gap beyond which the catch-up bonus saturates.
pub const RUBBER_BAND_GAP_CAP: f64 = 30.0;

/// Speed bonus per unit of gap to the leader.
pub const RUBBER_BAND_PER_UNIT: f64 = 0.01;

/// Drag applied to the sole leader once the race is underway.
pub const LEADER_DRAG_FACTOR: f64 = 0.96;

// --- Kinematics ---

/// Target speed multiplier while boosting.
pub const BOOST_MULTIPLIER: f64 = 3.5;

/// Target speed multiplier while tired.
pub const TIRED_MULTIPLIER: f64 = 0.4;

/// Divisor applied to the wall clock for the waddle oscillation (ms).
pub const WADDLE_PERIOD_MS: f64 = 600.0;

/// Amplitude of the waddle oscillation around multiplier 1.0.
pub const WADDLE_AMPLITUDE: f64 = 0.2;

/// Lower bound of the per-tick turbulence flux.
pub const FLUX_MIN: f64 = 0.9;

/// Width of the per-tick turbulence flux band.
pub const FLUX_SPAN: f64 = 0.2;

/// Exponential smoothing factor while accelerating (speed below target).
pub const ACCEL_SMOOTHING: f64 = 0.08;

/// Exponential smoothing factor while decelerating. Lower than the
/// acceleration factor, giving snappy speed-ups and gentle slow-downs.
pub const DECEL_SMOOTHING: f64 = 0.04;
