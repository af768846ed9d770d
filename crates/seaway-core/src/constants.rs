//! Simulation constants and tuning defaults.

use std::f64::consts::PI;

// --- Encounter geometry ---

/// Half-angle of the head-on arc: both vessels must see each other within
/// this of dead ahead for a head-on classification.
pub const HEAD_ON_ARC: f64 = 12.5 * PI / 180.0;

/// A contact observed beyond this angle off the bow is abaft the beam
/// (the COLREGs 22.5°-abaft-the-beam overtaking sector).
pub const STERN_ARC: f64 = 112.5 * PI / 180.0;

/// Relative speed squared below which two courses are treated as parallel
/// (no future closest point — no conflict regardless of distance).
pub const RELATIVE_SPEED_EPS_SQ: f64 = 1e-9;

/// Separation below which two vessels are treated as coincident, forcing
/// an immediate-collision encounter with zero CPA and TCPA.
pub const COINCIDENT_SEPARATION: f64 = 1e-6;

// --- Configuration defaults ---

/// Default tick duration in seconds.
pub const DEFAULT_TICK_SECS: f64 = 1.0;

/// Default safe CPA distance in meters.
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 50.0;

/// Default lookahead horizon in seconds (max TCPA considered).
pub const DEFAULT_LOOKAHEAD_SECS: f64 = 600.0;

/// Default heading-candidate increment in radians (1°).
pub const DEFAULT_TURN_INCREMENT: f64 = PI / 180.0;

/// Default speed-candidate increment in m/s.
pub const DEFAULT_SPEED_INCREMENT: f64 = 0.5;

/// Default tick limit before a run completes.
pub const DEFAULT_TICK_LIMIT: u64 = 10_000;

/// Default arrival threshold in meters.
pub const DEFAULT_ARRIVAL_THRESHOLD: f64 = 50.0;

/// Consecutive encounter-free ticks before a vessel resumes steering
/// toward its destination.
pub const DEFAULT_RESUME_CLEAR_TICKS: u32 = 10;

// --- Vessel defaults ---

/// Default maximum turn rate in rad/s (3°/s).
pub const DEFAULT_MAX_TURN_RATE: f64 = 3.0 * PI / 180.0;

/// Default maximum acceleration in m/s².
pub const DEFAULT_MAX_ACCEL: f64 = 0.2;

/// Default safety radius in meters.
pub const DEFAULT_SAFETY_RADIUS: f64 = 10.0;
