//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Decision logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Stable identity of a vessel for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselInfo {
    /// Unique id assigned by the caller at initialization.
    pub id: u32,
    /// Display name for logs and reports.
    pub name: String,
}

/// Current course and speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Heading in radians, [0, 2π), 0 = North, clockwise.
    pub heading: f64,
    /// Speed over ground in m/s, never negative.
    pub speed: f64,
}

/// Maneuvering limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Performance {
    /// Maximum turn rate in rad/s.
    pub max_turn_rate: f64,
    /// Maximum acceleration magnitude in m/s².
    pub max_accel: f64,
}

/// Minimum-separation bubble around the vessel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SafetyZone {
    /// Safety radius in meters, strictly positive.
    pub radius: f64,
}

/// Destination routing. Only attached to vessels given a destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Navigation {
    pub destination: Position,
    /// Set once the vessel closes within the arrival threshold; the vessel
    /// then stops and becomes a stationary obstacle.
    pub arrived: bool,
}

/// Helm state for course-resume steering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Helm {
    /// Consecutive ticks this vessel has been clear of every encounter.
    /// Steering back toward the destination only resumes once this exceeds
    /// the configured hysteresis, preventing give-way/resume oscillation.
    pub ticks_clear: u32,
}
