//! Tick report — the complete visible state returned to the caller each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Everything the external driver sees after a tick: the new vessel
/// snapshot, the encounter set evaluated, the role assignment, the
/// maneuvers issued, and the stepper's resulting phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub time: SimTime,
    pub phase: SimPhase,
    pub vessels: Vec<VesselView>,
    /// Conflicting pairs only, most urgent first (ascending TCPA, then CPA).
    pub encounters: Vec<Encounter>,
    /// Aggregated per-vessel roles, ascending id; GiveWay wins aggregation.
    pub roles: Vec<RoleView>,
    /// One command per give-way vessel that maneuvered this tick.
    pub maneuvers: Vec<ManeuverView>,
    pub events: Vec<SimEvent>,
    /// Present exactly when this tick transitioned the run to Collided.
    pub collision: Option<CollisionView>,
}

/// A vessel's kinematic state as of this tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VesselView {
    pub id: u32,
    pub name: String,
    pub position: Position,
    /// Heading in radians, [0, 2π), 0 = North, clockwise.
    pub heading: f64,
    /// Speed in m/s.
    pub speed: f64,
    pub safety_radius: f64,
    pub destination: Option<Position>,
    pub arrived: bool,
}

/// A conflicting vessel pair, recomputed fresh every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    /// Lower vessel id of the pair.
    pub a: u32,
    /// Higher vessel id of the pair.
    pub b: u32,
    pub kind: EncounterKind,
    /// Predicted distance at the closest point of approach (meters).
    pub cpa: f64,
    /// Time until CPA in seconds.
    pub tcpa: f64,
    /// Relative bearing of b as seen from a, (-π, π]; positive = starboard.
    pub bearing_ab: f64,
    /// Relative bearing of a as seen from b.
    pub bearing_ba: f64,
    /// Actual separation right now (meters).
    pub separation: f64,
}

/// A vessel's aggregated role for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleView {
    pub vessel: u32,
    pub role: Role,
}

/// The command issued to a give-way vessel for the upcoming tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManeuverView {
    pub vessel: u32,
    /// Commanded heading change in radians; positive = starboard.
    pub heading_delta: f64,
    /// Commanded speed change in m/s (non-positive in practice).
    pub speed_delta: f64,
    /// Minimum resulting CPA across all of this vessel's encounters.
    pub min_cpa: f64,
    /// Whether every encounter resolves at or above the safety threshold.
    pub sufficient: bool,
}

/// The pair that ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionView {
    pub a: u32,
    pub b: u32,
    pub separation: f64,
}
