//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// COLREGs encounter category for a vessel pair.
///
/// Classification precedence when bearing arcs are ambiguous is
/// HeadOn > Overtaking > Crossing; head-on carries the strictest
/// mutual-avoidance obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    /// Both vessels see each other nearly dead ahead on reciprocal courses.
    HeadOn,
    /// Courses cross; the vessel holding the other to starboard gives way.
    Crossing,
    /// One vessel approaches from abaft the other's beam.
    Overtaking,
    /// Outside conflict thresholds or diverging courses.
    NoConflict,
}

/// Right-of-way role for a vessel in the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Must maneuver to open the closest point of approach.
    GiveWay,
    /// Must hold course and speed.
    StandOn,
    /// Not party to any conflict this tick.
    #[default]
    Uninvolved,
}

impl Role {
    /// Safety-conservative merge: GiveWay overrides StandOn overrides
    /// Uninvolved. A vessel never suppresses a required avoidance action
    /// because of an unrelated encounter.
    pub fn merge(self, other: Role) -> Role {
        match (self, other) {
            (Role::GiveWay, _) | (_, Role::GiveWay) => Role::GiveWay,
            (Role::StandOn, _) | (_, Role::StandOn) => Role::StandOn,
            _ => Role::Uninvolved,
        }
    }
}

/// Simulation lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Initialized, not yet stepped.
    #[default]
    Idle,
    /// Per-tick processing active.
    Running,
    /// Two vessels closed inside the collision distance. Terminal.
    Collided,
    /// Tick limit reached or every routed vessel arrived. Terminal.
    Completed,
}

/// How the stepper judges an actual (not predicted) collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CollisionPolicy {
    /// Collision when separation drops below the sum of both safety radii.
    #[default]
    SummedRadii,
    /// Collision when separation drops below a fixed range in meters.
    FixedRange { range: f64 },
}
