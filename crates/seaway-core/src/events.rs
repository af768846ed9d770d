//! Events emitted by the simulation for external logging and display.

use serde::{Deserialize, Serialize};

/// Per-tick event stream included in each `TickReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A give-way vessel was issued an avoidance command.
    ManeuverApplied {
        vessel: u32,
        heading_delta: f64,
        speed_delta: f64,
    },
    /// The best candidate under the vessel's per-tick limits still leaves
    /// some encounter below the safety threshold; applied best-effort.
    ManeuverInsufficient { vessel: u32, min_cpa: f64 },
    /// A routed vessel closed within the arrival threshold and stopped.
    VesselArrived { vessel: u32 },
    /// Two vessels closed inside the collision distance; run terminated.
    Collision { a: u32, b: u32, separation: f64 },
    /// Tick limit reached or all routed vessels arrived.
    RunCompleted { tick: u64 },
}
