//! Snapshot system: collects the per-tick working state and builds the
//! `TickReport` returned to the caller.
//!
//! Collection is read-only — every decision system works from the same
//! consistent snapshot, so integration order across vessels cannot matter.

use std::collections::BTreeMap;

use hecs::World;

use seaway_core::components::*;
use seaway_core::enums::{Role, SimPhase};
use seaway_core::events::SimEvent;
use seaway_core::state::*;
use seaway_core::types::{Position, SimTime};

/// One vessel's kinematic state as of the start of the tick.
#[derive(Debug, Clone)]
pub struct VesselState {
    pub id: u32,
    pub position: Position,
    pub heading: f64,
    pub speed: f64,
    pub max_turn_rate: f64,
    pub max_accel: f64,
    pub safety_radius: f64,
}

/// Collect the tick's snapshot, sorted by vessel id.
pub fn collect(world: &World) -> Vec<VesselState> {
    let mut states: Vec<VesselState> = world
        .query::<(&VesselInfo, &Position, &Kinematics, &Performance, &SafetyZone)>()
        .iter()
        .map(|(_, (info, pos, kin, perf, zone))| VesselState {
            id: info.id,
            position: *pos,
            heading: kin.heading,
            speed: kin.speed,
            max_turn_rate: perf.max_turn_rate,
            max_accel: perf.max_accel,
            safety_radius: zone.radius,
        })
        .collect();

    states.sort_by_key(|s| s.id);
    states
}

/// Build a complete `TickReport` from the current world state.
pub fn build_report(
    world: &World,
    time: SimTime,
    phase: SimPhase,
    encounters: Vec<Encounter>,
    roles: &BTreeMap<u32, Role>,
    maneuvers: BTreeMap<u32, ManeuverView>,
    events: Vec<SimEvent>,
    collision: Option<CollisionView>,
) -> TickReport {
    let vessels = build_vessels(world);
    let roles = vessels
        .iter()
        .map(|v| RoleView {
            vessel: v.id,
            role: roles.get(&v.id).copied().unwrap_or_default(),
        })
        .collect();

    TickReport {
        time,
        phase,
        vessels,
        encounters,
        roles,
        maneuvers: maneuvers.into_values().collect(),
        events,
        collision,
    }
}

/// Build the vessel views, ascending id.
fn build_vessels(world: &World) -> Vec<VesselView> {
    let mut vessels: Vec<VesselView> = world
        .query::<(
            &VesselInfo,
            &Position,
            &Kinematics,
            &SafetyZone,
            Option<&Navigation>,
        )>()
        .iter()
        .map(|(_, (info, pos, kin, zone, nav))| VesselView {
            id: info.id,
            name: info.name.clone(),
            position: *pos,
            heading: kin.heading,
            speed: kin.speed,
            safety_radius: zone.radius,
            destination: nav.map(|n| n.destination),
            arrived: nav.is_some_and(|n| n.arrived),
        })
        .collect();

    vessels.sort_by_key(|v| v.id);
    vessels
}
