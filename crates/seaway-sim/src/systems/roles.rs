//! Role assigner: resolves give-way/stand-on per encounter and aggregates
//! a single role per vessel for the tick.

use std::collections::BTreeMap;

use seaway_core::constants::STERN_ARC;
use seaway_core::enums::{EncounterKind, Role};
use seaway_core::state::Encounter;

use crate::systems::snapshot::VesselState;

/// Roles for (encounter.a, encounter.b), in documented precedence order:
///
/// 1. HeadOn — both give way (each alters course to starboard).
/// 2. Crossing — the vessel holding the other on its own starboard bow
///    gives way; tie falls to the lower id of the pair.
/// 3. Overtaking — the overtaking (astern) vessel gives way regardless
///    of side.
pub fn pair_roles(encounter: &Encounter) -> (Role, Role) {
    match encounter.kind {
        EncounterKind::HeadOn => (Role::GiveWay, Role::GiveWay),
        EncounterKind::Crossing => {
            if on_starboard_bow(encounter.bearing_ab) {
                (Role::GiveWay, Role::StandOn)
            } else if on_starboard_bow(encounter.bearing_ba) {
                (Role::StandOn, Role::GiveWay)
            } else {
                (Role::GiveWay, Role::StandOn)
            }
        }
        EncounterKind::Overtaking => {
            // A relative bearing abaft a's beam means b is astern of a,
            // so b is the overtaking vessel.
            if encounter.bearing_ab.abs() > STERN_ARC {
                (Role::StandOn, Role::GiveWay)
            } else {
                (Role::GiveWay, Role::StandOn)
            }
        }
        EncounterKind::NoConflict => (Role::Uninvolved, Role::Uninvolved),
    }
}

/// Aggregate per-vessel roles over the encounter set. Every snapshot vessel
/// gets an entry; GiveWay wins when a vessel sits in several encounters.
pub fn assign(snapshot: &[VesselState], encounters: &[Encounter]) -> BTreeMap<u32, Role> {
    let mut roles: BTreeMap<u32, Role> = snapshot
        .iter()
        .map(|s| (s.id, Role::Uninvolved))
        .collect();

    for encounter in encounters {
        let (role_a, role_b) = pair_roles(encounter);
        merge(&mut roles, encounter.a, role_a);
        merge(&mut roles, encounter.b, role_b);
    }

    roles
}

fn merge(roles: &mut BTreeMap<u32, Role>, vessel: u32, role: Role) {
    let entry = roles.entry(vessel).or_default();
    *entry = entry.merge(role);
}

fn on_starboard_bow(relative_bearing: f64) -> bool {
    relative_bearing > 0.0 && relative_bearing < STERN_ARC
}
