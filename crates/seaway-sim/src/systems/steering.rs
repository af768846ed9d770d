//! Destination steering for vessels clear of conflicts.
//!
//! A vessel party to any encounter holds whatever the planner (or its
//! stand-on obligation) dictates. Once it has been clear for the
//! configured number of consecutive ticks it swings back toward its
//! destination, clamped to its per-tick turn limit. The hysteresis stops
//! give-way vessels from oscillating between avoiding and resuming.

use std::collections::BTreeSet;

use hecs::World;

use seaway_core::components::{Helm, Kinematics, Navigation, Performance, VesselInfo};
use seaway_core::types::Position;

use crate::geometry;

/// Update clear-tick counters and steer eligible vessels toward their
/// destinations. Reads only the vessel's own components, so running before
/// integration cannot leak partial-tick state across vessels.
pub fn run(world: &mut World, involved: &BTreeSet<u32>, dt: f64, resume_clear_ticks: u32) {
    for (_entity, (info, pos, kin, perf, nav, helm)) in world.query_mut::<(
        &VesselInfo,
        &Position,
        &mut Kinematics,
        &Performance,
        &Navigation,
        &mut Helm,
    )>() {
        if involved.contains(&info.id) {
            helm.ticks_clear = 0;
            continue;
        }
        helm.ticks_clear = helm.ticks_clear.saturating_add(1);

        if nav.arrived || helm.ticks_clear <= resume_clear_ticks {
            continue;
        }

        let desired =
            geometry::heading_to(geometry::to_dvec(pos), geometry::to_dvec(&nav.destination));
        let delta = geometry::wrap_signed(desired - kin.heading);
        let max_turn = perf.max_turn_rate * dt;
        kin.heading = geometry::normalize_heading(kin.heading + delta.clamp(-max_turn, max_turn));
    }
}
