//! Kinematic integration system.
//!
//! Applies planned commands (clamped to each vessel's per-tick limits),
//! advances positions by heading and speed over the tick duration, and
//! flags arrivals. Commands were computed from the pre-move snapshot, so
//! the iteration order across vessels is immaterial.

use std::collections::BTreeMap;

use hecs::World;

use seaway_core::components::{Kinematics, Navigation, Performance, VesselInfo};
use seaway_core::events::SimEvent;
use seaway_core::state::ManeuverView;
use seaway_core::types::Position;

use crate::engine::SimConfig;
use crate::geometry;

/// Apply commands and integrate all vessels by one tick.
pub fn run(
    world: &mut World,
    commands: &BTreeMap<u32, ManeuverView>,
    config: &SimConfig,
) -> Vec<SimEvent> {
    let dt = config.dt;
    let mut events = Vec::new();

    for (_entity, (info, pos, kin, perf, nav)) in world.query_mut::<(
        &VesselInfo,
        &mut Position,
        &mut Kinematics,
        &Performance,
        Option<&mut Navigation>,
    )>() {
        if let Some(command) = commands.get(&info.id) {
            let max_turn = perf.max_turn_rate * dt;
            let max_dv = perf.max_accel * dt;
            kin.heading = geometry::normalize_heading(
                kin.heading + command.heading_delta.clamp(-max_turn, max_turn),
            );
            kin.speed = (kin.speed + command.speed_delta.clamp(-max_dv, max_dv)).max(0.0);
        }

        let arrived = nav.as_ref().is_some_and(|n| n.arrived);
        if !arrived {
            let vel = geometry::velocity_of(kin.heading, kin.speed);
            pos.x += vel.x * dt;
            pos.y += vel.y * dt;
        }

        if let Some(nav) = nav {
            if !nav.arrived && pos.range_to(&nav.destination) < config.arrival_threshold {
                nav.arrived = true;
                kin.speed = 0.0;
                events.push(SimEvent::VesselArrived { vessel: info.id });
            }
        }
    }

    events
}
