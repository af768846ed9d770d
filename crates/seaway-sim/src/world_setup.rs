//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use seaway_core::components::{Helm, Kinematics, Navigation, Performance, SafetyZone, VesselInfo};

use crate::engine::{SimConfig, VesselSpec};
use crate::geometry;

/// Spawn one vessel entity from its validated spec.
pub fn spawn_vessel(world: &mut World, spec: &VesselSpec, config: &SimConfig) -> hecs::Entity {
    let info = VesselInfo {
        id: spec.id,
        name: spec.name.clone(),
    };
    let kinematics = Kinematics {
        heading: geometry::normalize_heading(spec.heading),
        speed: spec.speed,
    };
    let performance = Performance {
        max_turn_rate: spec.max_turn_rate,
        max_accel: spec.max_accel,
    };
    let zone = SafetyZone {
        radius: spec.safety_radius,
    };

    match spec.destination {
        Some(destination) => world.spawn((
            info,
            spec.position,
            kinematics,
            performance,
            zone,
            Navigation {
                destination,
                arrived: false,
            },
            Helm {
                // Start at the hysteresis threshold so an unthreatened vessel
                // steers for its destination from the first tick.
                ticks_clear: config.resume_clear_ticks,
            },
        )),
        None => world.spawn((info, spec.position, kinematics, performance, zone)),
    }
}
