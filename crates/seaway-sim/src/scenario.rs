//! Scenario builders — canned encounter geometries and seeded random
//! fleets for tests and external drivers.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use seaway_core::types::Position;

use crate::engine::VesselSpec;
use crate::geometry;

/// Two vessels meeting on reciprocal east/west courses.
pub fn head_on() -> Vec<VesselSpec> {
    vec![
        VesselSpec::new(0, "alpha", Position::new(0.0, 0.0), FRAC_PI_2, 5.0)
            .with_safety_radius(5.0)
            .with_destination(Position::new(300.0, 0.0)),
        VesselSpec::new(1, "bravo", Position::new(100.0, 0.0), 3.0 * FRAC_PI_2, 5.0)
            .with_safety_radius(5.0)
            .with_destination(Position::new(-200.0, 0.0)),
    ]
}

/// A northbound vessel with a westbound vessel crossing from its starboard
/// side on a collision course.
pub fn crossing() -> Vec<VesselSpec> {
    vec![
        VesselSpec::new(0, "alpha", Position::new(0.0, 0.0), 0.0, 5.0)
            .with_safety_radius(5.0)
            .with_destination(Position::new(0.0, 300.0)),
        VesselSpec::new(1, "bravo", Position::new(80.0, 80.0), 3.0 * FRAC_PI_2, 5.0)
            .with_safety_radius(5.0)
            .with_destination(Position::new(-220.0, 80.0)),
    ]
}

/// A fast vessel running up the same line behind a slow one. The short
/// initial gap leaves no room for a 3°/s helm, so both hulls get small-craft
/// turn authority.
pub fn overtaking() -> Vec<VesselSpec> {
    let turn_rate = 10.0_f64.to_radians();
    vec![
        VesselSpec::new(0, "alpha", Position::new(0.0, 0.0), FRAC_PI_2, 5.0)
            .with_safety_radius(5.0)
            .with_limits(turn_rate, 0.5)
            .with_destination(Position::new(400.0, 0.0)),
        VesselSpec::new(1, "bravo", Position::new(20.0, 0.0), FRAC_PI_2, 2.0)
            .with_safety_radius(5.0)
            .with_limits(turn_rate, 0.5)
            .with_destination(Position::new(400.0, 0.0)),
    ]
}

/// Vessels spaced around a circle, each bound for the opposite side, so
/// every track crosses the center region. Same seed, same fleet.
pub fn circle_fleet(seed: u64, count: usize, radius: f64) -> Vec<VesselSpec> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let bearing = i as f64 / count as f64 * TAU + rng.gen_range(-0.05..0.05);
            let position = Position::new(radius * bearing.sin(), radius * bearing.cos());
            let destination = Position::new(-position.x, -position.y);
            let heading = geometry::heading_to(
                geometry::to_dvec(&position),
                geometry::to_dvec(&destination),
            );
            let speed = rng.gen_range(4.0..6.0);

            VesselSpec::new(i as u32, format!("vessel-{i}"), position, heading, speed)
                .with_destination(destination)
        })
        .collect()
}
