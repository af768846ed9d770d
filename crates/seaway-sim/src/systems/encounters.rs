//! Encounter classifier: enumerates conflicting vessel pairs and assigns
//! each a COLREGs category from the pair's bearing geometry.

use seaway_core::constants::{COINCIDENT_SEPARATION, HEAD_ON_ARC, STERN_ARC};
use seaway_core::enums::EncounterKind;
use seaway_core::state::Encounter;

use crate::engine::SimConfig;
use crate::geometry;
use crate::systems::snapshot::VesselState;

/// Enumerate the conflicting pairs in the snapshot, most urgent first
/// (ascending TCPA, then CPA).
pub fn enumerate(snapshot: &[VesselState], config: &SimConfig) -> Vec<Encounter> {
    let mut encounters = Vec::new();
    for i in 0..snapshot.len() {
        for j in (i + 1)..snapshot.len() {
            let encounter = classify_pair(&snapshot[i], &snapshot[j], config);
            if encounter.kind != EncounterKind::NoConflict {
                encounters.push(encounter);
            }
        }
    }
    encounters.sort_by(|x, y| {
        x.tcpa
            .total_cmp(&y.tcpa)
            .then_with(|| x.cpa.total_cmp(&y.cpa))
    });
    encounters
}

/// Classify one pair. Always returns; the category is `NoConflict` when the
/// pair is outside the CPA/TCPA thresholds or on a diverging course.
pub fn classify_pair(a: &VesselState, b: &VesselState, config: &SimConfig) -> Encounter {
    let pos_a = geometry::to_dvec(&a.position);
    let pos_b = geometry::to_dvec(&b.position);
    let separation = (pos_b - pos_a).length();

    // Coincident positions: bearings are undefined, the conflict is not
    // hypothetical. Forced head-on with zero CPA and TCPA, maximal priority.
    if separation < COINCIDENT_SEPARATION {
        return Encounter {
            a: a.id,
            b: b.id,
            kind: EncounterKind::HeadOn,
            cpa: 0.0,
            tcpa: 0.0,
            bearing_ab: 0.0,
            bearing_ba: 0.0,
            separation,
        };
    }

    let vel_a = geometry::velocity_of(a.heading, a.speed);
    let vel_b = geometry::velocity_of(b.heading, b.speed);
    let cpa = geometry::cpa_tcpa(pos_a, vel_a, pos_b, vel_b);

    let bearing_ab = geometry::relative_bearing(pos_a, a.heading, pos_b);
    let bearing_ba = geometry::relative_bearing(pos_b, b.heading, pos_a);

    let conflicting = cpa.time.is_finite()
        && cpa.time >= 0.0
        && cpa.time <= config.lookahead
        && cpa.distance < config.proximity_threshold;

    // Precedence: HeadOn > Overtaking > Crossing.
    let kind = if !conflicting {
        EncounterKind::NoConflict
    } else if bearing_ab.abs() <= HEAD_ON_ARC && bearing_ba.abs() <= HEAD_ON_ARC {
        EncounterKind::HeadOn
    } else if bearing_ab.abs() > STERN_ARC || bearing_ba.abs() > STERN_ARC {
        EncounterKind::Overtaking
    } else {
        EncounterKind::Crossing
    };

    Encounter {
        a: a.id,
        b: b.id,
        kind,
        cpa: cpa.distance,
        tcpa: cpa.time,
        bearing_ab,
        bearing_ba,
        separation,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use seaway_core::constants::{DEFAULT_MAX_ACCEL, DEFAULT_MAX_TURN_RATE};
    use seaway_core::types::Position;

    use super::*;

    fn vessel(id: u32, x: f64, y: f64, heading: f64, speed: f64) -> VesselState {
        VesselState {
            id,
            position: Position::new(x, y),
            heading,
            speed,
            max_turn_rate: DEFAULT_MAX_TURN_RATE,
            max_accel: DEFAULT_MAX_ACCEL,
            safety_radius: 5.0,
        }
    }

    fn config() -> SimConfig {
        SimConfig {
            proximity_threshold: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_reciprocal_headings_classify_head_on() {
        let a = vessel(0, 0.0, 0.0, FRAC_PI_2, 5.0);
        let b = vessel(1, 100.0, 0.0, 3.0 * FRAC_PI_2, 5.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::HeadOn);
        assert!(encounter.cpa < 1e-9);
        assert!((encounter.tcpa - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_astern_approach_classifies_overtaking() {
        // A runs up behind B on the same line at higher speed.
        let a = vessel(0, 0.0, 0.0, FRAC_PI_2, 5.0);
        let b = vessel(1, 20.0, 0.0, FRAC_PI_2, 2.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::Overtaking);
    }

    #[test]
    fn test_beam_approach_classifies_crossing() {
        // A heading north, B approaching from starboard on a collision course.
        let a = vessel(0, 0.0, 0.0, 0.0, 5.0);
        let b = vessel(1, 50.0, 50.0, 3.0 * FRAC_PI_2, 5.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::Crossing);
        assert!(encounter.bearing_ab > 0.0, "B should sit to A's starboard");
    }

    #[test]
    fn test_wide_cpa_is_no_conflict() {
        // Reciprocal headings but 200 m of lateral offset.
        let a = vessel(0, 0.0, 0.0, FRAC_PI_2, 5.0);
        let b = vessel(1, 100.0, 200.0, 3.0 * FRAC_PI_2, 5.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::NoConflict);
    }

    #[test]
    fn test_parallel_courses_are_no_conflict_at_any_range() {
        // Side by side inside the threshold, zero relative velocity.
        let a = vessel(0, 0.0, 0.0, 0.0, 5.0);
        let b = vessel(1, 10.0, 0.0, 0.0, 5.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::NoConflict);
        assert!(encounter.tcpa.is_infinite());
    }

    #[test]
    fn test_receding_pair_is_no_conflict() {
        // B dead ahead but both sailing apart: TCPA negative.
        let a = vessel(0, 0.0, 0.0, std::f64::consts::PI, 5.0);
        let b = vessel(1, 0.0, 50.0, 0.0, 5.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::NoConflict);
        assert!(encounter.tcpa < 0.0);
    }

    #[test]
    fn test_coincident_positions_force_immediate_collision() {
        let a = vessel(0, 0.0, 0.0, 0.0, 5.0);
        let b = vessel(1, 0.0, 0.0, FRAC_PI_2, 3.0);
        let encounter = classify_pair(&a, &b, &config());
        assert_eq!(encounter.kind, EncounterKind::HeadOn);
        assert_eq!(encounter.cpa, 0.0);
        assert_eq!(encounter.tcpa, 0.0);
    }

    #[test]
    fn test_enumerate_sorts_most_urgent_first() {
        let a = vessel(0, 0.0, 0.0, FRAC_PI_2, 5.0);
        let b = vessel(1, 200.0, 0.0, 3.0 * FRAC_PI_2, 5.0);
        let c = vessel(2, 0.0, 30.0, FRAC_PI_2, 5.0);
        let d = vessel(3, 100.0, 30.0, 3.0 * FRAC_PI_2, 5.0);
        let encounters = enumerate(&[a, b, c, d], &config());
        assert_eq!(encounters.len(), 2);
        assert!(encounters[0].tcpa <= encounters[1].tcpa);
        assert_eq!((encounters[0].a, encounters[0].b), (2, 3));
    }
}
