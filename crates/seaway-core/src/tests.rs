#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::TickReport;
    use crate::types::{Position, SimTime};

    /// Verify the public enums round-trip through serde_json.
    #[test]
    fn test_encounter_kind_serde() {
        let variants = vec![
            EncounterKind::HeadOn,
            EncounterKind::Crossing,
            EncounterKind::Overtaking,
            EncounterKind::NoConflict,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EncounterKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_role_serde() {
        let variants = vec![Role::GiveWay, Role::StandOn, Role::Uninvolved];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_sim_phase_serde() {
        let variants = vec![
            SimPhase::Idle,
            SimPhase::Running,
            SimPhase::Collided,
            SimPhase::Completed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SimPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_collision_policy_serde() {
        let variants = vec![
            CollisionPolicy::SummedRadii,
            CollisionPolicy::FixedRange { range: 25.0 },
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: CollisionPolicy = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let variants = vec![
            SimEvent::ManeuverApplied {
                vessel: 1,
                heading_delta: 0.05,
                speed_delta: 0.0,
            },
            SimEvent::ManeuverInsufficient {
                vessel: 1,
                min_cpa: 12.0,
            },
            SimEvent::VesselArrived { vessel: 2 },
            SimEvent::Collision {
                a: 0,
                b: 1,
                separation: 4.5,
            },
            SimEvent::RunCompleted { tick: 500 },
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_tick_report_serde_roundtrip() {
        let report = TickReport::default();
        let json = serde_json::to_string(&report).unwrap();
        let back: TickReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    // ---- Role aggregation ----

    #[test]
    fn test_role_merge_give_way_wins() {
        assert_eq!(Role::GiveWay.merge(Role::StandOn), Role::GiveWay);
        assert_eq!(Role::StandOn.merge(Role::GiveWay), Role::GiveWay);
        assert_eq!(Role::Uninvolved.merge(Role::GiveWay), Role::GiveWay);
        assert_eq!(Role::StandOn.merge(Role::Uninvolved), Role::StandOn);
        assert_eq!(Role::Uninvolved.merge(Role::Uninvolved), Role::Uninvolved);
    }

    // ---- Position math ----

    #[test]
    fn test_bearing_compass_convention() {
        let origin = Position::new(0.0, 0.0);
        // Due north
        assert!((origin.bearing_to(&Position::new(0.0, 10.0))).abs() < 1e-12);
        // Due east
        assert!((origin.bearing_to(&Position::new(10.0, 0.0)) - FRAC_PI_2).abs() < 1e-12);
        // Due south
        assert!((origin.bearing_to(&Position::new(0.0, -10.0)) - PI).abs() < 1e-12);
        // Due west
        assert!((origin.bearing_to(&Position::new(-10.0, 0.0)) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_range_to() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance(0.5);
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 15.0).abs() < 1e-9);
    }
}
