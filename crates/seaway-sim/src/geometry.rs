//! Collision geometry — CPA/TCPA prediction and bearing math.
//!
//! Pure functions over `glam::DVec2` under linear constant-velocity
//! extrapolation. Headings use the compass convention throughout:
//! 0 = North, clockwise, so a positive relative bearing is to starboard.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use seaway_core::constants::RELATIVE_SPEED_EPS_SQ;
use seaway_core::types::Position;

/// Closest point of approach between two constant-velocity tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpaResult {
    /// Separation at the closest point, meters. Always >= 0.
    pub distance: f64,
    /// Time until the closest point, seconds. Negative when the closest
    /// point is already past; `f64::INFINITY` when the relative velocity
    /// is near zero (parallel courses — no future conflict regardless of
    /// distance).
    pub time: f64,
}

/// Compute CPA distance and TCPA for two position/velocity pairs.
///
/// Deterministic and side-effect free; numerically stable near zero
/// relative speed (guarded by `RELATIVE_SPEED_EPS_SQ`).
pub fn cpa_tcpa(pos_a: DVec2, vel_a: DVec2, pos_b: DVec2, vel_b: DVec2) -> CpaResult {
    let r0 = pos_b - pos_a;
    let v_rel = vel_b - vel_a;
    let denom = v_rel.length_squared();

    if denom < RELATIVE_SPEED_EPS_SQ {
        return CpaResult {
            distance: r0.length(),
            time: f64::INFINITY,
        };
    }

    let time = -r0.dot(v_rel) / denom;
    let distance = (r0 + v_rel * time).length();
    CpaResult { distance, time }
}

/// Minimum separation from now onward: the CPA distance when the closest
/// point still lies ahead, otherwise the current separation (diverging or
/// parallel pairs never get closer than they are). Used by the maneuver
/// planner to score candidates.
pub fn min_separation(pos_a: DVec2, vel_a: DVec2, pos_b: DVec2, vel_b: DVec2) -> f64 {
    let cpa = cpa_tcpa(pos_a, vel_a, pos_b, vel_b);
    if cpa.time.is_finite() && cpa.time > 0.0 {
        cpa.distance
    } else {
        (pos_b - pos_a).length()
    }
}

/// Velocity vector for a compass heading and speed.
pub fn velocity_of(heading: f64, speed: f64) -> DVec2 {
    DVec2::new(speed * heading.sin(), speed * heading.cos())
}

/// Convert a `Position` to a vector.
pub fn to_dvec(position: &Position) -> DVec2 {
    DVec2::new(position.x, position.y)
}

/// Normalize a heading into [0, 2π).
pub fn normalize_heading(heading: f64) -> f64 {
    heading.rem_euclid(TAU)
}

/// Wrap an angle difference into (-π, π].
pub fn wrap_signed(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Compass bearing from one point to another.
pub fn heading_to(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.x.atan2(d.y).rem_euclid(TAU)
}

/// Relative bearing of a target as seen from a vessel: (-π, π],
/// 0 = dead ahead, positive = starboard, negative = port.
pub fn relative_bearing(from_pos: DVec2, from_heading: f64, to_pos: DVec2) -> f64 {
    wrap_signed(heading_to(from_pos, to_pos) - from_heading)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_cpa_head_on_zero_offset() {
        // A at origin heading east at 5 m/s, B 100 m east heading west at 5 m/s.
        let result = cpa_tcpa(
            DVec2::ZERO,
            velocity_of(FRAC_PI_2, 5.0),
            DVec2::new(100.0, 0.0),
            velocity_of(3.0 * FRAC_PI_2, 5.0),
        );
        assert!(result.distance < 1e-9, "collision course, got {}", result.distance);
        assert!((result.time - 10.0).abs() < 1e-9, "meet in 10 s, got {}", result.time);
    }

    #[test]
    fn test_cpa_crossing_with_offset() {
        // A heading north, B crossing east-to-west 50 m north with 10 m of
        // lateral miss built in.
        let result = cpa_tcpa(
            DVec2::ZERO,
            velocity_of(0.0, 5.0),
            DVec2::new(60.0, 50.0),
            velocity_of(3.0 * FRAC_PI_2, 5.0),
        );
        assert!(result.time > 0.0);
        assert!(result.distance > 0.0);
    }

    #[test]
    fn test_cpa_parallel_is_infinite() {
        // Same heading, same speed: relative velocity zero.
        let result = cpa_tcpa(
            DVec2::ZERO,
            velocity_of(0.0, 5.0),
            DVec2::new(30.0, 0.0),
            velocity_of(0.0, 5.0),
        );
        assert!(result.time.is_infinite());
        assert!((result.distance - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_cpa_diverging_is_negative() {
        // B directly ahead of A, both heading away from each other.
        let result = cpa_tcpa(
            DVec2::ZERO,
            velocity_of(std::f64::consts::PI, 5.0),
            DVec2::new(0.0, 50.0),
            velocity_of(0.0, 5.0),
        );
        assert!(result.time < 0.0, "closest point already past, got {}", result.time);
    }

    #[test]
    fn test_cpa_is_pure() {
        let pos_a = DVec2::new(3.0, -7.0);
        let vel_a = velocity_of(1.2, 4.5);
        let pos_b = DVec2::new(-40.0, 25.0);
        let vel_b = velocity_of(4.0, 6.5);
        let first = cpa_tcpa(pos_a, vel_a, pos_b, vel_b);
        let second = cpa_tcpa(pos_a, vel_a, pos_b, vel_b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_min_separation_clamps_diverging() {
        let pos_a = DVec2::ZERO;
        let vel_a = velocity_of(std::f64::consts::PI, 5.0);
        let pos_b = DVec2::new(0.0, 50.0);
        let vel_b = velocity_of(0.0, 5.0);
        // Diverging pair never gets closer than it is now.
        assert!((min_separation(pos_a, vel_a, pos_b, vel_b) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_bearing_sides() {
        // Heading north: a target due east is 90° to starboard.
        let rel = relative_bearing(DVec2::ZERO, 0.0, DVec2::new(10.0, 0.0));
        assert!((rel - FRAC_PI_2).abs() < 1e-12);
        // A target due west is 90° to port.
        let rel = relative_bearing(DVec2::ZERO, 0.0, DVec2::new(-10.0, 0.0));
        assert!((rel + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_of_compass() {
        let v = velocity_of(0.0, 5.0);
        assert!((v.x).abs() < 1e-12 && (v.y - 5.0).abs() < 1e-12, "north is +y");
        let v = velocity_of(FRAC_PI_2, 5.0);
        assert!((v.x - 5.0).abs() < 1e-12 && (v.y).abs() < 1e-12, "east is +x");
    }

    #[test]
    fn test_wrap_signed_range() {
        assert!((wrap_signed(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
        assert!((wrap_signed(-3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((wrap_signed(std::f64::consts::PI) - std::f64::consts::PI).abs() < 1e-12);
    }
}
