//! Maneuver planner: computes one bounded corrective command per give-way
//! vessel, evaluated against every encounter that vessel is party to.
//!
//! Candidates are scored against the tick's snapshot with all partners
//! assumed to hold course; a vessel's single command must satisfy all of
//! its encounters at once, never trading one off against another.

use std::collections::BTreeMap;

use glam::DVec2;
use tracing::{debug, warn};

use seaway_core::enums::Role;
use seaway_core::state::{Encounter, ManeuverView};

use crate::engine::SimConfig;
use crate::geometry;
use crate::systems::snapshot::VesselState;

const SCORE_EPS: f64 = 1e-9;

/// A conflicting partner of the vessel being planned, with the separation
/// the pair would reach if the vessel held course.
struct Partner {
    position: DVec2,
    velocity: DVec2,
    baseline: f64,
}

/// Plan maneuvers for every give-way vessel. Returns one command per
/// vessel that actually maneuvers, keyed by id.
pub fn plan(
    snapshot: &[VesselState],
    encounters: &[Encounter],
    roles: &BTreeMap<u32, Role>,
    config: &SimConfig,
) -> BTreeMap<u32, ManeuverView> {
    let by_id: BTreeMap<u32, &VesselState> = snapshot.iter().map(|s| (s.id, s)).collect();
    let mut maneuvers = BTreeMap::new();

    for vessel in snapshot {
        if roles.get(&vessel.id) != Some(&Role::GiveWay) {
            continue;
        }

        let partners = collect_partners(vessel, encounters, &by_id);
        if partners.is_empty() {
            continue;
        }

        if let Some(maneuver) = plan_vessel(vessel, &partners, config) {
            if maneuver.sufficient {
                debug!(
                    vessel = vessel.id,
                    heading_delta = maneuver.heading_delta,
                    speed_delta = maneuver.speed_delta,
                    min_cpa = maneuver.min_cpa,
                    "avoidance maneuver selected"
                );
            } else {
                warn!(
                    vessel = vessel.id,
                    min_cpa = maneuver.min_cpa,
                    threshold = config.proximity_threshold,
                    "no candidate reaches a safe CPA, applying best effort"
                );
            }
            maneuvers.insert(vessel.id, maneuver);
        }
    }

    maneuvers
}

fn collect_partners(
    vessel: &VesselState,
    encounters: &[Encounter],
    by_id: &BTreeMap<u32, &VesselState>,
) -> Vec<Partner> {
    let own_pos = geometry::to_dvec(&vessel.position);
    let own_vel = geometry::velocity_of(vessel.heading, vessel.speed);

    encounters
        .iter()
        .filter_map(|e| {
            let other = if e.a == vessel.id {
                e.b
            } else if e.b == vessel.id {
                e.a
            } else {
                return None;
            };
            let state = by_id.get(&other)?;
            let position = geometry::to_dvec(&state.position);
            let velocity = geometry::velocity_of(state.heading, state.speed);
            Some(Partner {
                position,
                velocity,
                baseline: geometry::min_separation(own_pos, own_vel, position, velocity),
            })
        })
        .collect()
}

/// Search the candidate set for one vessel.
///
/// Selection order: the first candidate (starboard turns, then speed
/// reductions, then port turns, each smallest first) that resolves every
/// encounter at or above the safety threshold; otherwise the admissible
/// candidate with the best worst-case separation; otherwise the candidate
/// with the best worst-case separation outright, applied best-effort.
/// Returns None when holding course is already the best available.
fn plan_vessel(
    vessel: &VesselState,
    partners: &[Partner],
    config: &SimConfig,
) -> Option<ManeuverView> {
    let threshold = config.proximity_threshold;
    let baseline_min = partners
        .iter()
        .map(|p| p.baseline)
        .fold(f64::INFINITY, f64::min);

    let max_turn = vessel.max_turn_rate * config.dt;
    let max_slow = (vessel.max_accel * config.dt).min(vessel.speed);
    let turns = stepped_offsets(max_turn, config.turn_increment);
    let slows = stepped_offsets(max_slow, config.speed_increment);

    let mut candidates =
        Vec::with_capacity(turns.len() * 2 + slows.len());
    for &offset in &turns {
        candidates.push((offset, 0.0));
    }
    for &reduction in &slows {
        candidates.push((0.0, -reduction));
    }
    for &offset in &turns {
        candidates.push((-offset, 0.0));
    }

    let mut best_admissible: Option<(f64, f64, f64)> = None;
    let mut best_overall: Option<(f64, f64, f64)> = None;

    for (heading_delta, speed_delta) in candidates {
        let outcome = evaluate(vessel, partners, heading_delta, speed_delta, threshold);

        if outcome.safe {
            return Some(ManeuverView {
                vessel: vessel.id,
                heading_delta,
                speed_delta,
                min_cpa: outcome.min,
                sufficient: true,
            });
        }
        if outcome.admissible
            && outcome.min > best_admissible.map_or(baseline_min, |(_, _, s)| s) + SCORE_EPS
        {
            best_admissible = Some((heading_delta, speed_delta, outcome.min));
        }
        if outcome.min > best_overall.map_or(baseline_min, |(_, _, s)| s) + SCORE_EPS {
            best_overall = Some((heading_delta, speed_delta, outcome.min));
        }
    }

    let (heading_delta, speed_delta, min_cpa) = best_admissible.or(best_overall)?;
    Some(ManeuverView {
        vessel: vessel.id,
        heading_delta,
        speed_delta,
        min_cpa,
        sufficient: false,
    })
}

struct Outcome {
    /// Worst-case separation across all partners.
    min: f64,
    /// No encounter ends up both worse than it was and below threshold.
    admissible: bool,
    /// Every encounter resolves at or above the threshold.
    safe: bool,
}

fn evaluate(
    vessel: &VesselState,
    partners: &[Partner],
    heading_delta: f64,
    speed_delta: f64,
    threshold: f64,
) -> Outcome {
    let heading = vessel.heading + heading_delta;
    let speed = (vessel.speed + speed_delta).max(0.0);
    let pos = geometry::to_dvec(&vessel.position);
    let vel = geometry::velocity_of(heading, speed);

    let mut min = f64::INFINITY;
    let mut admissible = true;
    let mut safe = true;
    for partner in partners {
        let separation = geometry::min_separation(pos, vel, partner.position, partner.velocity);
        min = min.min(separation);
        if separation < threshold {
            safe = false;
            if separation < partner.baseline - SCORE_EPS {
                admissible = false;
            }
        }
    }

    Outcome {
        min,
        admissible,
        safe,
    }
}

/// Offsets in `increment` steps up to `limit`, always including the exact
/// limit so a vessel can use its full per-tick authority.
fn stepped_offsets(limit: f64, increment: f64) -> Vec<f64> {
    let mut offsets = Vec::new();
    if limit <= 0.0 {
        return offsets;
    }
    let mut k = 1u32;
    loop {
        let offset = increment * f64::from(k);
        if offset > limit + 1e-12 {
            break;
        }
        offsets.push(offset);
        k += 1;
    }
    if offsets.last().is_none_or(|&last| limit - last > 1e-12) {
        offsets.push(limit);
    }
    offsets
}
