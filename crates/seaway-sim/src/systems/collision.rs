//! Actual-separation collision check.
//!
//! Works on real positions, not predictions: the run terminates the moment
//! any pair closes inside the configured collision distance.

use seaway_core::enums::CollisionPolicy;
use seaway_core::state::CollisionView;

use crate::systems::snapshot::VesselState;

/// Return the first pair (in id order) violating the collision policy.
pub fn check(snapshot: &[VesselState], policy: CollisionPolicy) -> Option<CollisionView> {
    for i in 0..snapshot.len() {
        for j in (i + 1)..snapshot.len() {
            let a = &snapshot[i];
            let b = &snapshot[j];
            let separation = a.position.range_to(&b.position);
            let limit = match policy {
                CollisionPolicy::SummedRadii => a.safety_radius + b.safety_radius,
                CollisionPolicy::FixedRange { range } => range,
            };
            if separation < limit {
                return Some(CollisionView {
                    a: a.id,
                    b: b.id,
                    separation,
                });
            }
        }
    }
    None
}
