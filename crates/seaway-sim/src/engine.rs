//! Simulation engine — the core of the crate.
//!
//! `Simulation` owns the hecs ECS world, runs the per-tick decision
//! systems in a fixed order, and produces `TickReport`s. Each tick is one
//! atomic computation from a consistent snapshot of all vessel states to a
//! new consistent snapshot; every command is computed before any vessel
//! state mutates.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use hecs::World;
use serde::{Deserialize, Serialize};
use tracing::info;

use seaway_core::components::Navigation;
use seaway_core::constants::*;
use seaway_core::enums::{CollisionPolicy, SimPhase};
use seaway_core::errors::{SetupError, StepError};
use seaway_core::events::SimEvent;
use seaway_core::state::TickReport;
use seaway_core::types::{Position, SimTime};

use crate::systems::{self, snapshot};
use crate::world_setup;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Tick duration in seconds.
    pub dt: f64,
    /// Safe CPA distance in meters: pairs predicted to pass closer than
    /// this qualify as encounters, and maneuvers aim to open past it.
    pub proximity_threshold: f64,
    /// Lookahead horizon in seconds: the largest TCPA still considered.
    pub lookahead: f64,
    /// Heading-candidate increment for the maneuver planner, radians.
    pub turn_increment: f64,
    /// Speed-candidate increment for the maneuver planner, m/s.
    pub speed_increment: f64,
    /// How actual (not predicted) collisions are judged.
    pub collision_policy: CollisionPolicy,
    /// Tick count at which a collision-free run completes.
    pub tick_limit: u64,
    /// Range at which a routed vessel counts as arrived, meters.
    pub arrival_threshold: f64,
    /// Consecutive encounter-free ticks before destination steering resumes.
    pub resume_clear_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_TICK_SECS,
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            lookahead: DEFAULT_LOOKAHEAD_SECS,
            turn_increment: DEFAULT_TURN_INCREMENT,
            speed_increment: DEFAULT_SPEED_INCREMENT,
            collision_policy: CollisionPolicy::default(),
            tick_limit: DEFAULT_TICK_LIMIT,
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
            resume_clear_ticks: DEFAULT_RESUME_CLEAR_TICKS,
        }
    }
}

/// Initial description of one vessel, consumed by `Simulation::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    /// Unique id, stable for the lifetime of the run.
    pub id: u32,
    pub name: String,
    /// Initial position, meters.
    pub position: Position,
    /// Initial heading, radians (0 = North, clockwise).
    pub heading: f64,
    /// Initial speed, m/s.
    pub speed: f64,
    /// Maximum turn rate, rad/s.
    pub max_turn_rate: f64,
    /// Maximum acceleration magnitude, m/s².
    pub max_accel: f64,
    /// Safety radius, meters. Strictly positive.
    pub safety_radius: f64,
    /// Optional destination; the vessel steers for it when clear of
    /// conflicts and stops on arrival.
    pub destination: Option<Position>,
}

impl VesselSpec {
    pub fn new(id: u32, name: impl Into<String>, position: Position, heading: f64, speed: f64) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            heading,
            speed,
            max_turn_rate: DEFAULT_MAX_TURN_RATE,
            max_accel: DEFAULT_MAX_ACCEL,
            safety_radius: DEFAULT_SAFETY_RADIUS,
            destination: None,
        }
    }

    pub fn with_destination(mut self, destination: Position) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn with_safety_radius(mut self, radius: f64) -> Self {
        self.safety_radius = radius;
        self
    }

    pub fn with_limits(mut self, max_turn_rate: f64, max_accel: f64) -> Self {
        self.max_turn_rate = max_turn_rate;
        self.max_accel = max_accel;
        self
    }
}

/// The simulation handle. Owns the ECS world and all run state; many
/// independent simulations can run concurrently in one process.
pub struct Simulation {
    world: World,
    time: SimTime,
    phase: SimPhase,
    config: SimConfig,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("time", &self.time)
            .field("phase", &self.phase)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Validate the vessel list and config, spawn the world, and return an
    /// Idle handle.
    pub fn new(vessels: Vec<VesselSpec>, config: SimConfig) -> Result<Self, SetupError> {
        validate_config(&config)?;
        validate_vessels(&vessels)?;

        let mut world = World::new();
        for spec in &vessels {
            world_setup::spawn_vessel(&mut world, spec, &config);
        }

        info!(vessels = vessels.len(), "simulation initialized");
        Ok(Self {
            world,
            time: SimTime::default(),
            phase: SimPhase::Idle,
            config,
        })
    }

    /// Advance one tick.
    ///
    /// Idle transitions to Running first (checking for initial overlap);
    /// stepping a Collided or Completed run fails with `InvalidState`, which
    /// is non-fatal — the caller may still query `state()`.
    pub fn step(&mut self) -> Result<TickReport, StepError> {
        match self.phase {
            SimPhase::Idle => {
                self.phase = SimPhase::Running;
                info!("simulation running");
                if let Some(report) = self.check_initial_overlap() {
                    return Ok(report);
                }
                Ok(self.run_tick())
            }
            SimPhase::Running => Ok(self.run_tick()),
            phase => Err(StepError::InvalidState { phase }),
        }
    }

    /// Read-only view of the current snapshot and phase. Encounters and
    /// roles are evaluated fresh from current state; nothing mutates.
    pub fn state(&self) -> TickReport {
        let snap = snapshot::collect(&self.world);
        let encounters = systems::encounters::enumerate(&snap, &self.config);
        let roles = systems::roles::assign(&snap, &encounters);
        snapshot::build_report(
            &self.world,
            self.time,
            self.phase,
            encounters,
            &roles,
            BTreeMap::new(),
            Vec::new(),
            None,
        )
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The run's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run the decision systems and integrate one tick.
    fn run_tick(&mut self) -> TickReport {
        let snap = snapshot::collect(&self.world);
        let encounters = systems::encounters::enumerate(&snap, &self.config);
        let roles = systems::roles::assign(&snap, &encounters);
        let maneuvers = systems::avoidance::plan(&snap, &encounters, &roles, &self.config);

        let mut events: Vec<SimEvent> = Vec::new();
        for m in maneuvers.values() {
            events.push(SimEvent::ManeuverApplied {
                vessel: m.vessel,
                heading_delta: m.heading_delta,
                speed_delta: m.speed_delta,
            });
            if !m.sufficient {
                events.push(SimEvent::ManeuverInsufficient {
                    vessel: m.vessel,
                    min_cpa: m.min_cpa,
                });
            }
        }

        let involved: BTreeSet<u32> = encounters.iter().flat_map(|e| [e.a, e.b]).collect();
        systems::steering::run(
            &mut self.world,
            &involved,
            self.config.dt,
            self.config.resume_clear_ticks,
        );
        events.extend(systems::movement::run(
            &mut self.world,
            &maneuvers,
            &self.config,
        ));
        self.time.advance(self.config.dt);

        let post = snapshot::collect(&self.world);
        let collision = systems::collision::check(&post, self.config.collision_policy);
        if let Some(hit) = collision {
            self.phase = SimPhase::Collided;
            events.push(SimEvent::Collision {
                a: hit.a,
                b: hit.b,
                separation: hit.separation,
            });
            info!(a = hit.a, b = hit.b, "collision, run terminated");
        } else if self.time.tick >= self.config.tick_limit || self.all_arrived() {
            self.phase = SimPhase::Completed;
            events.push(SimEvent::RunCompleted {
                tick: self.time.tick,
            });
            info!(tick = self.time.tick, "run completed");
        }

        snapshot::build_report(
            &self.world,
            self.time,
            self.phase,
            encounters,
            &roles,
            maneuvers,
            events,
            collision,
        )
    }

    /// Vessels spawned overlapping are a collision at tick zero, before any
    /// movement. Returns the terminal report when that is the case.
    fn check_initial_overlap(&mut self) -> Option<TickReport> {
        let snap = snapshot::collect(&self.world);
        let hit = systems::collision::check(&snap, self.config.collision_policy)?;

        self.phase = SimPhase::Collided;
        info!(a = hit.a, b = hit.b, "initial overlap, run terminated");

        let encounters = systems::encounters::enumerate(&snap, &self.config);
        let roles = systems::roles::assign(&snap, &encounters);
        let events = vec![SimEvent::Collision {
            a: hit.a,
            b: hit.b,
            separation: hit.separation,
        }];
        Some(snapshot::build_report(
            &self.world,
            self.time,
            self.phase,
            encounters,
            &roles,
            BTreeMap::new(),
            events,
            Some(hit),
        ))
    }

    /// True when at least one vessel has a destination and every such
    /// vessel has arrived.
    fn all_arrived(&self) -> bool {
        let mut query = self.world.query::<&Navigation>();
        let mut any = false;
        for (_entity, nav) in query.iter() {
            any = true;
            if !nav.arrived {
                return false;
            }
        }
        any
    }
}

fn validate_config(config: &SimConfig) -> Result<(), SetupError> {
    if !(config.dt > 0.0) {
        return Err(SetupError::InvalidConfig {
            reason: "tick duration must be positive",
        });
    }
    if !(config.proximity_threshold > 0.0) {
        return Err(SetupError::InvalidConfig {
            reason: "proximity threshold must be positive",
        });
    }
    if !(config.lookahead > 0.0) {
        return Err(SetupError::InvalidConfig {
            reason: "lookahead horizon must be positive",
        });
    }
    if !(config.turn_increment > 0.0) {
        return Err(SetupError::InvalidConfig {
            reason: "turn increment must be positive",
        });
    }
    if !(config.speed_increment > 0.0) {
        return Err(SetupError::InvalidConfig {
            reason: "speed increment must be positive",
        });
    }
    if !(config.arrival_threshold > 0.0) {
        return Err(SetupError::InvalidConfig {
            reason: "arrival threshold must be positive",
        });
    }
    if let CollisionPolicy::FixedRange { range } = config.collision_policy {
        if !(range > 0.0) {
            return Err(SetupError::InvalidConfig {
                reason: "fixed collision range must be positive",
            });
        }
    }
    Ok(())
}

fn validate_vessels(vessels: &[VesselSpec]) -> Result<(), SetupError> {
    let mut seen = HashSet::new();
    for spec in vessels {
        if !seen.insert(spec.id) {
            return Err(SetupError::DuplicateId { id: spec.id });
        }
        if !(spec.safety_radius > 0.0) {
            return Err(SetupError::NonPositiveSafetyRadius {
                id: spec.id,
                radius: spec.safety_radius,
            });
        }
        if spec.speed < 0.0 {
            return Err(SetupError::NegativeSpeed {
                id: spec.id,
                speed: spec.speed,
            });
        }
        if spec.max_turn_rate < 0.0 {
            return Err(SetupError::NegativeLimit {
                id: spec.id,
                limit: "max turn rate",
            });
        }
        if spec.max_accel < 0.0 {
            return Err(SetupError::NegativeLimit {
                id: spec.id,
                limit: "max acceleration",
            });
        }
    }
    Ok(())
}
