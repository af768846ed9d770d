//! COLREGs collision-avoidance simulation engine.
//!
//! Owns the hecs ECS world, runs the per-tick decision systems
//! (classify encounters, assign roles, plan maneuvers, integrate),
//! and produces `TickReport`s. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod geometry;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, Simulation, VesselSpec};
pub use seaway_core as core;
