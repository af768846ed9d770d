//! Systems that run against the simulation world each tick.
//!
//! The decision systems (encounters, roles, avoidance) are pure functions
//! over the tick's read-only snapshot; only steering and movement take
//! `&mut World`, and only after every command has been computed.

pub mod avoidance;
pub mod collision;
pub mod encounters;
pub mod movement;
pub mod roles;
pub mod snapshot;
pub mod steering;
