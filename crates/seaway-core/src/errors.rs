//! Error types surfaced at the public API boundary.
//!
//! A failed precondition at initialization is the only hard failure.
//! Numeric degeneracies inside a tick are handled by policy, never
//! propagated as errors, and collision is a terminal outcome, not an error.

use crate::enums::SimPhase;

/// Rejections raised by `Simulation::new`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    /// Vessel identifiers must be unique within a run.
    #[error("duplicate vessel id {id}")]
    DuplicateId { id: u32 },

    /// Safety radius must be strictly positive.
    #[error("vessel {id}: safety radius must be positive, got {radius}")]
    NonPositiveSafetyRadius { id: u32, radius: f64 },

    /// Speed must be non-negative.
    #[error("vessel {id}: speed must be non-negative, got {speed}")]
    NegativeSpeed { id: u32, speed: f64 },

    /// Maneuvering limits must be non-negative.
    #[error("vessel {id}: {limit} must be non-negative")]
    NegativeLimit { id: u32, limit: &'static str },

    /// Configuration field failed validation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Rejections raised by `Simulation::step`.
///
/// Non-fatal: the caller may re-query `state()` at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// Stepping is only legal from Idle or Running.
    #[error("cannot step simulation in phase {phase:?}")]
    InvalidState { phase: SimPhase },
}
