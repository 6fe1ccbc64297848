//! Game layer for fastlane.
//!
//! Implements the life-simulation rules:
//! - Player stats with floor-only clamping
//! - Per-tick passive decay
//! - Locations offering energy-costed actions
//! - The session engine that applies both

mod action;
mod invariants;
mod location;
mod registry;
mod session;
mod stats;

pub use action::{ActionDefinition, ActionOutcome, Effect, RejectReason};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use location::{
    Location, LocationCategory, Point, Rect, DEFAULT_LOCATION_HEIGHT, DEFAULT_LOCATION_WIDTH,
};
pub use registry::{LocationId, LocationRegistry};
pub use session::{SessionPhase, Simulation};
pub use stats::{
    PlayerStats, StartingStats, StatKind, StatsSnapshot, ENERGY_DECAY_PER_TICK,
    LOW_ENERGY_HAPPINESS_LOSS, LOW_ENERGY_HEALTH_LOSS, LOW_ENERGY_THRESHOLD,
};
