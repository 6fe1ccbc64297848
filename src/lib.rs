// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Fastlane: the simulation model behind "Life in the Fast Lane".
//!
//! A player spends energy on actions at a handful of locations to trade
//! between money, happiness, education and health, while every frame drains
//! a little energy. This crate holds the model only; drawing, menus and the
//! frame loop belong to whoever drives it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Frame loop / UI (external)        │
//! ├─────────────────────────────────────┤
//! │   Simulation (tick, perform_action) │
//! ├──────────────────┬──────────────────┤
//! │ LocationRegistry │   PlayerStats    │
//! └──────────────────┴──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fastlane::{LocationId, Simulation, StartingStats};
//!
//! let mut sim = Simulation::new();
//! sim.start_new_game("Rita", StartingStats::default());
//!
//! let outcome = sim.perform_action(LocationId(1), 0)?;
//! assert!(outcome.is_applied());
//! sim.tick();
//! # Ok::<(), fastlane::SessionError>(())
//! ```

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{ConfigError, SessionError, SessionResult};

// Re-export key game types at crate root for convenience
pub use game::{
    ActionDefinition, ActionOutcome, Location, LocationCategory, LocationId, LocationRegistry,
    PlayerStats, Point, RejectReason, SessionPhase, Simulation, StartingStats, StatKind,
    StatsSnapshot,
};
