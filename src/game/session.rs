//! Simulation engine: ties the player, the locations and the clock together.

use crate::error::{SessionError, SessionResult};
use crate::game::{
    ActionOutcome, Location, LocationId, LocationRegistry, PlayerStats, Point, StartingStats,
    StatsSnapshot,
};

/// Macro-state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No game started yet.
    NoPlayer,
    /// A player exists and the clock is running.
    Active,
}

/// One game session.
///
/// Owned by the frame loop: call [`Simulation::tick`] once per frame and
/// [`Simulation::perform_action`] when the player picks an action.
#[derive(Debug, Clone)]
pub struct Simulation {
    registry: LocationRegistry,
    player: Option<PlayerStats>,
    ticks: u64,
}

impl Simulation {
    /// Create a session with the built-in locations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(LocationRegistry::standard())
    }

    /// Create a session over a custom set of locations.
    #[must_use]
    pub fn with_registry(registry: LocationRegistry) -> Self {
        Self {
            registry,
            player: None,
            ticks: 0,
        }
    }

    /// Current macro-state.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if self.player.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::NoPlayer
        }
    }

    /// Start a fresh game, replacing any current player.
    pub fn start_new_game(&mut self, name: impl Into<String>, start: StartingStats) {
        let player = PlayerStats::new(name, start);
        tracing::info!(
            player = player.name(),
            money = start.money,
            energy = start.energy,
            "starting new game"
        );
        self.player = Some(player);
        self.ticks = 0;
    }

    /// Advance one frame of passive decay. Does nothing before a game starts.
    pub fn tick(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        let was_exhausted = player.is_exhausted();
        player.apply_passive_decay();
        self.ticks += 1;

        if !was_exhausted && player.is_exhausted() {
            tracing::trace!(tick = self.ticks, energy = player.energy(), "player exhausted");
        }
    }

    /// Run `count` ticks.
    pub fn tick_n(&mut self, count: u64) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Attempt action `index` at `location`.
    ///
    /// The player does not need to be "at" the location. Insufficient energy
    /// is reported through [`ActionOutcome::Rejected`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if no game is active or the location or
    /// action does not exist.
    pub fn perform_action(
        &mut self,
        location: LocationId,
        index: usize,
    ) -> SessionResult<ActionOutcome> {
        let player = self.player.as_mut().ok_or(SessionError::NoActiveGame)?;
        let place = self
            .registry
            .get(location)
            .ok_or(SessionError::UnknownLocation(location))?;
        let action = place
            .action(index)
            .ok_or(SessionError::UnknownAction { location, index })?;

        let outcome = player.apply_effects(action.energy_cost(), action.effects());
        match outcome {
            ActionOutcome::Applied => tracing::debug!(
                location = place.name(),
                action = action.name(),
                energy = player.energy(),
                "action applied"
            ),
            ActionOutcome::Rejected { reason } => tracing::debug!(
                location = place.name(),
                action = action.name(),
                %reason,
                "action rejected"
            ),
        }

        Ok(outcome)
    }

    /// Update hover flags from the pointer position.
    pub fn pointer_moved(&mut self, point: Point) -> Option<LocationId> {
        self.registry.set_hover(point)
    }

    /// Resolve a click to a location. Clicks are ignored until a game starts.
    #[must_use]
    pub fn click(&self, point: Point) -> Option<LocationId> {
        if self.player.is_none() {
            return None;
        }
        self.registry.hit_test(point)
    }

    /// The current player, if a game is active.
    #[must_use]
    pub const fn player(&self) -> Option<&PlayerStats> {
        self.player.as_ref()
    }

    /// Snapshot of the current player's stats.
    #[must_use]
    pub fn snapshot(&self) -> Option<StatsSnapshot> {
        self.player.as_ref().map(PlayerStats::snapshot)
    }

    /// The session's locations.
    #[must_use]
    pub const fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// Location by id.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.registry.get(id)
    }

    /// Ticks since the current game started.
    #[must_use]
    pub const fn ticks_elapsed(&self) -> u64 {
        self.ticks
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
