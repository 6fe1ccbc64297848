//! Player stat model: the six tracked attributes and their decay rules.
//!
//! # Clamping
//!
//! Health, happiness and energy are floored at zero on every mutation.
//! Money and education carry no floor, and no stat has an upper bound;
//! energy may rise above the value the player started with.
//!
//! # Decay
//!
//! Every tick drains [`ENERGY_DECAY_PER_TICK`] energy. Once energy sits below
//! [`LOW_ENERGY_THRESHOLD`], each tick also costs health and happiness. The
//! amounts are fixed per call, so the real-time rate follows the frame rate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{ActionOutcome, Effect, RejectReason};

/// Energy lost on every tick.
pub const ENERGY_DECAY_PER_TICK: f64 = 0.1;

/// Below this much energy the player starts losing health and happiness.
pub const LOW_ENERGY_THRESHOLD: f64 = 2.0;

/// Health lost per tick while energy is low.
pub const LOW_ENERGY_HEALTH_LOSS: f64 = 0.5;

/// Happiness lost per tick while energy is low.
pub const LOW_ENERGY_HAPPINESS_LOSS: f64 = 1.0;

/// Identifies one of the stats an action effect can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Cash on hand, whole units.
    Money,
    /// Mood, floored at zero.
    Happiness,
    /// Accumulated schooling.
    Education,
    /// Physical condition, floored at zero.
    Health,
    /// Spendable energy, floored at zero.
    Energy,
}

/// Name lookup table for effect keys.
const STAT_NAMES: [(&str, StatKind); 5] = [
    ("money", StatKind::Money),
    ("happiness", StatKind::Happiness),
    ("education", StatKind::Education),
    ("health", StatKind::Health),
    ("energy", StatKind::Energy),
];

impl StatKind {
    /// All stat kinds in display order.
    pub const ALL: [StatKind; 5] = [
        StatKind::Money,
        StatKind::Happiness,
        StatKind::Education,
        StatKind::Health,
        StatKind::Energy,
    ];

    /// Resolve a stat from its lowercase name.
    ///
    /// Returns `None` for anything that is not a tracked stat, including
    /// `name` and `max_energy`, which effects may not change.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        STAT_NAMES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, kind)| *kind)
    }

    /// Lowercase name of this stat.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatKind::Money => "money",
            StatKind::Happiness => "happiness",
            StatKind::Education => "education",
            StatKind::Health => "health",
            StatKind::Energy => "energy",
        }
    }

    /// Whether mutations of this stat are floored at zero.
    #[must_use]
    pub const fn is_floored(self) -> bool {
        matches!(
            self,
            StatKind::Happiness | StatKind::Health | StatKind::Energy
        )
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Initial values for a new player.
///
/// Missing fields fall back to the defaults when deserialized, so a config file
/// only needs to name the stats it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingStats {
    /// Starting money.
    pub money: i64,
    /// Starting happiness.
    pub happiness: f64,
    /// Starting education.
    pub education: f64,
    /// Starting health.
    pub health: f64,
    /// Starting energy; also becomes the player's max energy.
    pub energy: f64,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            money: 100,
            happiness: 50.0,
            education: 0.0,
            health: 75.0,
            energy: 5.0,
        }
    }
}

/// Mutable state of the single player in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    name: String,
    money: i64,
    happiness: f64,
    education: f64,
    health: f64,
    energy: f64,
    max_energy: f64,
}

/// Read-only copy of a player's stats for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Player name.
    pub name: String,
    /// Current money.
    pub money: i64,
    /// Current happiness.
    pub happiness: f64,
    /// Current education.
    pub education: f64,
    /// Current health.
    pub health: f64,
    /// Current energy.
    pub energy: f64,
    /// Energy the player started with.
    pub max_energy: f64,
}

/// Add `delta` to `value`, never going below zero.
///
/// A NaN result collapses to zero as well, since `f64::max` prefers the
/// non-NaN operand.
#[inline]
fn floored(value: f64, delta: f64) -> f64 {
    (value + delta).max(0.0)
}

impl PlayerStats {
    /// Create a player from a name and starting stats.
    #[must_use]
    pub fn new(name: impl Into<String>, start: StartingStats) -> Self {
        Self {
            name: name.into(),
            money: start.money,
            happiness: start.happiness,
            education: start.education,
            health: start.health,
            energy: start.energy,
            max_energy: start.energy,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current money.
    #[must_use]
    pub const fn money(&self) -> i64 {
        self.money
    }

    /// Current happiness.
    #[must_use]
    pub const fn happiness(&self) -> f64 {
        self.happiness
    }

    /// Current education.
    #[must_use]
    pub const fn education(&self) -> f64 {
        self.education
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> f64 {
        self.health
    }

    /// Current energy.
    #[must_use]
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// Energy at creation. Never changes.
    #[must_use]
    pub const fn max_energy(&self) -> f64 {
        self.max_energy
    }

    /// Whether energy is below the low-energy threshold.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.energy < LOW_ENERGY_THRESHOLD
    }

    /// Whether the player can pay `cost` energy right now.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.energy >= f64::from(cost)
    }

    /// Current value of a stat as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Money => self.money as f64,
            StatKind::Happiness => self.happiness,
            StatKind::Education => self.education,
            StatKind::Health => self.health,
            StatKind::Energy => self.energy,
        }
    }

    /// Apply one tick of passive decay.
    ///
    /// Energy drops first, so the low-energy check sees the post-decay value.
    pub fn apply_passive_decay(&mut self) {
        self.energy = floored(self.energy, -ENERGY_DECAY_PER_TICK);
        if self.is_exhausted() {
            self.health = floored(self.health, -LOW_ENERGY_HEALTH_LOSS);
            self.happiness = floored(self.happiness, -LOW_ENERGY_HAPPINESS_LOSS);
        }
    }

    /// Pay `cost` energy and apply every effect once, in order.
    ///
    /// If the player has less than `cost` energy nothing changes and the
    /// outcome is [`ActionOutcome::Rejected`].
    pub fn apply_effects(&mut self, cost: u32, effects: &[Effect]) -> ActionOutcome {
        if !self.can_afford(cost) {
            return ActionOutcome::Rejected {
                reason: RejectReason::InsufficientEnergy {
                    required: cost,
                    available: self.energy,
                },
            };
        }

        self.energy = floored(self.energy, -f64::from(cost));
        for effect in effects {
            self.apply_delta(effect.stat, effect.delta);
        }

        ActionOutcome::Applied
    }

    /// Add a delta to one stat, honoring the floor rules.
    #[allow(clippy::cast_possible_truncation)]
    fn apply_delta(&mut self, stat: StatKind, delta: f64) {
        match stat {
            // Money is whole units; deltas are rounded rather than truncated.
            StatKind::Money => self.money = self.money.saturating_add(delta.round() as i64),
            StatKind::Education => self.education += delta,
            StatKind::Happiness => self.happiness = floored(self.happiness, delta),
            StatKind::Health => self.health = floored(self.health, delta),
            StatKind::Energy => self.energy = floored(self.energy, delta),
        }
    }

    /// Copy the current values out.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            name: self.name.clone(),
            money: self.money,
            happiness: self.happiness,
            education: self.education,
            health: self.health,
            energy: self.energy,
            max_energy: self.max_energy,
        }
    }

    /// The stats panel, one line per entry, as shown to the player.
    ///
    /// Fractional stats are truncated toward zero for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn stat_lines(&self) -> [String; 6] {
        [
            format!("Name: {}", self.name),
            format!("Money: ${}", self.money),
            format!("Happiness: {}", self.happiness.trunc() as i64),
            format!("Education: {}", self.education.trunc() as i64),
            format!("Health: {}", self.health.trunc() as i64),
            format!(
                "Energy: {}/{}",
                self.energy.trunc() as i64,
                self.max_energy
            ),
        ]
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stat_lines().join("\n"))
    }
}

/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Flooring never yields a negative or NaN value.
    #[kani::proof]
    fn prove_floored_never_negative() {
        let value: f64 = kani::any();
        let delta: f64 = kani::any();

        let result = floored(value, delta);

        assert!(!result.is_nan());
        assert!(result >= 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn default_player() -> PlayerStats {
        PlayerStats::new("Tester", StartingStats::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_new_player_takes_starting_stats() {
        let player = default_player();
        assert_eq!(player.name(), "Tester");
        assert_eq!(player.money(), 100);
        assert!(approx(player.happiness(), 50.0));
        assert!(approx(player.education(), 0.0));
        assert!(approx(player.health(), 75.0));
        assert!(approx(player.energy(), 5.0));
        assert!(approx(player.max_energy(), 5.0));
    }

    #[test]
    fn test_stat_name_lookup() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(StatKind::from_name("max_energy"), None);
        assert_eq!(StatKind::from_name("name"), None);
        assert_eq!(StatKind::from_name("Money"), None);
    }

    #[test]
    fn test_decay_drains_energy_only_when_rested() {
        let mut player = default_player();
        player.apply_passive_decay();

        assert!(approx(player.energy(), 4.9));
        assert!(approx(player.health(), 75.0));
        assert!(approx(player.happiness(), 50.0));
    }

    #[test]
    fn test_decay_hurts_when_exhausted() {
        let mut player = PlayerStats::new(
            "Tired",
            StartingStats {
                energy: 1.0,
                ..StartingStats::default()
            },
        );
        player.apply_passive_decay();

        assert!(approx(player.energy(), 0.9));
        assert!(approx(player.health(), 74.5));
        assert!(approx(player.happiness(), 49.0));
    }

    #[test]
    fn test_decay_floors_at_zero() {
        let mut player = PlayerStats::new(
            "Spent",
            StartingStats {
                energy: 0.05,
                health: 0.2,
                happiness: 0.5,
                ..StartingStats::default()
            },
        );
        player.apply_passive_decay();

        assert!(approx(player.energy(), 0.0));
        assert!(approx(player.health(), 0.0));
        assert!(approx(player.happiness(), 0.0));
    }

    #[test]
    fn test_apply_effects_pays_cost_then_applies() {
        let mut player = default_player();
        let effects = [
            Effect::new(StatKind::Money, 50.0),
            Effect::new(StatKind::Happiness, -1.0),
        ];

        let outcome = player.apply_effects(2, &effects);

        assert_eq!(outcome, ActionOutcome::Applied);
        assert_eq!(player.money(), 150);
        assert!(approx(player.happiness(), 49.0));
        assert!(approx(player.energy(), 3.0));
    }

    #[test]
    fn test_apply_effects_rejects_without_change() {
        let mut player = PlayerStats::new(
            "Broke",
            StartingStats {
                energy: 1.0,
                ..StartingStats::default()
            },
        );
        let before = player.clone();

        let outcome = player.apply_effects(2, &[Effect::new(StatKind::Money, 50.0)]);

        assert!(outcome.is_rejected());
        assert_eq!(player, before);
    }

    #[test]
    fn test_exact_energy_is_enough() {
        let mut player = PlayerStats::new(
            "Exact",
            StartingStats {
                energy: 3.0,
                ..StartingStats::default()
            },
        );

        let outcome = player.apply_effects(3, &[]);

        assert_eq!(outcome, ActionOutcome::Applied);
        assert!(approx(player.energy(), 0.0));
    }

    #[test]
    fn test_money_and_education_are_not_floored() {
        let mut player = default_player();
        let effects = [
            Effect::new(StatKind::Money, -250.0),
            Effect::new(StatKind::Education, -3.0),
        ];

        player.apply_effects(0, &effects);

        assert_eq!(player.money(), -150);
        assert!(approx(player.education(), -3.0));
    }

    #[test]
    fn test_floored_stats_clamp_on_effects() {
        let mut player = default_player();
        let effects = [
            Effect::new(StatKind::Happiness, -80.0),
            Effect::new(StatKind::Health, -100.0),
            Effect::new(StatKind::Energy, -10.0),
        ];

        player.apply_effects(1, &effects);

        assert!(approx(player.happiness(), 0.0));
        assert!(approx(player.health(), 0.0));
        assert!(approx(player.energy(), 0.0));
    }

    #[test]
    fn test_energy_not_capped_at_max() {
        let mut player = default_player();
        player.apply_effects(0, &[Effect::new(StatKind::Energy, 5.0)]);

        assert!(approx(player.energy(), 10.0));
        assert!(approx(player.max_energy(), 5.0));
    }

    #[test]
    fn test_stat_lines_truncate() {
        let mut player = default_player();
        player.apply_passive_decay();

        let lines = player.stat_lines();
        assert_eq!(lines[0], "Name: Tester");
        assert_eq!(lines[1], "Money: $100");
        assert_eq!(lines[2], "Happiness: 50");
        assert_eq!(lines[4], "Health: 75");
        assert_eq!(lines[5], "Energy: 4/5");
    }

    #[test]
    fn test_snapshot_matches_accessors() {
        let player = default_player();
        let snapshot = player.snapshot();
        assert_eq!(snapshot.name, "Tester");
        assert_eq!(snapshot.money, 100);
        assert!(approx(snapshot.max_energy, 5.0));
    }

    #[test]
    fn test_partial_starting_stats_use_defaults() {
        let start: StartingStats = serde_json::from_str(r#"{"money": 10}"#).unwrap();
        assert_eq!(start.money, 10);
        assert!(approx(start.energy, 5.0));
        assert!(approx(start.health, 75.0));
    }
}
