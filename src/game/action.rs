//! Action definitions and the result of attempting one.

use std::fmt;

use serde::Serialize;

use crate::game::StatKind;

/// A signed change to one stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Effect {
    /// Stat to change.
    pub stat: StatKind,
    /// Amount to add (negative to subtract).
    pub delta: f64,
}

impl Effect {
    /// Create an effect on a known stat.
    #[must_use]
    pub const fn new(stat: StatKind, delta: f64) -> Self {
        Self { stat, delta }
    }

    /// Create an effect from a stat name.
    ///
    /// Unrecognized names yield `None`; callers drop them.
    #[must_use]
    pub fn named(name: &str, delta: f64) -> Option<Self> {
        let effect = StatKind::from_name(name).map(|stat| Self::new(stat, delta));
        if effect.is_none() {
            tracing::debug!(stat = name, delta, "ignoring effect on unknown stat");
        }
        effect
    }
}

/// An energy-costed action offered by a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDefinition {
    name: String,
    energy_cost: u32,
    effects: Vec<Effect>,
}

impl ActionDefinition {
    /// Build an action from `(stat name, delta)` pairs.
    ///
    /// Pairs naming an unknown stat are skipped. Order is kept.
    #[must_use]
    pub fn new(name: impl Into<String>, energy_cost: u32, effects: &[(&str, f64)]) -> Self {
        Self {
            name: name.into(),
            energy_cost,
            effects: effects
                .iter()
                .filter_map(|&(stat, delta)| Effect::named(stat, delta))
                .collect(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Energy paid up front.
    #[must_use]
    pub const fn energy_cost(&self) -> u32 {
        self.energy_cost
    }

    /// Stat changes applied once the cost is paid.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Delta this action applies to `stat`, summed over its effects.
    #[must_use]
    pub fn delta_for(&self, stat: StatKind) -> f64 {
        self.effects
            .iter()
            .filter(|e| e.stat == stat)
            .map(|e| e.delta)
            .sum()
    }

    /// Button label for the action menu.
    #[must_use]
    pub fn menu_label(&self) -> String {
        format!("{} (Energy: {})", self.name, self.energy_cost)
    }
}

/// Why an action was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// The player has less energy than the action costs.
    InsufficientEnergy {
        /// Energy the action costs.
        required: u32,
        /// Energy the player had.
        available: f64,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InsufficientEnergy {
                required,
                available,
            } => write!(
                f,
                "not enough energy (need {required}, have {available:.1})"
            ),
        }
    }
}

/// Result of attempting an action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Cost paid and every effect applied.
    Applied,
    /// Nothing changed.
    Rejected {
        /// Why the action was refused.
        reason: RejectReason,
    },
}

impl ActionOutcome {
    /// Whether the action took effect.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    /// Whether the action was refused.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, ActionOutcome::Rejected { .. })
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Applied => f.write_str("applied"),
            ActionOutcome::Rejected { reason } => write!(f, "rejected: {reason}"),
        }
    }
}
