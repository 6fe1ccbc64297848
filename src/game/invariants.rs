//! Stat invariants - sanity checks that detect bugs.
//!
//! The decay and effect rules floor health, happiness and energy at zero, so
//! these checks should never fire. They are bug detectors, not gameplay limits.

use crate::game::{PlayerStats, StatKind};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all stat invariants.
///
/// Returns the violations found, or an empty list if all hold.
#[must_use]
pub fn check_invariants(player: &PlayerStats) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for stat in StatKind::ALL {
        let value = player.get(stat);
        if !value.is_finite() {
            violations.push(InvariantViolation {
                message: format!("{stat} is not finite: {value}"),
            });
        } else if stat.is_floored() && value < 0.0 {
            violations.push(InvariantViolation {
                message: format!("{stat} is negative: {value}"),
            });
        }
    }

    if !player.max_energy().is_finite() {
        violations.push(InvariantViolation {
            message: format!("max energy is not finite: {}", player.max_energy()),
        });
    }

    violations
}

/// Assert all stat invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(player: &PlayerStats) {
    let violations = check_invariants(player);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Stat invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_player: &PlayerStats) {}
