//! Output formatting utilities for CLI.

use fastlane::{ActionOutcome, LocationRegistry, StatsSnapshot};
use serde::Serialize;
use std::fmt::Write;

/// What a single scripted step did.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum StepResult {
    /// Passive decay ran this many times.
    Ticked {
        /// Ticks run.
        ticks: u64,
    },
    /// An action was attempted.
    Action {
        /// Applied or rejected.
        #[serde(flatten)]
        outcome: ActionOutcome,
    },
}

/// One line of the session log.
#[derive(Debug, Clone, Serialize)]
pub(super) struct StepReport {
    /// The step as written on the command line.
    pub(super) step: String,
    /// What happened.
    pub(super) result: StepResult,
}

/// JSON-serializable session result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult<'a> {
    /// Final player stats.
    pub(super) player: &'a StatsSnapshot,
    /// Ticks run since the game started.
    pub(super) ticks_elapsed: u64,
    /// Per-step log.
    pub(super) steps: &'a [StepReport],
}

/// Format a session log and final stats as human-readable text.
pub(super) fn format_run_text(
    reports: &[StepReport],
    stat_lines: &[String],
    ticks_elapsed: u64,
) -> String {
    let mut output = String::new();

    for (i, report) in reports.iter().enumerate() {
        let result = match &report.result {
            StepResult::Ticked { ticks: 1 } => "1 tick".to_string(),
            StepResult::Ticked { ticks } => format!("{ticks} ticks"),
            StepResult::Action { outcome } => outcome.to_string(),
        };
        let _ = writeln!(output, "  [{}] {} -> {result}", i + 1, report.step);
    }
    output.push('\n');

    for line in stat_lines {
        let _ = writeln!(output, "  {line}");
    }
    let _ = writeln!(output, "  Ticks elapsed: {ticks_elapsed}");

    output
}

/// Format the location catalog as human-readable text.
pub(super) fn format_locations_text(registry: &LocationRegistry) -> String {
    let mut output = String::new();

    for (_, location) in registry.iter() {
        let region = location.region();
        let _ = writeln!(
            output,
            "{} [{}] at ({}, {}) {}x{}",
            location.name(),
            location.category(),
            region.x,
            region.y,
            region.width,
            region.height
        );
        for (i, action) in location.actions().iter().enumerate() {
            let effects: Vec<_> = action
                .effects()
                .iter()
                .map(|e| format!("{} {:+}", e.stat, e.delta))
                .collect();
            let _ = writeln!(
                output,
                "  {}. {}: {}",
                i + 1,
                action.menu_label(),
                effects.join(", ")
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_text_lists_everything() {
        let text = format_locations_text(&LocationRegistry::standard());
        assert!(text.contains("Cramped Quarters [housing] at (50, 100) 200x100"));
        assert!(text.contains("1. Work Shift (Energy: 2): money +50, happiness -1"));
        assert!(text.contains("2. Take Class (Energy: 3): education +2, money -100"));
    }

    #[test]
    fn test_run_text_numbers_steps() {
        let reports = vec![
            StepReport {
                step: "tick=3".to_string(),
                result: StepResult::Ticked { ticks: 3 },
            },
            StepReport {
                step: "Monolith Burgers/Work Shift".to_string(),
                result: StepResult::Action {
                    outcome: ActionOutcome::Applied,
                },
            },
        ];
        let text = format_run_text(&reports, &["Name: Rita".to_string()], 3);

        assert!(text.contains("[1] tick=3 -> 3 ticks"));
        assert!(text.contains("[2] Monolith Burgers/Work Shift -> applied"));
        assert!(text.contains("Name: Rita"));
        assert!(text.contains("Ticks elapsed: 3"));
    }
}
