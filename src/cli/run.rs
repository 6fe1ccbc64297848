//! Run command implementation.

use super::output::{JsonRunResult, StepReport, StepResult, format_run_text};
use super::{CliError, OutputFormat, Step};
use fastlane::game::check_invariants;
use fastlane::{GameConfig, Simulation};
use std::path::PathBuf;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or a step names a
/// location or action that does not exist.
pub(crate) fn execute(
    steps: &[Step],
    config: Option<PathBuf>,
    name: Option<String>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = match config {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };

    let mut sim = Simulation::new();
    let name = name.unwrap_or_else(|| config.default_player_name.clone());
    sim.start_new_game(name, config.starting_stats);

    let mut reports = Vec::with_capacity(steps.len());
    for step in steps {
        let result = play_step(&mut sim, &config, step)?;
        reports.push(StepReport {
            step: step.to_string(),
            result,
        });

        if let Some(player) = sim.player() {
            for violation in check_invariants(player) {
                tracing::warn!(step = %step, %violation, "stat invariant violated");
            }
        }
    }

    let player = sim
        .player()
        .ok_or_else(|| CliError::new("session ended without a player"))?;

    match format {
        OutputFormat::Text => {
            println!("{}", config.title);
            print!(
                "{}",
                format_run_text(&reports, &player.stat_lines(), sim.ticks_elapsed())
            );
        }
        OutputFormat::Json => {
            let snapshot = player.snapshot();
            let json_result = JsonRunResult {
                player: &snapshot,
                ticks_elapsed: sim.ticks_elapsed(),
                steps: &reports,
            };
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}

/// Play one step against the session.
fn play_step(sim: &mut Simulation, config: &GameConfig, step: &Step) -> Result<StepResult, CliError> {
    match step {
        Step::Tick(count) => {
            sim.tick_n(*count);
            Ok(StepResult::Ticked { ticks: *count })
        }
        Step::Seconds(seconds) => {
            let ticks = config.ticks_for_seconds(*seconds);
            sim.tick_n(ticks);
            Ok(StepResult::Ticked { ticks })
        }
        Step::Action { location, action } => {
            let (location_id, place) = sim
                .registry()
                .find_by_name(location)
                .ok_or_else(|| CliError::new(format!("unknown location '{location}'")))?;
            let (index, _) = place.find_action(action).ok_or_else(|| {
                CliError::new(format!("'{location}' has no action named '{action}'"))
            })?;

            let outcome = sim.perform_action(location_id, index)?;
            Ok(StepResult::Action { outcome })
        }
    }
}
