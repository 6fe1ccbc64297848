//! Check-config command implementation.

use super::CliError;
use fastlane::{GameConfig, LocationRegistry};
use std::path::Path;

/// Execute the check-config command.
///
/// # Errors
///
/// Returns an error describing why the config is unusable.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    let config = GameConfig::load(path)?;

    for (_, location) in LocationRegistry::standard().iter() {
        let region = location.region();
        let right = i64::from(region.x) + i64::from(region.width);
        let bottom = i64::from(region.y) + i64::from(region.height);
        if right > i64::from(config.screen_width) || bottom > i64::from(config.screen_height) {
            tracing::warn!(
                location = location.name(),
                screen_width = config.screen_width,
                screen_height = config.screen_height,
                "location extends past the screen"
            );
        }
    }

    println!("{}: OK", path.display());
    println!(
        "  {} at {}x{}, {} fps",
        config.title, config.screen_width, config.screen_height, config.fps
    );
    println!(
        "  default player '{}' starts with ${} and {} energy",
        config.default_player_name, config.starting_stats.money, config.starting_stats.energy
    );

    Ok(())
}
