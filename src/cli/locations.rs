//! Locations command implementation.

use super::output::format_locations_text;
use super::{CliError, OutputFormat};
use fastlane::LocationRegistry;

/// Execute the locations command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    let registry = LocationRegistry::standard();

    match format {
        OutputFormat::Text => print!("{}", format_locations_text(&registry)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&registry)?),
    }

    Ok(())
}
