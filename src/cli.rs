//! CLI command implementations for fastlane.

pub(crate) mod check_config;
pub(crate) mod locations;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output format for commands that print results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// One step of a scripted session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step {
    /// Advance this many ticks.
    Tick(u64),
    /// Advance this many seconds of play at the configured fps.
    Seconds(f64),
    /// Attempt an action, named as `Location/Action`.
    Action {
        /// Location display name.
        location: String,
        /// Action display name.
        action: String,
    },
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "tick" {
            return Ok(Step::Tick(1));
        }
        if let Some(count) = s.strip_prefix("tick=") {
            return count
                .parse()
                .map(Step::Tick)
                .map_err(|e| format!("invalid tick count '{count}': {e}"));
        }
        if let Some(seconds) = s.strip_prefix("seconds=") {
            return match seconds.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Ok(Step::Seconds(value)),
                Ok(value) => Err(format!("seconds must be a non-negative number, got {value}")),
                Err(e) => Err(format!("invalid seconds '{seconds}': {e}")),
            };
        }
        match s.split_once('/') {
            Some((location, action)) if !location.is_empty() && !action.is_empty() => {
                Ok(Step::Action {
                    location: location.trim().to_string(),
                    action: action.trim().to_string(),
                })
            }
            _ => Err(format!(
                "unrecognized step '{s}': expected tick, tick=N, seconds=S or Location/Action"
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Tick(1) => write!(f, "tick"),
            Step::Tick(n) => write!(f, "tick={n}"),
            Step::Seconds(s) => write!(f, "seconds={s}"),
            Step::Action { location, action } => write!(f, "{location}/{action}"),
        }
    }
}

/// CLI error type.
#[derive(Debug, Error)]
#[error("{message}")]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<fastlane::ConfigError> for CliError {
    fn from(e: fastlane::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<fastlane::SessionError> for CliError {
    fn from(e: fastlane::SessionError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticks() {
        assert_eq!("tick".parse::<Step>().unwrap(), Step::Tick(1));
        assert_eq!("tick=30".parse::<Step>().unwrap(), Step::Tick(30));
        assert!("tick=-1".parse::<Step>().is_err());
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!("seconds=0.5".parse::<Step>().unwrap(), Step::Seconds(0.5));
        assert!("seconds=-2".parse::<Step>().is_err());
        assert!("seconds=soon".parse::<Step>().is_err());
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(
            "Monolith Burgers/Work Shift".parse::<Step>().unwrap(),
            Step::Action {
                location: "Monolith Burgers".to_string(),
                action: "Work Shift".to_string(),
            }
        );
        assert!("Monolith Burgers/".parse::<Step>().is_err());
        assert!("nap".parse::<Step>().is_err());
    }

    #[test]
    fn test_step_display_round_trips() {
        for text in ["tick", "tick=5", "Metro University/Study"] {
            assert_eq!(text.parse::<Step>().unwrap().to_string(), text);
        }
    }
}
