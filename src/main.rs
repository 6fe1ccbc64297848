//! Fastlane CLI - drive headless game sessions and inspect the location catalog.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Fastlane - Life in the Fast Lane simulation
#[derive(Parser, Debug)]
#[command(name = "fastlane")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a scripted session and print the resulting stats
    Run {
        /// Steps to play in order: `tick`, `tick=N`, `seconds=S`, or `Location/Action`
        #[arg(required = true)]
        steps: Vec<cli::Step>,

        /// Game config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Player name (default: from config)
        #[arg(short, long)]
        name: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// List locations and their actions
    Locations {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Validate a game config file
    CheckConfig {
        /// Config file to validate
        #[arg(required = true)]
        config: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fastlane={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Run {
            steps,
            config,
            name,
            format,
        } => cli::run::execute(&steps, config, name, format),

        Commands::Locations { format } => cli::locations::execute(format),

        Commands::CheckConfig { config } => cli::check_config::execute(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
