//! Ledgerly command line
//!
//! Offline checks of journal and report JSON files, using the same
//! validation the client runs before submitting.

mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ledgerly_core::ledger::Tolerance;
use ledgerly_shared::AppConfig;
use ledgerly_shared::config::LoggingConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Cli, Command, check_journal, check_report};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!logging.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let tolerance =
        Tolerance::from_config(&config.validation).context("Invalid validation.tolerance")?;

    let path = cli.command.file();
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    info!(file = %path.display(), tolerance = %tolerance.value(), "Running check");

    let (ok, output) = match cli.command {
        Command::CheckJournal { .. } => {
            let check = check_journal(&input, tolerance)?;
            (check.valid, serde_json::to_string_pretty(&check)?)
        }
        Command::CheckReport { kind, .. } => {
            let check = check_report(kind, &input, tolerance)?;
            (check.ok, serde_json::to_string_pretty(&check)?)
        }
    };

    println!("{output}");
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
