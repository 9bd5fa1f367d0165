//! CLI command implementations

mod calibrate;
mod drift;
mod evaluate;
mod validate;


use crate::cli::LogLevel;
use crate::config::{load_spec, Cli, Command, MonitorSpec};
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Calibrate(args) => calibrate::run_calibrate(args, log_level),
        Command::Evaluate(args) => evaluate::run_evaluate(args, log_level),
        Command::Drift(args) => drift::run_drift(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}

/// Configured spec, or the defaults when no file was given
fn spec_or_default(path: Option<&Path>) -> Result<MonitorSpec, String> {
    match path {
        Some(path) => load_spec(path).map_err(|e| e.to_string()),
        None => Ok(MonitorSpec::default()),
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {e}"))
}
