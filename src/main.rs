//! Churnguard CLI
//!
//! # Usage
//!
//! ```bash
//! # Pick the threshold and capture the drift reference
//! churnguard calibrate --scores val.json --train train.json --output model.json
//!
//! # Metrics at the stored threshold
//! churnguard evaluate --scores holdout.json --metadata model.json
//!
//! # Check a new batch, failing the job on severe drift
//! churnguard drift --metadata model.json --batch batch.json --fail-on-severe
//!
//! # Validate config
//! churnguard validate monitor.yaml
//! ```

use churnguard::cli::{init_tracing, run_command, Cli, LogLevel};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
