//! CLI argument types
//!
//! ```bash
//! churnguard calibrate --scores val.json --train train.json --output model.json
//! churnguard evaluate --scores holdout.json --metadata model.json
//! churnguard drift --metadata model.json --batch week42.json --fail-on-severe
//! churnguard validate monitor.yaml
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Churnguard: cost-based churn thresholds and feature drift monitoring
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "churnguard")]
#[command(version)]
#[command(about = "Cost-based decision thresholds and PSI drift monitoring for churn models")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Select the operating threshold and capture the drift reference
    Calibrate(CalibrateArgs),

    /// Report metrics at the stored threshold
    Evaluate(EvaluateArgs),

    /// Compare a feature batch with the stored reference
    Drift(DriftArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for the calibrate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CalibrateArgs {
    /// Validation scores (JSON array of {id, label, probability})
    #[arg(long)]
    pub scores: PathBuf,

    /// Training feature columns (JSON object of feature -> values)
    #[arg(long)]
    pub train: PathBuf,

    /// Monitor configuration (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Training column holding the target; excluded from the drift reference
    #[arg(long, default_value = "Churn")]
    pub label_column: String,

    /// Model name stored in the metadata
    #[arg(long, default_value = "churn-model")]
    pub model_name: String,

    /// Where to write the model metadata
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format for the summary (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Labelled scores to evaluate
    #[arg(long)]
    pub scores: PathBuf,

    /// Model metadata written by calibrate
    #[arg(long)]
    pub metadata: PathBuf,

    /// Monitor configuration (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the drift command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DriftArgs {
    /// Model metadata written by calibrate
    #[arg(long)]
    pub metadata: PathBuf,

    /// Feature batch (JSON object of feature -> values)
    #[arg(long)]
    pub batch: PathBuf,

    /// Monitor configuration (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Output format (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with failure when any feature drifts severely
    #[arg(long)]
    pub fail_on_severe: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show the resolved configuration
    #[arg(short, long)]
    pub detailed: bool,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, markdown"
            )),
        }
    }
}

/// Parse command-line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
