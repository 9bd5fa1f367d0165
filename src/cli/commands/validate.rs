//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, MonitorSpec, ValidateArgs};

/// Format the resolved configuration as indented lines
pub fn format_spec_info(spec: &MonitorSpec) -> String {
    let cost = &spec.cost;
    let lines = [
        format!(
            "  Costs: FN {} FP {} TP {} TN {}",
            cost.cost_false_negative,
            cost.cost_false_positive,
            cost.cost_true_positive,
            cost.cost_true_negative
        ),
        format!(
            "  Threshold search: {} candidates, default {}",
            spec.threshold.candidate_count, spec.threshold.default_threshold
        ),
        format!(
            "  Drift: moderate {} severe {} ({} bins)",
            spec.drift.moderate, spec.drift.severe, spec.drift.bins
        ),
        format!("  Retrain policy: {:?}", spec.retrain),
    ];
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Validating config: {}", args.config.display()));

    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "✓ Configuration is valid");
    if args.detailed {
        log(level, LogLevel::Normal, "");
        log(level, LogLevel::Normal, &format_spec_info(&spec));
    }
    Ok(())
}
