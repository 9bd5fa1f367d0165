//! Drift command implementation

use super::{spec_or_default, to_pretty_json};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{DriftArgs, OutputFormat};
use crate::eval::drift::DriftMonitor;
use crate::io::{load_batch, load_metadata};
use crate::report::{drift_markdown, drift_text};
use std::path::Path;

pub fn run_drift(args: DriftArgs, level: LogLevel) -> Result<(), String> {
    let spec = spec_or_default(args.config.as_deref())?;
    let metadata = load_metadata(&args.metadata).map_err(|e| e.to_string())?;
    let batch = load_batch(&args.batch).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format!("Monitoring: {}", args.batch.display()));
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Severity levels (PSI): moderate {} severe {}",
            spec.drift.moderate, spec.drift.severe
        ),
    );

    let monitor = DriftMonitor::new(spec.drift.severity_thresholds());
    let report = monitor.check(&metadata.reference, &batch).map_err(|e| e.to_string())?;
    let advice = spec.retrain.evaluate(&report);

    match args.format {
        OutputFormat::Json => {
            let result = serde_json::json!({ "report": report, "retrain": advice });
            println!("{}", to_pretty_json(&result)?);
        }
        OutputFormat::Markdown => print!("{}", drift_markdown(&report, Some(&advice))),
        OutputFormat::Text => {
            log(level, LogLevel::Normal, drift_text(&report).trim_end());
            if advice.retrain {
                log(level, LogLevel::Normal, &format!("  Retraining recommended: {}", advice.reason));
            }
        }
    }

    if let Some(path) = &args.report {
        write_report(path, &report, &advice)?;
        log(level, LogLevel::Verbose, &format!("  Report written to {}", path.display()));
    }

    if args.fail_on_severe && report.any_severe {
        return Err(format!(
            "Severe drift detected in: {}",
            report.severe_features().join(", ")
        ));
    }
    Ok(())
}

/// Markdown for `.md` paths, JSON otherwise
fn write_report(
    path: &Path,
    report: &crate::eval::drift::DriftReport,
    advice: &crate::eval::retrain::RetrainAdvice,
) -> Result<(), String> {
    let is_markdown = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"));
    if is_markdown {
        std::fs::write(path, drift_markdown(report, Some(advice)))
            .map_err(|e| format!("Failed to write report {}: {e}", path.display()))
    } else {
        let result = serde_json::json!({ "report": report, "retrain": advice });
        crate::io::save_json(&result, path).map_err(|e| e.to_string())
    }
}
