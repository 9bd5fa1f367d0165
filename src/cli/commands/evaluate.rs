//! Evaluate command implementation

use super::{spec_or_default, to_pretty_json};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{EvaluateArgs, OutputFormat};
use crate::eval::classification::{
    top_k_recall, BinaryConfusion, ClassificationSummary, ThresholdMetrics,
};
use crate::io::{load_metadata, load_scored_samples};
use crate::report::{evaluation_markdown, evaluation_text};

pub fn run_evaluate(args: EvaluateArgs, level: LogLevel) -> Result<(), String> {
    let spec = spec_or_default(args.config.as_deref())?;
    let metadata = load_metadata(&args.metadata).map_err(|e| e.to_string())?;
    let samples = load_scored_samples(&args.scores).map_err(|e| e.to_string())?;

    let (labels, scores): (Vec<bool>, Vec<f64>) = samples
        .iter()
        .filter_map(|s| s.label.map(|label| (label, s.probability)))
        .unzip();
    if labels.is_empty() {
        return Err(format!("No labelled samples in {}", args.scores.display()));
    }
    if labels.len() < samples.len() {
        log(
            level,
            LogLevel::Verbose,
            &format!("  Skipping {} unlabeled samples", samples.len() - labels.len()),
        );
    }

    let threshold = metadata.threshold.threshold;
    let confusion =
        BinaryConfusion::at_threshold(&labels, &scores, threshold).map_err(|e| e.to_string())?;
    let metrics = ThresholdMetrics::compute(&confusion, &labels, &scores).map_err(|e| e.to_string())?;
    let summary = ClassificationSummary::compute(&labels, &scores);
    let top_k = top_k_recall(&labels, &scores, spec.threshold.top_k_fraction)
        .map_err(|e| e.to_string())?;
    let expected_cost = metadata.costs.expected_cost(&confusion);

    log(level, LogLevel::Normal, &format!("Evaluating {} on {} samples", metadata.model_name, labels.len()));
    match args.format {
        OutputFormat::Json => {
            let result = serde_json::json!({
                "model_name": metadata.model_name,
                "threshold": threshold,
                "confusion": confusion,
                "metrics": metrics,
                "summary": summary,
                "top_k_fraction": spec.threshold.top_k_fraction,
                "top_k_recall": top_k,
                "expected_cost": expected_cost,
            });
            println!("{}", to_pretty_json(&result)?);
        }
        OutputFormat::Markdown => {
            print!("{}", evaluation_markdown(threshold, &confusion, &metrics, &summary));
        }
        OutputFormat::Text => {
            log(level, LogLevel::Normal, evaluation_text(threshold, &confusion, &metrics, &summary).trim_end());
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "  Top {:.0}% recall {top_k:.4}  Expected cost {expected_cost:.2}",
                    spec.threshold.top_k_fraction * 100.0
                ),
            );
        }
    }
    Ok(())
}
