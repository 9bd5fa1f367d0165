//! Markdown reports

use super::{optional_metric, source_label};
use crate::eval::classification::{BinaryConfusion, ClassificationSummary, ThresholdMetrics};
use crate::eval::drift::DriftReport;
use crate::eval::retrain::RetrainAdvice;
use crate::eval::threshold::OperatingThreshold;
use std::fmt::Write as FmtWrite;

/// Operating threshold with the metrics of its search
pub fn threshold_markdown(operating: &OperatingThreshold) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "## Decision Threshold\n");
    let _ = writeln!(output, "| Field | Value |");
    let _ = writeln!(output, "|-------|-------|");
    let _ = writeln!(output, "| Threshold | {:.4} |", operating.threshold);
    let _ = writeln!(output, "| Source | {} |", source_label(&operating.source));

    if let Some(selection) = &operating.selection {
        let _ = writeln!(output, "| Expected cost | {:.2} |", selection.expected_cost);
        let _ = writeln!(output, "| Candidates evaluated | {} |", selection.candidates_evaluated);
        let _ = writeln!(output);
        write_metrics(&mut output, &selection.metrics);
        write_confusion(&mut output, &selection.confusion);
    }
    output
}

/// Metrics of a labelled set scored at a stored threshold
pub fn evaluation_markdown(
    threshold: f64,
    confusion: &BinaryConfusion,
    metrics: &ThresholdMetrics,
    summary: &ClassificationSummary,
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "## Evaluation at threshold {threshold:.4}\n");
    write_metrics(&mut output, metrics);
    let _ = writeln!(output, "| ROC-AUC | {} |", optional_metric(summary.roc_auc));
    let _ = writeln!(output, "| Average precision | {} |", optional_metric(summary.average_precision));
    let _ = writeln!(output, "| Brier score | {:.4} |", summary.brier);
    let _ = writeln!(output);
    write_confusion(&mut output, confusion);
    output
}

fn write_metrics(output: &mut String, metrics: &ThresholdMetrics) {
    let _ = writeln!(output, "| Metric | Value |");
    let _ = writeln!(output, "|--------|-------|");
    let _ = writeln!(output, "| Precision | {:.4} |", metrics.precision);
    let _ = writeln!(output, "| Recall | {:.4} |", metrics.recall);
    let _ = writeln!(output, "| F1 | {:.4} |", metrics.f1);
    let _ = writeln!(output, "| Top-decile recall | {:.4} |", metrics.top_decile_recall);
}

fn write_confusion(output: &mut String, cm: &BinaryConfusion) {
    let _ = writeln!(output, "\n| | Predicted churn | Predicted stay |");
    let _ = writeln!(output, "|---|---|---|");
    let _ = writeln!(output, "| Actual churn | {} | {} |", cm.tp, cm.fn_);
    let _ = writeln!(output, "| Actual stay | {} | {} |", cm.fp, cm.tn);
}

/// One row per feature in reference order, then the batch verdict
pub fn drift_markdown(report: &DriftReport, advice: Option<&RetrainAdvice>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "## Feature Drift\n");
    let _ = writeln!(output, "| Feature | Kind | PSI | Severity | Observations | Unseen |");
    let _ = writeln!(output, "|---------|------|-----|----------|--------------|--------|");
    for f in &report.features {
        let _ = writeln!(
            output,
            "| {} | {} | {:.4} | {} | {} | {} |",
            f.feature,
            f.kind.as_str(),
            f.psi,
            f.severity,
            f.observations,
            f.unseen_categories
        );
    }

    let summary = report.summary();
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "**Drifted:** {}/{} features ({:.1}%), {} severe",
        summary.drifted_features(),
        summary.total_features,
        summary.drift_percentage(),
        summary.severe
    );
    let verdict = if report.any_severe { "SEVERE DRIFT" } else { "OK" };
    let _ = writeln!(output, "\n**Batch status:** {verdict}");

    if let Some(advice) = advice {
        let action = if advice.retrain { "retrain" } else { "keep model" };
        let _ = writeln!(output, "\n**Recommendation:** {action} ({})", advice.reason);
    }
    output
}
