//! Plain text summaries for terminal output

use super::{optional_metric, source_label};
use crate::eval::classification::{BinaryConfusion, ClassificationSummary, ThresholdMetrics};
use crate::eval::drift::DriftReport;
use crate::eval::threshold::OperatingThreshold;
use std::fmt::Write as FmtWrite;

/// Short summary of an operating threshold
pub fn threshold_text(operating: &OperatingThreshold) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  Threshold: {:.4}", operating.threshold);
    let _ = writeln!(output, "  Source: {}", source_label(&operating.source));
    if let Some(selection) = &operating.selection {
        let _ = writeln!(output, "  Expected cost: {:.2}", selection.expected_cost);
        let _ = writeln!(
            output,
            "  Precision {:.4}  Recall {:.4}  F1 {:.4}",
            selection.metrics.precision, selection.metrics.recall, selection.metrics.f1
        );
    }
    output
}

/// Metrics at a stored threshold
pub fn evaluation_text(
    threshold: f64,
    confusion: &BinaryConfusion,
    metrics: &ThresholdMetrics,
    summary: &ClassificationSummary,
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  Threshold: {threshold:.4}");
    let _ = writeln!(
        output,
        "  Precision {:.4}  Recall {:.4}  F1 {:.4}  Top-decile recall {:.4}",
        metrics.precision, metrics.recall, metrics.f1, metrics.top_decile_recall
    );
    let _ = writeln!(
        output,
        "  ROC-AUC {}  Average precision {}  Brier {:.4}",
        optional_metric(summary.roc_auc),
        optional_metric(summary.average_precision),
        summary.brier
    );
    let _ = write!(output, "{confusion}");
    output
}

/// Aligned per-feature table
pub fn drift_text(report: &DriftReport) -> String {
    let width = report.features.iter().map(|f| f.feature.len()).max().unwrap_or(7).max(7);
    let mut output = String::new();
    let _ = writeln!(output, "  {:<width$}  {:>8}  {}", "Feature", "PSI", "Severity");
    for f in &report.features {
        let _ = writeln!(output, "  {:<width$}  {:>8.4}  {}", f.feature, f.psi, f.severity);
    }
    let summary = report.summary();
    let _ = writeln!(
        output,
        "  {} of {} features drifted, {} severe",
        summary.drifted_features(),
        summary.total_features,
        summary.severe
    );
    output
}
