//! Binary classification metrics for churn decisions
//!
//! Provides:
//! - Confusion counts at a decision threshold (`score >= threshold` is positive)
//! - Precision, recall, F1 and top-k recall at that threshold
//! - Threshold-free ranking metrics (ROC-AUC, average precision, Brier score)

mod confusion;
mod metrics;
mod ranking;


pub use confusion::BinaryConfusion;
pub use metrics::{top_k_recall, ThresholdMetrics, TOP_DECILE};
pub use ranking::{average_precision, brier_score, roc_auc, ClassificationSummary};
