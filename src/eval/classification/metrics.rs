//! Metrics reported at a chosen decision threshold

use super::confusion::BinaryConfusion;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fraction used for top-decile recall
pub const TOP_DECILE: f64 = 0.1;

/// Metric set evaluated at exactly one threshold
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMetrics {
    /// TP / (TP + FP)
    pub precision: f64,
    /// TP / (TP + FN)
    pub recall: f64,
    /// F1 score
    pub f1: f64,
    /// Share of positives captured by the highest-scored 10% of samples
    pub top_decile_recall: f64,
}

impl ThresholdMetrics {
    /// Compute from confusion counts plus the raw scores for top-decile recall
    pub fn compute(cm: &BinaryConfusion, labels: &[bool], scores: &[f64]) -> Result<Self> {
        Ok(Self {
            precision: cm.precision(),
            recall: cm.recall(),
            f1: cm.f1(),
            top_decile_recall: top_k_recall(labels, scores, TOP_DECILE)?,
        })
    }
}

/// Recall among the `max(1, floor(n * fraction))` highest-scored samples
///
/// Returns positives captured in the top-k divided by `max(1, positives)`.
/// Ties in score keep input order.
pub fn top_k_recall(labels: &[bool], scores: &[f64], fraction: f64) -> Result<f64> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(Error::InvalidParameter(format!(
            "top-k fraction must be in (0, 1], got {fraction}"
        )));
    }
    if labels.len() != scores.len() {
        return Err(Error::InvalidParameter(format!(
            "labels ({}) and scores ({}) differ in length",
            labels.len(),
            scores.len()
        )));
    }
    if labels.is_empty() {
        return Ok(0.0);
    }

    let k = ((labels.len() as f64 * fraction) as usize).max(1);
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let captured = order.iter().take(k).filter(|&&i| labels[i]).count();
    let positives = labels.iter().filter(|&&l| l).count();
    Ok(captured as f64 / positives.max(1) as f64)
}
