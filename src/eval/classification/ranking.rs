//! Threshold-free ranking metrics

use serde::{Deserialize, Serialize};

/// Ranking metrics over a full set of scored samples
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    /// Area under the ROC curve (None when only one class is present)
    pub roc_auc: Option<f64>,
    /// Average precision, i.e. step-interpolated PR-AUC (None without positives)
    pub average_precision: Option<f64>,
    /// Mean squared error of the probabilities
    pub brier: f64,
    /// Number of samples
    pub samples: usize,
    /// Number of labelled positives
    pub positives: usize,
}

impl ClassificationSummary {
    /// Compute all ranking metrics
    pub fn compute(labels: &[bool], scores: &[f64]) -> Self {
        Self {
            roc_auc: roc_auc(labels, scores),
            average_precision: average_precision(labels, scores),
            brier: brier_score(labels, scores),
            samples: labels.len(),
            positives: labels.iter().filter(|&&l| l).count(),
        }
    }
}

/// ROC-AUC as the Mann-Whitney U statistic, ties receive averaged ranks
pub fn roc_auc(labels: &[bool], scores: &[f64]) -> Option<f64> {
    let n_pos = labels.iter().filter(|&&l| l).count();
    let n_neg = labels.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return None;
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut rank_sum_pos = 0.0;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        // 1-based ranks i+1..=j+1 share their mean
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            if labels[idx] {
                rank_sum_pos += avg_rank;
            }
        }
        i = j + 1;
    }

    let n_pos_f = n_pos as f64;
    let u = rank_sum_pos - n_pos_f * (n_pos_f + 1.0) / 2.0;
    Some(u / (n_pos_f * n_neg as f64))
}

/// Average precision: Σ (R_k - R_{k-1}) · P_k over distinct score cut points
pub fn average_precision(labels: &[bool], scores: &[f64]) -> Option<f64> {
    let n_pos = labels.iter().filter(|&&l| l).count();
    if n_pos == 0 {
        return None;
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut prev_recall = 0.0;
    let mut ap = 0.0;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j < order.len() && scores[order[j]] == scores[order[i]] {
            if labels[order[j]] {
                tp += 1;
            } else {
                fp += 1;
            }
            j += 1;
        }
        let recall = tp as f64 / n_pos as f64;
        let precision = tp as f64 / (tp + fp) as f64;
        ap += (recall - prev_recall) * precision;
        prev_recall = recall;
        i = j;
    }
    Some(ap)
}

/// Mean of `(p - y)^2`; 0 for an empty input
pub fn brier_score(labels: &[bool], scores: &[f64]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let sum: f64 = labels
        .iter()
        .zip(scores.iter())
        .map(|(&l, &p)| {
            let y = if l { 1.0 } else { 0.0 };
            (p - y).powi(2)
        })
        .sum();
    sum / labels.len() as f64
}
