//! Exhaustive expected-cost search over candidate thresholds.

use super::cost::CostModel;
use super::result::ThresholdResult;
use super::sample::ScoredSample;
use crate::error::{Error, Result};
use crate::eval::classification::{BinaryConfusion, ThresholdMetrics};
use tracing::{debug, info, trace};

/// Default number of evenly spaced candidates
pub const DEFAULT_CANDIDATE_COUNT: usize = 100;

/// Picks the threshold minimising expected cost on labelled samples
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdSelector {
    candidate_count: usize,
}

impl Default for ThresholdSelector {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_COUNT)
    }
}

impl ThresholdSelector {
    /// Create a selector evaluating up to `candidate_count` grid points
    pub fn new(candidate_count: usize) -> Self {
        Self { candidate_count }
    }

    /// Configured grid size
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Search candidate thresholds and return the cheapest one
    ///
    /// Ties are broken towards the highest threshold. The returned threshold
    /// is always one of the evaluated candidates and metrics are computed
    /// with `score >= threshold`.
    pub fn select(&self, samples: &[ScoredSample], cost: &CostModel) -> Result<ThresholdResult> {
        cost.validate()?;
        if self.candidate_count < 2 {
            return Err(Error::InvalidParameter(format!(
                "candidate_count must be at least 2, got {}",
                self.candidate_count
            )));
        }

        let (labels, scores) = split_labelled(samples)?;

        let mut positives: Vec<f64> = Vec::new();
        let mut negatives: Vec<f64> = Vec::new();
        for (&label, &score) in labels.iter().zip(scores.iter()) {
            if label {
                positives.push(score);
            } else {
                negatives.push(score);
            }
        }
        if positives.is_empty() || negatives.is_empty() {
            return Err(Error::DegenerateLabelSet {
                positives: positives.len(),
                negatives: negatives.len(),
            });
        }
        positives.sort_by(f64::total_cmp);
        negatives.sort_by(f64::total_cmp);

        let mut sorted = scores.clone();
        sorted.sort_by(f64::total_cmp);
        let candidates = candidate_thresholds(&sorted, self.candidate_count);

        let mut best: Option<(f64, BinaryConfusion, f64)> = None;
        let mut min_cost = f64::INFINITY;
        let mut max_cost = f64::NEG_INFINITY;

        // Candidates ascend, so `<=` keeps the highest threshold among ties.
        for &threshold in &candidates {
            let cm = BinaryConfusion::from_sorted(&positives, &negatives, threshold);
            let expected = cost.expected_cost(&cm);
            trace!(threshold, expected, tp = cm.tp, fp = cm.fp, "candidate");

            min_cost = min_cost.min(expected);
            max_cost = max_cost.max(expected);
            match best {
                Some((_, _, best_cost)) if expected > best_cost => {}
                _ => best = Some((threshold, cm, expected)),
            }
        }

        let (threshold, confusion, expected_cost) = best.ok_or_else(|| {
            Error::InvalidParameter("no candidate thresholds could be generated".to_string())
        })?;
        let metrics = ThresholdMetrics::compute(&confusion, &labels, &scores)?;
        let cost_is_flat = candidates.len() > 1 && min_cost == max_cost;

        debug!(
            candidates = candidates.len(),
            positives = positives.len(),
            negatives = negatives.len(),
            cost_is_flat,
            "threshold search complete"
        );
        info!(threshold, expected_cost, recall = metrics.recall, "selected decision threshold");

        Ok(ThresholdResult {
            threshold,
            confusion,
            expected_cost,
            metrics,
            candidates_evaluated: candidates.len(),
            cost_is_flat,
        })
    }
}

/// Select a cost-minimising threshold with `candidate_count` grid points
pub fn select(
    samples: &[ScoredSample],
    cost: &CostModel,
    candidate_count: usize,
) -> Result<ThresholdResult> {
    ThresholdSelector::new(candidate_count).select(samples, cost)
}

/// Candidate thresholds for ascending-sorted probabilities
///
/// With fewer samples than `candidate_count`, every distinct probability is a
/// candidate; expected cost only changes at those points so the optimum is
/// exact. Otherwise `candidate_count` evenly spaced points span
/// `[min, max]`, both ends included.
pub fn candidate_thresholds(sorted_probabilities: &[f64], candidate_count: usize) -> Vec<f64> {
    let (Some(&lo), Some(&hi)) = (sorted_probabilities.first(), sorted_probabilities.last())
    else {
        return Vec::new();
    };

    if sorted_probabilities.len() < candidate_count {
        let mut distinct = sorted_probabilities.to_vec();
        distinct.dedup();
        return distinct;
    }

    if lo == hi || candidate_count < 2 {
        return vec![lo];
    }

    let steps = (candidate_count - 1) as f64;
    let mut grid: Vec<f64> = (0..candidate_count)
        .map(|i| lo + (hi - lo) * (i as f64 / steps))
        .collect();
    // Pin the upper end against rounding drift.
    if let Some(last) = grid.last_mut() {
        *last = hi;
    }
    grid
}

fn split_labelled(samples: &[ScoredSample]) -> Result<(Vec<bool>, Vec<f64>)> {
    let mut labels = Vec::with_capacity(samples.len());
    let mut scores = Vec::with_capacity(samples.len());
    for sample in samples {
        if !(0.0..=1.0).contains(&sample.probability) {
            return Err(Error::InvalidParameter(format!(
                "sample '{}' has probability {} outside [0, 1]",
                sample.id, sample.probability
            )));
        }
        let label = sample.label.ok_or_else(|| {
            Error::InvalidParameter(format!(
                "validation sample '{}' has no label",
                sample.id
            ))
        })?;
        labels.push(label);
        scores.push(sample.probability);
    }
    Ok((labels, scores))
}
