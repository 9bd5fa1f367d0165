//! Confusion counts for a binary decision rule

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confusion counts at a single decision threshold
///
/// A sample is predicted positive when its score is `>= threshold`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfusion {
    /// Predicted positive, labelled positive
    pub tp: usize,
    /// Predicted positive, labelled negative
    pub fp: usize,
    /// Predicted negative, labelled negative
    pub tn: usize,
    /// Predicted negative, labelled positive
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl BinaryConfusion {
    /// Count outcomes of `score >= threshold` against ground truth
    pub fn at_threshold(labels: &[bool], scores: &[f64], threshold: f64) -> Result<Self> {
        if labels.len() != scores.len() {
            return Err(Error::InvalidParameter(format!(
                "labels ({}) and scores ({}) differ in length",
                labels.len(),
                scores.len()
            )));
        }

        let mut cm = Self::default();
        for (&label, &score) in labels.iter().zip(scores.iter()) {
            match (score >= threshold, label) {
                (true, true) => cm.tp += 1,
                (true, false) => cm.fp += 1,
                (false, false) => cm.tn += 1,
                (false, true) => cm.fn_ += 1,
            }
        }
        Ok(cm)
    }

    /// Build from pre-sorted class scores using binary search
    ///
    /// `positive_scores` and `negative_scores` must be sorted ascending.
    pub fn from_sorted(positive_scores: &[f64], negative_scores: &[f64], threshold: f64) -> Self {
        let fn_ = positive_scores.partition_point(|&s| s < threshold);
        let tn = negative_scores.partition_point(|&s| s < threshold);
        Self {
            tp: positive_scores.len() - fn_,
            fp: negative_scores.len() - tn,
            tn,
            fn_,
        }
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// Number of labelled positives
    pub fn positives(&self) -> usize {
        self.tp + self.fn_
    }

    /// Number of labelled negatives
    pub fn negatives(&self) -> usize {
        self.fp + self.tn
    }

    /// Number of positive predictions
    pub fn predicted_positive(&self) -> usize {
        self.tp + self.fp
    }

    /// TP / (TP + FP), 0 when nothing is predicted positive
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// TP / (TP + FN), 0 when there are no positives
    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// Harmonic mean of precision and recall
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        }
    }

    /// Fraction of correct decisions
    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total())
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl fmt::Display for BinaryConfusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "        {:>8} {:>8}", "Pred 0", "Pred 1")?;
        writeln!(f, "True 0  {:>8} {:>8}", self.tn, self.fp)?;
        writeln!(f, "True 1  {:>8} {:>8}", self.fn_, self.tp)
    }
}
