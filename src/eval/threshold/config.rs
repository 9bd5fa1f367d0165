//! Configuration for threshold selection.

use super::selector::DEFAULT_CANDIDATE_COUNT;
use serde::{Deserialize, Serialize};

/// Configuration for threshold selection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Number of evenly spaced candidates when samples are plentiful
    pub candidate_count: usize,
    /// Threshold used when the validation set lacks one of the classes
    pub default_threshold: f64,
    /// Fraction of highest-scored samples used for top-k recall reporting
    pub top_k_fraction: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            default_threshold: 0.5,
            top_k_fraction: 0.1,
        }
    }
}
