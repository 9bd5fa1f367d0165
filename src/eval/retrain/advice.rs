//! Outcome of evaluating a retraining policy.

use serde::{Deserialize, Serialize};

/// Recommendation derived from a drift report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetrainAdvice {
    /// Whether the policy asks for a retrain
    pub retrain: bool,
    /// Features that satisfied the policy, in report order
    pub triggered_by: Vec<String>,
    /// Human-readable explanation
    pub reason: String,
}

impl RetrainAdvice {
    pub(crate) fn keep(reason: impl Into<String>) -> Self {
        Self { retrain: false, triggered_by: Vec::new(), reason: reason.into() }
    }

    pub(crate) fn retrain(triggered_by: Vec<String>, reason: impl Into<String>) -> Self {
        Self { retrain: true, triggered_by, reason: reason.into() }
    }
}
