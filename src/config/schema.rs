//! Configuration schema for churn threshold selection and drift monitoring.

use crate::eval::drift::DriftConfig;
use crate::eval::retrain::RetrainPolicy;
use crate::eval::threshold::{CostModel, ThresholdConfig};
use serde::{Deserialize, Serialize};

/// Revenue lost when a churner is not contacted
pub const DEFAULT_CHURN_LOSS: f64 = 500.0;

/// Cost of one retention offer
pub const DEFAULT_RETENTION_OFFER_COST: f64 = 50.0;

fn default_cost() -> CostModel {
    CostModel::churn_economics(DEFAULT_CHURN_LOSS, DEFAULT_RETENTION_OFFER_COST)
}

/// Complete monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSpec {
    /// Per-outcome costs used by threshold selection
    #[serde(default = "default_cost")]
    pub cost: CostModel,

    /// Threshold search settings
    #[serde(default)]
    pub threshold: ThresholdConfig,

    /// PSI severity levels and reference binning
    #[serde(default)]
    pub drift: DriftConfig,

    /// When drift should trigger a retrain
    #[serde(default)]
    pub retrain: RetrainPolicy,
}

impl Default for MonitorSpec {
    fn default() -> Self {
        Self {
            cost: default_cost(),
            threshold: ThresholdConfig::default(),
            drift: DriftConfig::default(),
            retrain: RetrainPolicy::default(),
        }
    }
}
