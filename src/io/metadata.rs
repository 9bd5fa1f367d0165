//! Model metadata persisted after calibration

use crate::eval::drift::FeatureReference;
use crate::eval::threshold::{CostModel, OperatingThreshold};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the scoring and monitoring jobs need from a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub model_name: String,

    /// Version of churnguard that wrote the file
    #[serde(default)]
    pub created_with: String,

    /// When calibration ran
    pub trained_at: DateTime<Utc>,

    /// Rows used to capture the drift reference
    pub training_rows: usize,

    /// Labelled rows used for threshold selection
    pub validation_rows: usize,

    /// Costs the threshold was optimised for
    pub costs: CostModel,

    /// Decision threshold and its provenance
    pub threshold: OperatingThreshold,

    /// Drift baseline
    pub reference: FeatureReference,
}

impl ModelMetadata {
    /// Create metadata stamped with the current time
    pub fn new(
        model_name: impl Into<String>,
        costs: CostModel,
        threshold: OperatingThreshold,
        reference: FeatureReference,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            created_with: env!("CARGO_PKG_VERSION").to_string(),
            trained_at: Utc::now(),
            training_rows: 0,
            validation_rows: 0,
            costs,
            threshold,
            reference,
        }
    }

    /// Record dataset sizes
    pub fn with_rows(mut self, training_rows: usize, validation_rows: usize) -> Self {
        self.training_rows = training_rows;
        self.validation_rows = validation_rows;
        self
    }
}
