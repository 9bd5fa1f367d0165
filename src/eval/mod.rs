//! Decision threshold selection and drift monitoring for churn scoring.
//!
//! ## Architecture
//!
//! - `classification`: confusion counts and metrics at a threshold, ranking metrics
//! - `threshold`: cost-optimal threshold search and the operating threshold
//! - `drift`: PSI drift monitoring against a training reference
//! - `retrain`: retraining advice derived from a drift report
//!
//! ## Example
//!
//! ```ignore
//! use churnguard::eval::{select, CostModel};
//!
//! let result = select(&samples, &CostModel::new(500.0, 50.0), 100)?;
//! println!("threshold {:.3} costs {:.1}", result.threshold, result.expected_cost);
//! ```

pub mod classification;
pub mod drift;
pub mod retrain;
pub mod threshold;

pub use classification::{BinaryConfusion, ClassificationSummary, ThresholdMetrics};
pub use drift::{
    compute_drift, DriftConfig, DriftMonitor, DriftReport, FeatureBatch, FeatureReference,
    FeatureValues, ReferenceBuilder, Severity, SeverityThresholds,
};
pub use retrain::{RetrainAdvice, RetrainPolicy};
pub use threshold::{
    resolve_operating_threshold, select, CostModel, OperatingThreshold, ScoredSample,
    ThresholdConfig, ThresholdResult, ThresholdSelector, ThresholdSource,
};
