//! Drift Monitoring Module
//!
//! Compares incoming feature batches against the distribution captured at
//! training time using the Population Stability Index (PSI):
//!
//! - Numeric features are bucketed into the reference bin edges
//! - Categorical features use one bin per reference category plus a
//!   synthetic bin for categories never seen in training
//!
//! The reference snapshot is always passed in explicitly; the monitor keeps
//! no state between calls.

mod batch;
mod builder;
mod monitor;
mod psi;
mod reference;
mod types;


pub use batch::{FeatureBatch, FeatureValues};
pub use builder::{quantile, ReferenceBuilder};
pub use monitor::{compute_drift, DriftCallback, DriftMonitor};
pub use psi::{bin_proportions, bucket_index, psi, PSI_FLOOR};
pub use reference::{FeatureBaseline, FeatureReference, ReferenceDistribution};
pub use types::{
    DriftConfig, DriftReport, DriftSummary, FeatureDrift, FeatureKind, Severity,
    SeverityThresholds,
};
