//! PSI drift monitor.

use super::batch::{FeatureBatch, FeatureValues};
use super::psi::{bin_proportions, psi, to_proportions, PSI_FLOOR};
use super::reference::{FeatureBaseline, FeatureReference, ReferenceDistribution};
use super::types::{DriftReport, FeatureDrift, SeverityThresholds};
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Callback invoked with a report that contains drift
pub type DriftCallback = Box<dyn Fn(&DriftReport) + Send + Sync>;

/// Compares incoming batches with a training reference
pub struct DriftMonitor {
    thresholds: SeverityThresholds,
    callbacks: Vec<DriftCallback>,
}

impl Default for DriftMonitor {
    fn default() -> Self {
        Self::new(SeverityThresholds::default())
    }
}

impl std::fmt::Debug for DriftMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriftMonitor")
            .field("thresholds", &self.thresholds)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl DriftMonitor {
    /// Create a monitor with the given severity levels
    pub fn new(thresholds: SeverityThresholds) -> Self {
        Self { thresholds, callbacks: Vec::new() }
    }

    /// Configured severity levels
    pub fn thresholds(&self) -> SeverityThresholds {
        self.thresholds
    }

    /// Register a callback fired when any feature drifts
    pub fn on_drift<F>(&mut self, callback: F)
    where
        F: Fn(&DriftReport) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Compute drift and fire callbacks if any feature drifted
    pub fn check(&self, reference: &FeatureReference, batch: &FeatureBatch) -> Result<DriftReport> {
        let report = compute_drift(reference, batch, &self.thresholds)?;
        if report.summary().has_drift() {
            for callback in &self.callbacks {
                callback(&report);
            }
        }
        Ok(report)
    }
}

/// PSI and severity for every reference feature
///
/// Features are reported in reference order. Batch columns with no
/// reference counterpart are ignored. Errors abort the whole batch; no
/// partial report is returned.
pub fn compute_drift(
    reference: &FeatureReference,
    batch: &FeatureBatch,
    thresholds: &SeverityThresholds,
) -> Result<DriftReport> {
    thresholds.validate()?;
    if batch.values().all(FeatureValues::is_empty) {
        return Err(Error::EmptyBatch);
    }

    let mut features = Vec::with_capacity(reference.len());
    for baseline in reference.features() {
        let values = batch
            .get(&baseline.name)
            .ok_or_else(|| Error::MissingFeature(baseline.name.clone()))?;
        let drift = feature_drift(baseline, values, thresholds)?;
        debug!(
            feature = %drift.feature,
            psi = drift.psi,
            severity = %drift.severity,
            observations = drift.observations,
            "feature drift"
        );
        features.push(drift);
    }

    let report = DriftReport::new(features);
    let summary = report.summary();
    info!(
        features = summary.total_features,
        moderate = summary.moderate,
        severe = summary.severe,
        "drift check complete"
    );
    if report.any_severe {
        warn!(features = ?report.severe_features(), "severe drift detected");
    }
    Ok(report)
}

fn feature_drift(
    baseline: &FeatureBaseline,
    values: &FeatureValues,
    thresholds: &SeverityThresholds,
) -> Result<FeatureDrift> {
    let kind = baseline.distribution.kind();
    // An empty or all-null column carries no type information.
    if values.observed() == 0 {
        return Err(Error::EmptyBatch);
    }
    let (score, observations, unseen_categories) = match (&baseline.distribution, values) {
        (ReferenceDistribution::Numeric { edges, proportions }, FeatureValues::Numeric(v)) => {
            let (current, observed) = bin_proportions(edges, v);
            (psi(proportions, &current), observed, 0)
        }
        (
            ReferenceDistribution::Categorical { categories, proportions },
            FeatureValues::Categorical(v),
        ) => categorical_psi(categories, proportions, v),
        _ => {
            return Err(Error::FeatureTypeMismatch {
                feature: baseline.name.clone(),
                expected: kind.as_str(),
                actual: values.kind().as_str(),
            })
        }
    };

    Ok(FeatureDrift {
        feature: baseline.name.clone(),
        kind,
        psi: score,
        severity: thresholds.classify(score),
        observations,
        unseen_categories,
    })
}

/// Categories unseen in training share a trailing "other" bin whose
/// reference proportion is the floor.
fn categorical_psi(
    categories: &[String],
    proportions: &[f64],
    values: &[String],
) -> (f64, usize, usize) {
    let index: HashMap<&str, usize> =
        categories.iter().enumerate().map(|(i, c)| (c.as_str(), i)).collect();
    let other = categories.len();
    let mut counts = vec![0usize; other + 1];
    for value in values {
        let bin = index.get(value.as_str()).copied().unwrap_or(other);
        counts[bin] += 1;
    }
    let unseen = counts[other];

    let mut reference = proportions.to_vec();
    reference.push(PSI_FLOOR);
    let current = to_proportions(&counts, values.len());
    (psi(&reference, &current), values.len(), unseen)
}
