//! Captures a [`FeatureReference`] from training columns.

use super::batch::FeatureValues;
use super::psi::{bin_proportions, to_proportions};
use super::reference::{FeatureBaseline, FeatureReference, ReferenceDistribution};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Builds a reference snapshot feature by feature
#[derive(Clone, Debug)]
pub struct ReferenceBuilder {
    bins: usize,
    features: Vec<FeatureBaseline>,
}

impl ReferenceBuilder {
    /// Create a builder using `bins` quantile bins for numeric features
    pub fn new(bins: usize) -> Self {
        Self { bins, features: Vec::new() }
    }

    /// Capture a numeric feature
    ///
    /// Cut points are the `i / bins` quantiles (linear interpolation) with
    /// duplicates removed, wrapped in ±infinity sentinels. NaN values are
    /// ignored.
    pub fn numeric(mut self, name: impl Into<String>, values: &[f64]) -> Result<Self> {
        let name = name.into();
        if self.bins < 2 {
            return Err(Error::InvalidParameter(format!(
                "reference needs at least 2 bins, got {}",
                self.bins
            )));
        }

        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return Err(Error::EmptyBatch);
        }
        sorted.sort_by(f64::total_cmp);

        let mut edges = Vec::with_capacity(self.bins + 1);
        edges.push(f64::NEG_INFINITY);
        for i in 1..self.bins {
            let cut = quantile(&sorted, i as f64 / self.bins as f64);
            if cut.is_finite() && edges.last().is_none_or(|&last| cut > last) {
                edges.push(cut);
            }
        }
        edges.push(f64::INFINITY);

        let (proportions, _) = bin_proportions(&edges, &sorted);
        debug!(feature = %name, bins = proportions.len(), rows = sorted.len(), "captured numeric reference");

        self.features.push(FeatureBaseline {
            name,
            distribution: ReferenceDistribution::Numeric { edges, proportions },
        });
        Ok(self)
    }

    /// Capture a categorical feature; categories are stored sorted
    pub fn categorical<S: AsRef<str>>(mut self, name: impl Into<String>, values: &[S]) -> Result<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values {
            *counts.entry(value.as_ref()).or_insert(0) += 1;
        }
        let categories: Vec<String> = counts.keys().map(|c| (*c).to_string()).collect();
        let proportions = to_proportions(&counts.values().copied().collect::<Vec<_>>(), values.len());
        debug!(feature = %name, categories = categories.len(), rows = values.len(), "captured categorical reference");

        self.features.push(FeatureBaseline {
            name,
            distribution: ReferenceDistribution::Categorical { categories, proportions },
        });
        Ok(self)
    }

    /// Capture a column of either kind
    pub fn column(self, name: impl Into<String>, values: &FeatureValues) -> Result<Self> {
        match values {
            FeatureValues::Numeric(v) => self.numeric(name, v),
            FeatureValues::Categorical(v) => self.categorical(name, v),
        }
    }

    /// Finish and validate the snapshot
    pub fn build(self) -> Result<FeatureReference> {
        FeatureReference::new(self.features)
    }
}

/// Quantile of ascending-sorted data with linear interpolation
///
/// Matches numpy's default method: position `q * (n - 1)`.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}
