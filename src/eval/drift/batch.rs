//! Raw feature values submitted for monitoring.

use super::types::FeatureKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column of raw values for one feature
///
/// Numeric NaN values count as missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValues {
    /// Continuous values
    Numeric(Vec<f64>),
    /// Category labels
    Categorical(Vec<String>),
}

impl FeatureValues {
    /// Kind of column
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureValues::Numeric(_) => FeatureKind::Numeric,
            FeatureValues::Categorical(_) => FeatureKind::Categorical,
        }
    }

    /// Number of rows, including missing numeric values
    pub fn len(&self) -> usize {
        match self {
            FeatureValues::Numeric(v) => v.len(),
            FeatureValues::Categorical(v) => v.len(),
        }
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of non-missing values
    pub fn observed(&self) -> usize {
        match self {
            FeatureValues::Numeric(v) => v.iter().filter(|x| !x.is_nan()).count(),
            FeatureValues::Categorical(v) => v.len(),
        }
    }
}

impl From<Vec<f64>> for FeatureValues {
    fn from(values: Vec<f64>) -> Self {
        FeatureValues::Numeric(values)
    }
}

impl From<Vec<String>> for FeatureValues {
    fn from(values: Vec<String>) -> Self {
        FeatureValues::Categorical(values)
    }
}

impl From<Vec<&str>> for FeatureValues {
    fn from(values: Vec<&str>) -> Self {
        FeatureValues::Categorical(values.into_iter().map(str::to_string).collect())
    }
}

/// Mapping from feature name to its column of raw values
pub type FeatureBatch = BTreeMap<String, FeatureValues>;
