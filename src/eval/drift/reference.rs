//! Reference distributions captured from the training split.

use super::types::FeatureKind;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const PROPORTION_TOLERANCE: f64 = 1e-6;

/// Baseline distribution of one feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReferenceDistribution {
    /// Bins `[edges[i], edges[i+1])` with ±infinity sentinels at both ends
    Numeric {
        #[serde(with = "edge_serde")]
        edges: Vec<f64>,
        proportions: Vec<f64>,
    },
    /// Observed categories with their training frequencies
    Categorical {
        categories: Vec<String>,
        proportions: Vec<f64>,
    },
}

impl ReferenceDistribution {
    /// Feature kind of this distribution
    pub fn kind(&self) -> FeatureKind {
        match self {
            ReferenceDistribution::Numeric { .. } => FeatureKind::Numeric,
            ReferenceDistribution::Categorical { .. } => FeatureKind::Categorical,
        }
    }

    /// Reference proportions per bin
    pub fn proportions(&self) -> &[f64] {
        match self {
            ReferenceDistribution::Numeric { proportions, .. }
            | ReferenceDistribution::Categorical { proportions, .. } => proportions,
        }
    }
}

/// Named baseline for one feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureBaseline {
    /// Feature name as it appears in incoming batches
    pub name: String,
    /// Baseline distribution
    pub distribution: ReferenceDistribution,
}

/// Per-feature drift baseline, immutable once training completes
///
/// Feature order is preserved and determines report order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureReference {
    features: Vec<FeatureBaseline>,
}

impl FeatureReference {
    /// Create a reference, validating every baseline
    pub fn new(features: Vec<FeatureBaseline>) -> Result<Self> {
        let reference = Self { features };
        reference.validate()?;
        Ok(reference)
    }

    /// Baselines in reference order
    pub fn features(&self) -> &[FeatureBaseline] {
        &self.features
    }

    /// Feature names in reference order
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }

    /// Baseline by name
    pub fn get(&self, name: &str) -> Option<&FeatureBaseline> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the reference has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Check bin-edge and proportion invariants
    ///
    /// Used after deserialization, since a snapshot on disk may have been
    /// edited or produced elsewhere.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for baseline in &self.features {
            if baseline.name.is_empty() {
                return Err(invalid(&baseline.name, "feature name is empty"));
            }
            if !seen.insert(baseline.name.as_str()) {
                return Err(invalid(&baseline.name, "duplicate feature name"));
            }
            validate_distribution(&baseline.name, &baseline.distribution)?;
        }
        Ok(())
    }
}

fn validate_distribution(name: &str, distribution: &ReferenceDistribution) -> Result<()> {
    match distribution {
        ReferenceDistribution::Numeric { edges, proportions } => {
            if edges.len() < 2 {
                return Err(invalid(name, "numeric reference needs at least two edges"));
            }
            if edges[0] != f64::NEG_INFINITY || edges[edges.len() - 1] != f64::INFINITY {
                return Err(invalid(name, "bin edges must start at -inf and end at +inf"));
            }
            if edges[1..edges.len() - 1].iter().any(|e| !e.is_finite()) {
                return Err(invalid(name, "interior bin edges must be finite"));
            }
            if edges.windows(2).any(|w| w[0] > w[1]) {
                return Err(invalid(name, "bin edges must be non-decreasing"));
            }
            if proportions.len() != edges.len() - 1 {
                return Err(invalid(
                    name,
                    &format!(
                        "{} proportions for {} bins",
                        proportions.len(),
                        edges.len() - 1
                    ),
                ));
            }
        }
        ReferenceDistribution::Categorical { categories, proportions } => {
            if categories.is_empty() {
                return Err(invalid(name, "categorical reference has no categories"));
            }
            let unique: HashSet<&String> = categories.iter().collect();
            if unique.len() != categories.len() {
                return Err(invalid(name, "duplicate category"));
            }
            if proportions.len() != categories.len() {
                return Err(invalid(
                    name,
                    &format!(
                        "{} proportions for {} categories",
                        proportions.len(),
                        categories.len()
                    ),
                ));
            }
        }
    }

    let proportions = distribution.proportions();
    if proportions.iter().any(|p| !(0.0..=1.0).contains(p)) {
        return Err(invalid(name, "proportions must lie in [0, 1]"));
    }
    let total: f64 = proportions.iter().sum();
    if (total - 1.0).abs() > PROPORTION_TOLERANCE {
        return Err(invalid(name, &format!("proportions sum to {total}, expected 1")));
    }
    Ok(())
}

fn invalid(feature: &str, message: &str) -> Error {
    Error::InvalidReference { feature: feature.to_string(), message: message.to_string() }
}

/// JSON has no infinity literal; sentinels travel as `"-inf"` / `"inf"`.
mod edge_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Edge {
        Finite(f64),
        Named(String),
    }

    pub fn serialize<S>(edges: &[f64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr: Vec<Edge> = edges
            .iter()
            .map(|&e| {
                if e == f64::INFINITY {
                    Edge::Named("inf".to_string())
                } else if e == f64::NEG_INFINITY {
                    Edge::Named("-inf".to_string())
                } else {
                    Edge::Finite(e)
                }
            })
            .collect();
        repr.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Edge>::deserialize(deserializer)?
            .into_iter()
            .map(|edge| match edge {
                Edge::Finite(v) => Ok(v),
                Edge::Named(s) => match s.to_lowercase().as_str() {
                    "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
                    "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
                    other => Err(serde::de::Error::custom(format!(
                        "expected a number, 'inf' or '-inf', got '{other}'"
                    ))),
                },
            })
            .collect()
    }
}
