//! Type definitions for drift monitoring.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels for drift
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// PSI below the moderate level
    None,
    /// moderate <= PSI < severe
    Moderate,
    /// PSI at or above the severe level
    Severe,
}

impl Severity {
    /// Lowercase label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PSI levels separating the severities
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    /// Lowest PSI reported as moderate
    pub moderate: f64,
    /// Lowest PSI reported as severe
    pub severe: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self { moderate: 0.1, severe: 0.25 }
    }
}

impl SeverityThresholds {
    /// Create thresholds, checking `0 <= moderate <= severe`
    pub fn new(moderate: f64, severe: f64) -> Result<Self> {
        let thresholds = Self { moderate, severe };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check both levels are finite, non-negative and ordered
    pub fn validate(&self) -> Result<()> {
        if !self.moderate.is_finite() || !self.severe.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "severity thresholds must be finite (moderate={}, severe={})",
                self.moderate, self.severe
            )));
        }
        if self.moderate < 0.0 || self.moderate > self.severe {
            return Err(Error::InvalidParameter(format!(
                "severity thresholds must satisfy 0 <= moderate <= severe (moderate={}, severe={})",
                self.moderate, self.severe
            )));
        }
        Ok(())
    }

    /// Map a PSI value to its severity
    pub fn classify(&self, psi: f64) -> Severity {
        if psi >= self.severe {
            Severity::Severe
        } else if psi >= self.moderate {
            Severity::Moderate
        } else {
            Severity::None
        }
    }
}

/// Drift section of the monitor configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// PSI reported as moderate drift
    pub moderate: f64,
    /// PSI reported as severe drift
    pub severe: f64,
    /// Quantile bins captured for numeric reference features
    pub bins: usize,
}

impl Default for DriftConfig {
    fn default() -> Self {
        let severity = SeverityThresholds::default();
        Self { moderate: severity.moderate, severe: severity.severe, bins: 10 }
    }
}

impl DriftConfig {
    /// Severity levels as a standalone value
    pub fn severity_thresholds(&self) -> SeverityThresholds {
        SeverityThresholds { moderate: self.moderate, severe: self.severe }
    }
}

/// Kind of feature being compared
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Bucketed by reference bin edges
    Numeric,
    /// Bucketed by reference category
    Categorical,
}

impl FeatureKind {
    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Numeric => "numeric",
            FeatureKind::Categorical => "categorical",
        }
    }
}

/// Drift measurement for one feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureDrift {
    /// Feature name
    pub feature: String,
    /// Feature kind
    pub kind: FeatureKind,
    /// Population Stability Index
    pub psi: f64,
    /// Severity derived from `psi`
    pub severity: Severity,
    /// Non-missing observations in the batch
    pub observations: usize,
    /// Observations whose category was absent from the reference
    pub unseen_categories: usize,
}

/// Drift of one batch against a reference snapshot
///
/// Features appear in the reference's order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Per-feature results
    pub features: Vec<FeatureDrift>,
    /// True when any feature is severe
    pub any_severe: bool,
}

impl DriftReport {
    /// Build a report, deriving the batch-level flag
    pub fn new(features: Vec<FeatureDrift>) -> Self {
        let any_severe = features.iter().any(|f| f.severity == Severity::Severe);
        Self { features, any_severe }
    }

    /// Result for a feature by name
    pub fn get(&self, feature: &str) -> Option<&FeatureDrift> {
        self.features.iter().find(|f| f.feature == feature)
    }

    /// Names of severely drifted features, in report order
    pub fn severe_features(&self) -> Vec<&str> {
        self.features
            .iter()
            .filter(|f| f.severity == Severity::Severe)
            .map(|f| f.feature.as_str())
            .collect()
    }

    /// Highest severity across features
    pub fn max_severity(&self) -> Severity {
        self.features.iter().map(|f| f.severity).max().unwrap_or(Severity::None)
    }

    /// Counts by severity
    pub fn summary(&self) -> DriftSummary {
        let count = |s: Severity| self.features.iter().filter(|f| f.severity == s).count();
        DriftSummary {
            total_features: self.features.len(),
            moderate: count(Severity::Moderate),
            severe: count(Severity::Severe),
        }
    }
}

/// Summary of drift results
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftSummary {
    /// Total number of features checked
    pub total_features: usize,
    /// Number of moderate-level drifts
    pub moderate: usize,
    /// Number of severe-level drifts
    pub severe: usize,
}

impl DriftSummary {
    /// Features with any drift (moderate or severe)
    pub fn drifted_features(&self) -> usize {
        self.moderate + self.severe
    }

    /// Whether any drift was detected
    pub fn has_drift(&self) -> bool {
        self.drifted_features() > 0
    }

    /// Percentage of features that drifted
    pub fn drift_percentage(&self) -> f64 {
        if self.total_features == 0 {
            0.0
        } else {
            100.0 * self.drifted_features() as f64 / self.total_features as f64
        }
    }
}
