//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::MonitorSpec;
use crate::eval::retrain::RetrainPolicy;

/// Validate a monitor configuration
///
/// Checks:
/// - Costs are finite and non-negative
/// - Threshold search settings are in range
/// - Severity levels are ordered and binning is usable
/// - Retrain policy parameters are meaningful
pub fn validate_spec(spec: &MonitorSpec) -> Result<(), ValidationError> {
    let cost = &spec.cost;
    for (field, value) in [
        ("cost_false_negative", cost.cost_false_negative),
        ("cost_false_positive", cost.cost_false_positive),
        ("cost_true_positive", cost.cost_true_positive),
        ("cost_true_negative", cost.cost_true_negative),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidCost { field, value });
        }
    }

    let threshold = &spec.threshold;
    if threshold.candidate_count < 2 {
        return Err(ValidationError::InvalidCandidateCount(threshold.candidate_count));
    }
    if !(threshold.default_threshold > 0.0 && threshold.default_threshold < 1.0) {
        return Err(ValidationError::InvalidDefaultThreshold(threshold.default_threshold));
    }
    if !(threshold.top_k_fraction > 0.0 && threshold.top_k_fraction <= 1.0) {
        return Err(ValidationError::InvalidTopKFraction(threshold.top_k_fraction));
    }

    let drift = &spec.drift;
    for (level, value) in [("moderate", drift.moderate), ("severe", drift.severe)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidSeverity { level, value });
        }
    }
    if drift.moderate > drift.severe {
        return Err(ValidationError::SeverityOrder {
            moderate: drift.moderate,
            severe: drift.severe,
        });
    }
    if drift.bins < 2 {
        return Err(ValidationError::InvalidBins(drift.bins));
    }

    match &spec.retrain {
        RetrainPolicy::FeatureCount { count: 0 } => {
            return Err(ValidationError::InvalidRetrainCount);
        }
        RetrainPolicy::DriftPercentage { threshold } if !(0.0..=100.0).contains(threshold) => {
            return Err(ValidationError::InvalidRetrainPercentage(*threshold));
        }
        RetrainPolicy::CriticalFeature { names } if names.is_empty() => {
            return Err(ValidationError::EmptyCriticalFeatures);
        }
        _ => {}
    }

    Ok(())
}
