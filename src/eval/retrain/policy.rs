//! Retraining trigger policies.

use super::advice::RetrainAdvice;
use crate::eval::drift::{DriftReport, Severity};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Retraining trigger policy
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RetrainPolicy {
    /// Retrain on any severe feature
    #[default]
    AnySevere,
    /// Retrain if >= N features show moderate or severe drift
    FeatureCount { count: usize },
    /// Retrain if any feature with these names drifts
    CriticalFeature { names: Vec<String> },
    /// Retrain if the percentage of drifted features reaches `threshold`
    DriftPercentage { threshold: f64 },
}

impl RetrainPolicy {
    /// Evaluate the policy against a drift report
    pub fn evaluate(&self, report: &DriftReport) -> RetrainAdvice {
        let drifted: Vec<String> = report
            .features
            .iter()
            .filter(|f| f.severity > Severity::None)
            .map(|f| f.feature.clone())
            .collect();

        let advice = match self {
            RetrainPolicy::AnySevere => {
                let severe: Vec<String> =
                    report.severe_features().into_iter().map(str::to_string).collect();
                if severe.is_empty() {
                    RetrainAdvice::keep("no feature shows severe drift")
                } else {
                    let reason = format!("{} feature(s) show severe drift", severe.len());
                    RetrainAdvice::retrain(severe, reason)
                }
            }
            RetrainPolicy::FeatureCount { count } => {
                if drifted.len() >= *count && !drifted.is_empty() {
                    let reason = format!("{} drifted feature(s), limit {count}", drifted.len());
                    RetrainAdvice::retrain(drifted, reason)
                } else {
                    RetrainAdvice::keep(format!(
                        "{} drifted feature(s), limit {count}",
                        drifted.len()
                    ))
                }
            }
            RetrainPolicy::CriticalFeature { names } => {
                let hits: Vec<String> =
                    drifted.into_iter().filter(|f| names.contains(f)).collect();
                if hits.is_empty() {
                    RetrainAdvice::keep("no critical feature drifted")
                } else {
                    let reason = format!("critical feature(s) drifted: {}", hits.join(", "));
                    RetrainAdvice::retrain(hits, reason)
                }
            }
            RetrainPolicy::DriftPercentage { threshold } => {
                let pct = report.summary().drift_percentage();
                let reason = format!("{pct:.1}% of features drifted (limit {threshold}%)");
                if !drifted.is_empty() && pct >= *threshold {
                    RetrainAdvice::retrain(drifted, reason)
                } else {
                    RetrainAdvice::keep(reason)
                }
            }
        };

        if advice.retrain {
            info!(reason = %advice.reason, "retraining recommended");
        }
        advice
    }
}
