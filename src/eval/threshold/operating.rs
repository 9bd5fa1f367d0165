//! Operating threshold used for serving decisions.

use super::config::ThresholdConfig;
use super::cost::CostModel;
use super::result::ThresholdResult;
use super::sample::ScoredSample;
use super::selector::ThresholdSelector;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the operating threshold came from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdSource {
    /// Cost-optimal search succeeded
    Optimized,
    /// The configured default was used; `reason` records why
    DefaultFallback { reason: String },
}

/// Threshold handed to the scoring service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperatingThreshold {
    /// Probability cut-off; a score `>= threshold` is a positive decision
    pub threshold: f64,
    /// Provenance of `threshold`
    pub source: ThresholdSource,
    /// Search result, absent when the default was used
    pub selection: Option<ThresholdResult>,
}

impl OperatingThreshold {
    /// Whether the default threshold was used instead of a search result
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ThresholdSource::DefaultFallback { .. })
    }

    /// Binary decision for a probability
    pub fn decide(&self, probability: f64) -> bool {
        probability >= self.threshold
    }
}

/// Resolve the threshold to persist for a training run
///
/// - A degenerate validation set falls back to `config.default_threshold`,
///   recording the condition in [`ThresholdSource::DefaultFallback`].
/// - An all-zero cost model, or one under which every candidate costs the
///   same, is surfaced as [`Error::NoCostSignal`].
/// - All other errors propagate unchanged.
pub fn resolve_operating_threshold(
    samples: &[ScoredSample],
    cost: &CostModel,
    config: &ThresholdConfig,
) -> Result<OperatingThreshold> {
    let selector = ThresholdSelector::new(config.candidate_count);
    match selector.select(samples, cost) {
        Ok(result) if result.cost_is_flat || cost.is_zero() => {
            Err(Error::NoCostSignal { cost: result.expected_cost })
        }
        Ok(result) => Ok(OperatingThreshold {
            threshold: result.threshold,
            source: ThresholdSource::Optimized,
            selection: Some(result),
        }),
        Err(err @ Error::DegenerateLabelSet { .. }) => {
            warn!(
                default_threshold = config.default_threshold,
                error = %err,
                "falling back to default threshold"
            );
            Ok(OperatingThreshold {
                threshold: config.default_threshold,
                source: ThresholdSource::DefaultFallback { reason: err.to_string() },
                selection: None,
            })
        }
        Err(err) => Err(err),
    }
}
