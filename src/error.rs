//! Error types for threshold selection and drift monitoring.
//!
//! The first four variants are the conditions callers are expected to
//! recover from (fall back to a default threshold, skip a feature, abort a
//! batch). They are always returned immediately and never folded into a
//! numeric result.

use thiserror::Error;

/// Result type alias for churnguard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while selecting thresholds or monitoring drift.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation samples do not contain both classes.
    #[error("Degenerate label set: {positives} positive and {negatives} negative samples\n  → Cost-optimal selection needs at least one sample of each class")]
    DegenerateLabelSet { positives: usize, negatives: usize },

    /// Batch omits a feature the reference expects.
    #[error("Missing feature in batch: '{0}'\n  → Drop the feature from the reference or abort this batch")]
    MissingFeature(String),

    /// Zero observations submitted for drift.
    #[error("Empty batch: drift is undefined for zero observations")]
    EmptyBatch,

    /// A cost is negative or not finite.
    #[error("Invalid cost model: {field} = {value}\n  → Costs must be finite and non-negative")]
    InvalidCostModel { field: &'static str, value: f64 },

    /// Every candidate threshold has the same expected cost.
    #[error("Cost model carries no signal: every candidate threshold has cost {cost}\n  → Check that false-negative and false-positive costs are configured")]
    NoCostSignal { cost: f64 },

    /// A feature reference violates its bin/proportion invariants.
    #[error("Invalid reference for feature '{feature}': {message}")]
    InvalidReference { feature: String, message: String },

    /// A batch column has a different type than the reference.
    #[error("Feature type mismatch for '{feature}': reference is {expected}, batch is {actual}")]
    FeatureTypeMismatch {
        feature: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An input value is out of its documented range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller is expected to handle this condition and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DegenerateLabelSet { .. }
                | Self::MissingFeature(_)
                | Self::EmptyBatch
                | Self::InvalidCostModel { .. }
        )
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DegenerateLabelSet { .. } => "E001",
            Self::MissingFeature(_) => "E002",
            Self::EmptyBatch => "E003",
            Self::InvalidCostModel { .. } => "E004",
            Self::NoCostSignal { .. } => "E005",
            Self::InvalidReference { .. } => "E010",
            Self::FeatureTypeMismatch { .. } => "E011",
            Self::InvalidParameter(_) => "E020",
            Self::ConfigError(_) => "E030",
            Self::Serialization(_) => "E040",
            Self::Io(_) => "E050",
        }
    }
}
