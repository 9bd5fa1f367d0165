//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid cost {field}: {value} (must be finite and >= 0.0)")]
    InvalidCost { field: &'static str, value: f64 },

    #[error("Invalid candidate count: {0} (must be >= 2)")]
    InvalidCandidateCount(usize),

    #[error("Invalid default threshold: {0} (must be in (0.0, 1.0))")]
    InvalidDefaultThreshold(f64),

    #[error("Invalid top-k fraction: {0} (must be in (0.0, 1.0])")]
    InvalidTopKFraction(f64),

    #[error("Invalid drift severity {level}: {value} (must be finite and >= 0.0)")]
    InvalidSeverity { level: &'static str, value: f64 },

    #[error("Drift severities out of order: moderate {moderate} > severe {severe}")]
    SeverityOrder { moderate: f64, severe: f64 },

    #[error("Invalid bin count: {0} (must be >= 2)")]
    InvalidBins(usize),

    #[error("Invalid retrain feature count: 0 (must be > 0)")]
    InvalidRetrainCount,

    #[error("Invalid retrain drift percentage: {0} (must be in [0.0, 100.0])")]
    InvalidRetrainPercentage(f64),

    #[error("Retrain critical feature list cannot be empty")]
    EmptyCriticalFeatures,
}
