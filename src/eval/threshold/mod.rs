//! Cost-based decision threshold selection
//!
//! Chooses the probability cut-off that minimises expected business cost on a
//! labelled validation set. The selected threshold is fixed once per training
//! run and persisted with the model.
//!
//! - `selector`: candidate generation and the exhaustive cost search
//! - `cost`: per-outcome cost configuration
//! - `operating`: resolution of the threshold actually used for serving,
//!   including the documented fallback for degenerate validation sets

mod config;
mod cost;
mod operating;
mod result;
mod sample;
mod selector;

#[cfg(test)]
mod tests;

pub use config::ThresholdConfig;
pub use cost::CostModel;
pub use operating::{resolve_operating_threshold, OperatingThreshold, ThresholdSource};
pub use result::ThresholdResult;
pub use sample::ScoredSample;
pub use selector::{candidate_thresholds, select, ThresholdSelector, DEFAULT_CANDIDATE_COUNT};
