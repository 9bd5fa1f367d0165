//! Outcome of a threshold search.

use crate::eval::classification::{BinaryConfusion, ThresholdMetrics};
use serde::{Deserialize, Serialize};

/// Selected threshold with the counts, cost and metrics observed at it
///
/// Produced once per training run and stored as model metadata. A new
/// training run produces a new result rather than mutating this one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// Chosen cut-off; always one of the evaluated candidates
    pub threshold: f64,
    /// Confusion counts at `threshold`
    pub confusion: BinaryConfusion,
    /// Expected total cost at `threshold`
    pub expected_cost: f64,
    /// Metrics at `threshold`
    pub metrics: ThresholdMetrics,
    /// Number of candidate thresholds evaluated
    pub candidates_evaluated: usize,
    /// True when every candidate had the same cost (no signal in the cost model)
    pub cost_is_flat: bool,
}
