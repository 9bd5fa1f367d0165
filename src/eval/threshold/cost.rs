//! Business cost attached to each confusion-matrix outcome.

use crate::error::{Error, Result};
use crate::eval::classification::BinaryConfusion;
use serde::{Deserialize, Serialize};

/// Cost of each decision outcome
///
/// Expected cost at a threshold is `FN*c_fn + FP*c_fp + TP*c_tp + TN*c_tn`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost of missing a churner
    pub cost_false_negative: f64,
    /// Cost of targeting a customer who would have stayed
    pub cost_false_positive: f64,
    /// Cost of targeting a churner
    #[serde(default)]
    pub cost_true_positive: f64,
    /// Cost of leaving a loyal customer alone
    #[serde(default)]
    pub cost_true_negative: f64,
}

impl CostModel {
    /// Cost model with only error costs
    pub fn new(cost_false_negative: f64, cost_false_positive: f64) -> Self {
        Self {
            cost_false_negative,
            cost_false_positive,
            cost_true_positive: 0.0,
            cost_true_negative: 0.0,
        }
    }

    /// Set the costs of correct decisions
    pub fn with_true_costs(mut self, cost_true_positive: f64, cost_true_negative: f64) -> Self {
        self.cost_true_positive = cost_true_positive;
        self.cost_true_negative = cost_true_negative;
        self
    }

    /// Retention-campaign economics
    ///
    /// A lost churner costs `churn_loss`; every targeted customer receives an
    /// offer costing `offer_cost`, churner or not. Minimising this model is
    /// equivalent to maximising `TP*(churn_loss - offer_cost) - FP*offer_cost`.
    pub fn churn_economics(churn_loss: f64, offer_cost: f64) -> Self {
        Self {
            cost_false_negative: churn_loss,
            cost_false_positive: offer_cost,
            cost_true_positive: offer_cost,
            cost_true_negative: 0.0,
        }
    }

    /// Reject negative or non-finite costs
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidCostModel { field, value });
            }
        }
        Ok(())
    }

    /// Whether every outcome costs nothing
    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|&(_, v)| v == 0.0)
    }

    /// Expected total cost for the given confusion counts
    pub fn expected_cost(&self, cm: &BinaryConfusion) -> f64 {
        cm.fn_ as f64 * self.cost_false_negative
            + cm.fp as f64 * self.cost_false_positive
            + cm.tp as f64 * self.cost_true_positive
            + cm.tn as f64 * self.cost_true_negative
    }

    fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("cost_false_negative", self.cost_false_negative),
            ("cost_false_positive", self.cost_false_positive),
            ("cost_true_positive", self.cost_true_positive),
            ("cost_true_negative", self.cost_true_negative),
        ]
    }
}
