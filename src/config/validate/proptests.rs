//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_spec;
use crate::config::schema::MonitorSpec;
use crate::eval::drift::DriftConfig;
use crate::eval::retrain::RetrainPolicy;
use crate::eval::threshold::{CostModel, ThresholdConfig};
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = MonitorSpec> {
    (
        (0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..100.0), // c_fn, c_fp, c_tp
        2usize..500,                                      // candidate_count
        0.01f64..0.99,                                    // default_threshold
        (0.0f64..0.5, 0.0f64..0.5),                       // moderate, extra
        2usize..50,                                       // bins
    )
        .prop_map(|((c_fn, c_fp, c_tp), candidate_count, default_threshold, (moderate, extra), bins)| {
            MonitorSpec {
                cost: CostModel::new(c_fn, c_fp).with_true_costs(c_tp, 0.0),
                threshold: ThresholdConfig {
                    candidate_count,
                    default_threshold,
                    ..Default::default()
                },
                drift: DriftConfig { moderate, severe: moderate + extra, bins },
                retrain: RetrainPolicy::default(),
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn prop_negative_false_negative_cost_fails(spec in arb_valid_spec(), neg in -1000.0f64..-1e-9) {
        let mut spec = spec;
        spec.cost.cost_false_negative = neg;
        prop_assert!(
            matches!(
                validate_spec(&spec),
                Err(ValidationError::InvalidCost { field: "cost_false_negative", .. })
            ),
            "expected InvalidCost error"
        );
    }

    #[test]
    fn prop_small_candidate_count_fails(spec in arb_valid_spec(), count in 0usize..2) {
        let mut spec = spec;
        spec.threshold.candidate_count = count;
        prop_assert!(matches!(
            validate_spec(&spec),
            Err(ValidationError::InvalidCandidateCount(_))
        ));
    }

    #[test]
    fn prop_swapped_severities_fail(spec in arb_valid_spec(), gap in 1e-6f64..1.0) {
        let mut spec = spec;
        spec.drift.moderate = spec.drift.severe + gap;
        prop_assert!(
            matches!(validate_spec(&spec), Err(ValidationError::SeverityOrder { .. })),
            "expected SeverityOrder error"
        );
    }

    #[test]
    fn prop_default_threshold_outside_unit_interval_fails(spec in arb_valid_spec(), t in 1.0f64..10.0) {
        let mut spec = spec;
        spec.threshold.default_threshold = t;
        prop_assert!(matches!(
            validate_spec(&spec),
            Err(ValidationError::InvalidDefaultThreshold(_))
        ));
    }
}
