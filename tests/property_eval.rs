//! Property tests for threshold selection and drift monitoring
//!
//! Ensures the evaluation core satisfies its invariants:
//! - Selected thresholds are evaluated candidates inside the observed range
//! - Raising the false-negative cost never raises the threshold
//! - PSI is non-negative, finite, and zero for identical distributions

use churnguard::eval::classification::{top_k_recall, BinaryConfusion};
use churnguard::eval::drift::{bucket_index, psi, FeatureBatch, FeatureValues, ReferenceBuilder};
use churnguard::eval::threshold::candidate_thresholds;
use churnguard::eval::{compute_drift, select, CostModel, ScoredSample, SeverityThresholds};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Labelled samples with both classes present, probabilities on a 0.001 grid
fn labelled_samples(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<ScoredSample>> {
    vec((any::<bool>(), 0u32..=1000), len).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (label, p))| {
                // Force both classes
                let label = match i {
                    0 => true,
                    1 => false,
                    _ => label,
                };
                ScoredSample::new(format!("s{i}"), label, f64::from(p) / 1000.0)
            })
            .collect()
    })
}

/// Probability vector summing to one
fn proportions(bins: usize) -> impl Strategy<Value = Vec<f64>> {
    vec(0u32..100, bins).prop_map(|weights| {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            let n = weights.len() as f64;
            return weights.iter().map(|_| 1.0 / n).collect();
        }
        weights.iter().map(|&w| f64::from(w) / f64::from(total)).collect()
    })
}

// =============================================================================
// Threshold Selection Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_threshold_is_candidate_within_range(
        samples in labelled_samples(2..250),
        c_fn in 0u32..50,
        c_fp in 1u32..50,
        count in 2usize..150,
    ) {
        let cost = CostModel::new(f64::from(c_fn), f64::from(c_fp));
        let result = select(&samples, &cost, count).unwrap();

        let mut sorted: Vec<f64> = samples.iter().map(|s| s.probability).collect();
        sorted.sort_by(f64::total_cmp);
        let lo = sorted[0];
        let hi = sorted[sorted.len() - 1];

        prop_assert!(result.threshold >= lo && result.threshold <= hi);
        prop_assert!(candidate_thresholds(&sorted, count).contains(&result.threshold));
        prop_assert!(result.expected_cost.is_finite() && result.expected_cost >= 0.0);
        prop_assert_eq!(result.confusion.total(), samples.len());
    }

    #[test]
    fn prop_higher_false_negative_cost_never_raises_threshold(
        samples in labelled_samples(2..200),
        c_fn in 0u32..100,
        extra in 0u32..100,
        c_fp in 1u32..100,
    ) {
        let low = select(&samples, &CostModel::new(f64::from(c_fn), f64::from(c_fp)), 100).unwrap();
        let high = select(
            &samples,
            &CostModel::new(f64::from(c_fn + extra), f64::from(c_fp)),
            100,
        )
        .unwrap();

        prop_assert!(
            high.threshold <= low.threshold,
            "c_fn {} -> {}, threshold {} -> {}",
            c_fn,
            c_fn + extra,
            low.threshold,
            high.threshold
        );
    }

    #[test]
    fn prop_selected_cost_is_minimal_over_candidates(
        samples in labelled_samples(2..120),
        c_fn in 0u32..20,
        c_fp in 0u32..20,
    ) {
        let cost = CostModel::new(f64::from(c_fn), f64::from(c_fp));
        let result = select(&samples, &cost, 100).unwrap();

        let labels: Vec<bool> = samples.iter().map(|s| s.label == Some(true)).collect();
        let scores: Vec<f64> = samples.iter().map(|s| s.probability).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(f64::total_cmp);
        for t in candidate_thresholds(&sorted, 100) {
            let cm = BinaryConfusion::at_threshold(&labels, &scores, t).unwrap();
            prop_assert!(cost.expected_cost(&cm) >= result.expected_cost);
        }
    }

    #[test]
    fn prop_top_k_recall_bounded(
        samples in labelled_samples(2..200),
        fraction in 0.01f64..=1.0,
    ) {
        let labels: Vec<bool> = samples.iter().map(|s| s.label == Some(true)).collect();
        let scores: Vec<f64> = samples.iter().map(|s| s.probability).collect();
        let recall = top_k_recall(&labels, &scores, fraction).unwrap();
        prop_assert!((0.0..=1.0).contains(&recall));
    }
}

// =============================================================================
// PSI Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_psi_non_negative_and_finite(
        (reference, current) in (2usize..20).prop_flat_map(|n| (proportions(n), proportions(n)))
    ) {
        let value = psi(&reference, &current);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0, "PSI {} is negative", value);
    }

    #[test]
    fn prop_psi_identity(reference in (2usize..20).prop_flat_map(proportions)) {
        prop_assert_eq!(psi(&reference, &reference), 0.0);
    }

    #[test]
    fn prop_bucket_index_in_range(
        mut interior in vec(-1000.0f64..1000.0, 0..15),
        value in -2000.0f64..2000.0,
    ) {
        interior.sort_by(f64::total_cmp);
        let mut edges = vec![f64::NEG_INFINITY];
        edges.extend(interior);
        edges.push(f64::INFINITY);

        let idx = bucket_index(&edges, value);
        prop_assert!(idx < edges.len() - 1);
        prop_assert!(edges[idx] <= value && value < edges[idx + 1]);
    }

    #[test]
    fn prop_training_batch_has_zero_drift(
        values in vec(-500.0f64..500.0, 1..300),
        bins in 2usize..20,
    ) {
        let reference = ReferenceBuilder::new(bins).numeric("x", &values).unwrap().build().unwrap();
        let mut batch = FeatureBatch::new();
        batch.insert("x".to_string(), FeatureValues::Numeric(values));

        let report = compute_drift(&reference, &batch, &SeverityThresholds::default()).unwrap();
        prop_assert_eq!(report.features[0].psi, 0.0);
        prop_assert!(!report.any_severe);
    }
}
