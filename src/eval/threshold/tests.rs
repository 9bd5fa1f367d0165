//! Tests for threshold selection.

use super::*;
use crate::error::Error;

fn separated_samples() -> Vec<ScoredSample> {
    let mut samples: Vec<ScoredSample> =
        (0..10).map(|i| ScoredSample::new(format!("p{i}"), true, 0.9)).collect();
    samples.extend((0..10).map(|i| ScoredSample::new(format!("n{i}"), false, 0.1)));
    samples
}

#[test]
fn test_perfect_separation_has_zero_cost() {
    let result = select(&separated_samples(), &CostModel::new(5.0, 1.0), 100).unwrap();

    assert!(result.threshold > 0.1 && result.threshold <= 0.9);
    assert_eq!(result.expected_cost, 0.0);
    assert_eq!(result.confusion.tp, 10);
    assert_eq!(result.confusion.tn, 10);
    assert_eq!(result.metrics.precision, 1.0);
    assert_eq!(result.metrics.recall, 1.0);
    assert!(!result.cost_is_flat);
}

#[test]
fn test_all_negative_is_degenerate() {
    let samples: Vec<ScoredSample> =
        (0..5).map(|i| ScoredSample::new(format!("n{i}"), false, 0.1 * i as f64)).collect();
    let err = select(&samples, &CostModel::new(5.0, 1.0), 100).unwrap_err();

    assert!(matches!(err, Error::DegenerateLabelSet { positives: 0, negatives: 5 }));
}

#[test]
fn test_empty_samples_are_degenerate() {
    let err = select(&[], &CostModel::new(1.0, 1.0), 100).unwrap_err();
    assert!(matches!(err, Error::DegenerateLabelSet { positives: 0, negatives: 0 }));
}

#[test]
fn test_negative_cost_rejected() {
    let err = select(&separated_samples(), &CostModel::new(-1.0, 1.0), 100).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCostModel { field: "cost_false_negative", .. }
    ));

    let err = select(
        &separated_samples(),
        &CostModel::new(1.0, 1.0).with_true_costs(0.0, f64::NAN),
        100,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidCostModel { field: "cost_true_negative", .. }));
}

#[test]
fn test_candidate_count_too_small() {
    let err = select(&separated_samples(), &CostModel::new(1.0, 1.0), 1).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn test_unlabeled_and_out_of_range_samples_rejected() {
    let mut samples = separated_samples();
    samples.push(ScoredSample::unlabeled("future", 0.4));
    assert!(matches!(
        select(&samples, &CostModel::new(1.0, 1.0), 100),
        Err(Error::InvalidParameter(msg)) if msg.contains("future")
    ));

    let mut samples = separated_samples();
    samples.push(ScoredSample::new("bad", true, 1.5));
    assert!(matches!(
        select(&samples, &CostModel::new(1.0, 1.0), 100),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_ties_prefer_highest_threshold() {
    // c_fn == c_fp: thresholds 0.5 and 0.9 both cost 1
    let samples = vec![
        ScoredSample::new("a", false, 0.2),
        ScoredSample::new("b", true, 0.5),
        ScoredSample::new("c", false, 0.7),
        ScoredSample::new("d", true, 0.9),
    ];
    let result = select(&samples, &CostModel::new(1.0, 1.0), 100).unwrap();

    assert_eq!(result.threshold, 0.9);
    assert_eq!(result.expected_cost, 1.0);
    assert_eq!(result.candidates_evaluated, 4);
}

#[test]
fn test_zero_cost_is_flat_and_picks_top_candidate() {
    let result = select(&separated_samples(), &CostModel::new(0.0, 0.0), 100).unwrap();
    assert!(result.cost_is_flat);
    assert_eq!(result.threshold, 0.9);
}

#[test]
fn test_candidates_distinct_when_few_samples() {
    let sorted = [0.1, 0.1, 0.3, 0.3, 0.7];
    assert_eq!(candidate_thresholds(&sorted, 100), vec![0.1, 0.3, 0.7]);
}

#[test]
fn test_candidates_grid_spans_observed_range() {
    let sorted: Vec<f64> = (0..200).map(|i| 0.2 + 0.6 * i as f64 / 199.0).collect();
    let grid = candidate_thresholds(&sorted, 100);

    assert_eq!(grid.len(), 100);
    assert_eq!(grid[0], 0.2);
    assert_eq!(*grid.last().unwrap(), *sorted.last().unwrap());
    assert!(grid.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_candidates_constant_scores() {
    let sorted = vec![0.4; 150];
    assert_eq!(candidate_thresholds(&sorted, 100), vec![0.4]);
    assert!(candidate_thresholds(&[], 100).is_empty());
}

#[test]
fn test_grid_threshold_within_probability_range() {
    let samples: Vec<ScoredSample> = (0..300)
        .map(|i| {
            let p = 0.05 + 0.9 * (i as f64 / 299.0);
            ScoredSample::new(format!("s{i}"), i % 3 == 0 || p > 0.7, p)
        })
        .collect();
    let result = select(&samples, &CostModel::new(4.0, 1.0), 100).unwrap();

    assert!(result.threshold >= 0.05 && result.threshold <= 0.95);
    assert_eq!(result.candidates_evaluated, 100);
}

#[test]
fn test_symmetric_scores_select_half() {
    let mut samples: Vec<ScoredSample> = (0..60)
        .map(|i| ScoredSample::new(format!("n{i}"), false, i as f64 / 120.0))
        .collect();
    samples.extend((0..60).map(|i| ScoredSample::new(format!("p{i}"), true, 0.5 + i as f64 / 120.0)));

    let count = 100;
    let result = select(&samples, &CostModel::new(1.0, 1.0), count).unwrap();
    let step = (119.0 / 120.0) / (count - 1) as f64;

    assert!((result.threshold - 0.5).abs() <= step, "threshold {}", result.threshold);
}

#[test]
fn test_higher_false_negative_cost_never_raises_threshold() {
    let samples: Vec<ScoredSample> = (0..40)
        .map(|i| {
            let p = (i as f64 + 0.5) / 40.0;
            ScoredSample::new(format!("s{i}"), (i * 7) % 10 < i / 4, p)
        })
        .collect();

    let mut previous = f64::INFINITY;
    for c_fn in [0.5, 1.0, 2.0, 5.0, 10.0, 50.0] {
        let result = select(&samples, &CostModel::new(c_fn, 1.0), 100).unwrap();
        assert!(result.threshold <= previous, "c_fn {c_fn} raised threshold");
        previous = result.threshold;
    }
}

#[test]
fn test_churn_economics_matches_value_maximisation() {
    let cost = CostModel::churn_economics(500.0, 50.0);
    assert_eq!(cost.cost_false_negative, 500.0);
    assert_eq!(cost.cost_true_positive, 50.0);
    assert_eq!(cost.cost_false_positive, 50.0);
    assert_eq!(cost.cost_true_negative, 0.0);

    // Expected value TP*450 - FP*50 is maximal where cost is minimal
    let samples = vec![
        ScoredSample::new("a", true, 0.8),
        ScoredSample::new("b", false, 0.6),
        ScoredSample::new("c", false, 0.3),
        ScoredSample::new("d", true, 0.2),
        ScoredSample::new("e", false, 0.1),
    ];
    let result = select(&samples, &cost, 100).unwrap();
    // Cheapest: target everyone down to 0.2 (TP=2, FP=2)
    assert_eq!(result.threshold, 0.2);
    assert_eq!(result.expected_cost, 2.0 * 50.0 + 2.0 * 50.0);
}

#[test]
fn test_cost_model_helpers() {
    assert!(CostModel::new(0.0, 0.0).is_zero());
    assert!(!CostModel::new(0.0, 1.0).is_zero());
    assert!(CostModel::new(3.0, 1.0).validate().is_ok());
}

#[test]
fn test_cost_model_true_costs_default_to_zero() {
    let cost: CostModel =
        serde_json::from_str(r#"{"cost_false_negative": 5, "cost_false_positive": 1}"#).unwrap();
    assert_eq!(cost, CostModel::new(5.0, 1.0));
}

#[test]
fn test_resolve_optimized() {
    let operating = resolve_operating_threshold(
        &separated_samples(),
        &CostModel::new(5.0, 1.0),
        &ThresholdConfig::default(),
    )
    .unwrap();

    assert_eq!(operating.source, ThresholdSource::Optimized);
    assert!(!operating.is_fallback());
    assert!(operating.selection.is_some());
    assert!(operating.decide(0.95));
    assert!(!operating.decide(0.05));
}

#[test]
fn test_resolve_falls_back_on_degenerate_labels() {
    let samples: Vec<ScoredSample> =
        (0..4).map(|i| ScoredSample::new(format!("p{i}"), true, 0.8)).collect();
    let operating = resolve_operating_threshold(
        &samples,
        &CostModel::new(5.0, 1.0),
        &ThresholdConfig::default(),
    )
    .unwrap();

    assert!(operating.is_fallback());
    assert_eq!(operating.threshold, 0.5);
    assert!(operating.selection.is_none());
    match operating.source {
        ThresholdSource::DefaultFallback { reason } => assert!(reason.contains("Degenerate")),
        ThresholdSource::Optimized => panic!("expected fallback"),
    }
}

#[test]
fn test_resolve_rejects_flat_cost() {
    let err = resolve_operating_threshold(
        &separated_samples(),
        &CostModel::new(0.0, 0.0),
        &ThresholdConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::NoCostSignal { .. }));
}

#[test]
fn test_resolve_rejects_zero_cost_with_single_candidate() {
    let samples = vec![ScoredSample::new("a", true, 0.4), ScoredSample::new("b", false, 0.4)];
    let err = resolve_operating_threshold(
        &samples,
        &CostModel::new(0.0, 0.0),
        &ThresholdConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::NoCostSignal { .. }));
}

#[test]
fn test_resolve_propagates_invalid_cost() {
    let err = resolve_operating_threshold(
        &separated_samples(),
        &CostModel::new(1.0, -2.0),
        &ThresholdConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidCostModel { .. }));
}

#[test]
fn test_operating_threshold_serde_tags_source() {
    let operating = OperatingThreshold {
        threshold: 0.5,
        source: ThresholdSource::DefaultFallback { reason: "no positives".into() },
        selection: None,
    };
    let json = serde_json::to_string(&operating).unwrap();
    assert!(json.contains("\"kind\":\"default_fallback\""));
    let back: OperatingThreshold = serde_json::from_str(&json).unwrap();
    assert_eq!(back, operating);
}

#[test]
fn test_scored_sample_label_forms() {
    let samples: Vec<ScoredSample> = serde_json::from_str(
        r#"[
            {"id": "a", "label": 1, "probability": 0.9},
            {"id": "b", "label": false, "probability": 0.2},
            {"id": "c", "label": "0", "probability": 0.4},
            {"id": "d", "probability": 0.7},
            {"id": "e", "label": null, "probability": 0.1}
        ]"#,
    )
    .unwrap();

    let labels: Vec<Option<bool>> = samples.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec![Some(true), Some(false), Some(false), None, None]);

    let json = serde_json::to_string(&samples[0]).unwrap();
    assert!(json.contains("\"label\":1"));
    let unlabeled = serde_json::to_string(&samples[3]).unwrap();
    assert!(!unlabeled.contains("label"));
}

#[test]
fn test_scored_sample_rejects_non_binary_label() {
    let parsed: Result<ScoredSample, _> =
        serde_json::from_str(r#"{"id": "a", "label": 2, "probability": 0.9}"#);
    assert!(parsed.is_err());
}
