//! Calibration tests for the scoring engine.
//!
//! These tests pin the normalization anchors, the weighted-sum identity and
//! the banding boundaries. If a formula constant changes, these fail first.

use quality_scorecard::model::MetricInputs;
use quality_scorecard::scoring::{
    normalize_complexity, normalize_coverage, normalize_defect_density,
    normalize_maintainability, round2, Evaluator, ScoringWeights, Tier,
};

// ============================================================================
// Normalization anchors
// ============================================================================

#[test]
fn defect_density_anchors() {
    assert_eq!(normalize_defect_density(0.0), 5.0);
    assert_eq!(normalize_defect_density(10.0), 0.0);
    assert_eq!(normalize_defect_density(20.0), 0.0, "clamped, no negative");
}

#[test]
fn coverage_anchors() {
    assert_eq!(normalize_coverage(0.0), 0.0);
    assert_eq!(normalize_coverage(100.0), 5.0);
    assert_eq!(normalize_coverage(150.0), 5.0, "clamped above 100");
}

#[test]
fn complexity_anchors() {
    assert_eq!(normalize_complexity(1.0), 5.0);
    assert_eq!(normalize_complexity(20.0), 0.0);
    assert_eq!(normalize_complexity(40.0), 0.0);
}

#[test]
fn maintainability_anchors() {
    assert_eq!(normalize_maintainability(0.0), 0.0);
    assert_eq!(normalize_maintainability(100.0), 5.0);
}

// ============================================================================
// Range invariant over a coarse input grid
// ============================================================================

#[test]
fn sub_scores_and_final_stay_in_range() {
    let samples = [-5.0, 0.0, 0.5, 1.0, 2.0, 9.9, 10.0, 40.0, 99.0, 100.0, 1e6];
    for &d in &samples {
        for &c in &samples {
            for &x in &samples {
                for &m in &samples {
                    let view =
                        Evaluator::new().evaluate(&MetricInputs::new(d, c, x, m));
                    let scores = view.record.scores.as_array();
                    for s in scores {
                        assert!((0.0..=5.0).contains(&s), "sub-score {s} out of range");
                    }
                    let final_score = view.final_score();
                    assert!(
                        (0.0..=5.0).contains(&final_score),
                        "final {final_score} out of range"
                    );
                }
            }
        }
    }
}

// ============================================================================
// Weighted sum identity
// ============================================================================

#[test]
fn final_score_is_the_weighted_sum_of_sub_scores() {
    let cases = [
        (2.0, 80.0, 5.0, 90.0),
        (0.0, 100.0, 1.0, 100.0),
        (9.5, 12.0, 33.0, 4.0),
        (3.3, 66.6, 11.0, 47.2),
    ];
    for (d, c, x, m) in cases {
        let view = Evaluator::new().evaluate(&MetricInputs::new(d, c, x, m));
        let s = view.record.scores;
        let expected = round2(
            0.25 * s.defects + 0.30 * s.coverage + 0.20 * s.complexity + 0.25 * s.maintainability,
        );
        assert_eq!(view.final_score(), expected);
    }
}

#[test]
fn weights_sum_to_one() {
    let sum: f64 = ScoringWeights::DEFAULT.as_array().iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

// ============================================================================
// Banding boundaries (closed above)
// ============================================================================

#[test]
fn banding_boundaries() {
    assert_eq!(Tier::from_score(4.5), Tier::Excellent);
    assert_eq!(Tier::from_score(3.5), Tier::Good);
    assert_eq!(Tier::from_score(2.5), Tier::Acceptable);
    assert_eq!(Tier::from_score(2.49), Tier::Critical);
}

// ============================================================================
// End-to-end example
// ============================================================================

#[test]
fn end_to_end_example() {
    let inputs = MetricInputs::new(2.0, 80.0, 5.0, 90.0);
    let view = Evaluator::new().evaluate(&inputs);

    assert_eq!(view.record.scores.defects, 4.0);
    assert_eq!(view.record.scores.coverage, 4.0);
    assert_eq!(view.record.scores.complexity, 3.95);
    assert_eq!(view.record.scores.maintainability, 4.5);
    // 0.25*4.0 + 0.30*4.0 + 0.20*3.95 + 0.25*4.5 = 4.115 -> 4.12
    assert_eq!(view.final_score(), 4.12);
    assert_eq!(view.tier, Tier::Good);
    assert_eq!(view.recommendations.len(), 4);
    assert!(view.conclusion.contains("good overall quality"));
}

// ============================================================================
// Coercion integration
// ============================================================================

#[test]
fn textual_inputs_coerce_like_numbers() {
    let textual = MetricInputs::from_raw(Some("2"), Some("80%"), Some("5"), Some("90"));
    let numeric = MetricInputs::new(2.0, 80.0, 5.0, 90.0);
    assert_eq!(textual, numeric);
}

#[test]
fn garbage_inputs_fall_back_to_defaults() {
    let inputs = MetricInputs::from_raw(Some("n/a"), None, Some("??"), Some(""));
    assert_eq!(inputs, MetricInputs::new(0.0, 0.0, 1.0, 0.0));

    // the defaulted complexity of 1 scores a full 5
    let view = Evaluator::new().evaluate(&inputs);
    assert_eq!(view.record.scores.complexity, 5.0);
}

#[test]
fn evaluation_is_total_for_non_finite_inputs() {
    let inputs = MetricInputs::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
    let view = Evaluator::new().evaluate(&inputs);
    assert_eq!(view.record.scores.as_array(), [0.0, 0.0, 0.0, 0.0]);
    assert_eq!(view.final_score(), 0.0);
    assert_eq!(view.tier, Tier::Critical);
}
