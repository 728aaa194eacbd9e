//! Evaluation orchestration.
//!
//! Ties the pieces together: normalize each input, weight the sub-scores,
//! band the composite and look up the recommendation texts. Pure computation;
//! persistence and rendering live elsewhere.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::banding::{conclusion_text, recommendation_for, Recommendation, Tier};
use super::normalize::normalize;
use super::weights::ScoringWeights;
use crate::model::{EvaluationRecord, MetricInputs, MetricKind, SubScores};

/// Everything a presentation layer needs from one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct EvaluationView {
    /// The persistable snapshot (inputs, scores, composite, timestamp)
    pub record: EvaluationRecord,
    /// Band of the composite score
    pub tier: Tier,
    /// One recommendation per criterion, in [`MetricKind::ALL`] order
    pub recommendations: Vec<Recommendation>,
    /// Automatic conclusion sentence
    pub conclusion: String,
}

impl EvaluationView {
    /// Rebuild the presentation view for a previously persisted record.
    ///
    /// Tiers, recommendations and the conclusion are derived from the stored
    /// scores, so a loaded record displays exactly as it was evaluated.
    pub fn from_record(record: EvaluationRecord) -> Self {
        let recommendations = MetricKind::ALL
            .iter()
            .map(|kind| recommendation_for(*kind, record.scores.get(*kind)))
            .collect();
        let tier = Tier::from_score(record.final_score);
        let conclusion = conclusion_text(record.final_score).to_string();
        Self {
            record,
            tier,
            recommendations,
            conclusion,
        }
    }

    /// Composite score shortcut
    #[must_use]
    pub fn final_score(&self) -> f64 {
        self.record.final_score
    }

    /// Long-form interpretation of the composite score
    #[must_use]
    pub const fn interpretation(&self) -> &'static str {
        self.tier.description()
    }
}

/// The scoring engine.
///
/// Stateless apart from the fixed weighting; cheap to construct anywhere an
/// evaluation is needed.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    weights: ScoringWeights,
}

impl Evaluator {
    /// Create an evaluator with the scoring model's fixed weights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::DEFAULT,
        }
    }

    /// Evaluate inputs, stamping the record with the current time.
    pub fn evaluate(&self, inputs: &MetricInputs) -> EvaluationView {
        self.evaluate_at(inputs, Utc::now())
    }

    /// Evaluate inputs with an explicit timestamp.
    ///
    /// Deterministic: the same inputs and timestamp always produce the same
    /// view. Total: every finite, non-finite or negative input maps to a
    /// sub-score via the normalization fallbacks.
    pub fn evaluate_at(&self, inputs: &MetricInputs, evaluated_at: DateTime<Utc>) -> EvaluationView {
        let scores = SubScores {
            defects: normalize(MetricKind::DefectDensity, inputs.defect_density),
            coverage: normalize(MetricKind::TestCoverage, inputs.coverage_percent),
            complexity: normalize(MetricKind::CyclomaticComplexity, inputs.cyclomatic_complexity),
            maintainability: normalize(
                MetricKind::MaintainabilityIndex,
                inputs.maintainability_index,
            ),
        };
        let final_score = self.weights.composite(&scores);

        let recommendations = MetricKind::ALL
            .iter()
            .map(|kind| recommendation_for(*kind, scores.get(*kind)))
            .collect();

        EvaluationView {
            record: EvaluationRecord {
                evaluated_at,
                inputs: *inputs,
                scores,
                final_score,
            },
            tier: Tier::from_score(final_score),
            recommendations,
            conclusion: conclusion_text(final_score).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn end_to_end_example() {
        let inputs = MetricInputs::new(2.0, 80.0, 5.0, 90.0);
        let view = Evaluator::new().evaluate_at(&inputs, fixed_time());

        assert_eq!(view.record.scores.defects, 4.0);
        assert_eq!(view.record.scores.coverage, 4.0);
        assert_eq!(view.record.scores.complexity, 3.95);
        assert_eq!(view.record.scores.maintainability, 4.5);
        // 0.25*4.0 + 0.30*4.0 + 0.20*3.95 + 0.25*4.5 = 4.115 -> 4.12
        assert_eq!(view.final_score(), 4.12);
        assert_eq!(view.tier, Tier::Good);
    }

    #[test]
    fn evaluation_is_deterministic_given_timestamp() {
        let inputs = MetricInputs::new(3.0, 55.0, 12.0, 70.0);
        let evaluator = Evaluator::new();
        let a = evaluator.evaluate_at(&inputs, fixed_time());
        let b = evaluator.evaluate_at(&inputs, fixed_time());
        assert_eq!(a, b);
    }

    #[test]
    fn recommendations_follow_display_order() {
        let inputs = MetricInputs::default();
        let view = Evaluator::new().evaluate_at(&inputs, fixed_time());
        let kinds: Vec<_> = view.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, MetricKind::ALL.to_vec());
    }

    #[test]
    fn from_record_rebuilds_an_identical_view() {
        let inputs = MetricInputs::new(2.0, 80.0, 5.0, 90.0);
        let view = Evaluator::new().evaluate_at(&inputs, fixed_time());
        let rebuilt = EvaluationView::from_record(view.record.clone());
        assert_eq!(rebuilt, view);
    }

    #[test]
    fn perfect_inputs_score_five_excellent() {
        let inputs = MetricInputs::new(0.0, 100.0, 1.0, 100.0);
        let view = Evaluator::new().evaluate_at(&inputs, fixed_time());
        assert_eq!(view.final_score(), 5.0);
        assert_eq!(view.tier, Tier::Excellent);
        assert!(view.conclusion.contains("good overall quality"));
    }

    #[test]
    fn worst_inputs_score_zero_critical() {
        let inputs = MetricInputs::new(15.0, 0.0, 30.0, 0.0);
        let view = Evaluator::new().evaluate_at(&inputs, fixed_time());
        assert_eq!(view.final_score(), 0.0);
        assert_eq!(view.tier, Tier::Critical);
        assert!(view.conclusion.contains("needs structural improvements"));
    }
}
