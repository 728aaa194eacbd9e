//! Fixed weights for the composite score.

use super::normalize::round2;
use crate::model::SubScores;

/// Weights for the composite score calculation (sum to 1.0).
///
/// The weighting is a fixed property of the scoring model, not a user knob:
/// every evaluation uses [`ScoringWeights::DEFAULT`]. Since each sub-score
/// lies in [0, 5] and the weights sum to 1, the composite is guaranteed to
/// lie in [0, 5] without a post-sum clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub defects: f64,
    pub coverage: f64,
    pub complexity: f64,
    pub maintainability: f64,
}

impl ScoringWeights {
    /// The scoring model's fixed weighting.
    pub const DEFAULT: Self = Self {
        defects: 0.25,
        coverage: 0.30,
        complexity: 0.20,
        maintainability: 0.25,
    };

    /// Weights as an array matching [`crate::model::MetricKind::ALL`] order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.defects,
            self.coverage,
            self.complexity,
            self.maintainability,
        ]
    }

    /// Weighted composite of the four sub-scores, rounded to two decimals.
    #[must_use]
    pub fn composite(&self, scores: &SubScores) -> f64 {
        let weighted: f64 = scores
            .as_array()
            .iter()
            .zip(self.as_array())
            .map(|(s, w)| s * w)
            .sum();
        round2(weighted)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f64 = ScoringWeights::DEFAULT.as_array().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "weights sum {sum} != 1.0");
    }

    #[test]
    fn composite_of_uniform_scores() {
        let scores = SubScores {
            defects: 5.0,
            coverage: 5.0,
            complexity: 5.0,
            maintainability: 5.0,
        };
        assert_eq!(ScoringWeights::DEFAULT.composite(&scores), 5.0);

        let zeros = SubScores {
            defects: 0.0,
            coverage: 0.0,
            complexity: 0.0,
            maintainability: 0.0,
        };
        assert_eq!(ScoringWeights::DEFAULT.composite(&zeros), 0.0);
    }

    #[test]
    fn composite_rounds_to_two_decimals() {
        let scores = SubScores {
            defects: 4.0,
            coverage: 4.0,
            complexity: 3.95,
            maintainability: 4.5,
        };
        // 1.0 + 1.2 + 0.79 + 1.125 = 4.115 -> 4.12
        assert_eq!(ScoringWeights::DEFAULT.composite(&scores), 4.12);
    }
}
