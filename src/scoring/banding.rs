//! Qualitative banding and recommendation text.
//!
//! Two lookup tables keyed on a score: the per-criterion table produces one
//! short recommendation sentence per criterion, the overall table produces a
//! label, a long-form description and a display color. Thresholds are
//! evaluated highest-first and are closed above: exactly 4.5 is Excellent,
//! exactly 3.5 is Good, exactly 2.5 is Acceptable.

use crate::model::MetricKind;
use serde::{Deserialize, Serialize};

/// Threshold above which the automatic conclusion turns positive.
const POSITIVE_CONCLUSION_THRESHOLD: f64 = 3.5;

/// Qualitative band for a score, sub-score or composite alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Score >= 4.5
    Excellent,
    /// Score >= 3.5
    Good,
    /// Score >= 2.5
    Acceptable,
    /// Everything below 2.5
    Critical,
}

impl Tier {
    /// Band a score. Thresholds are closed above, checked highest-first.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Self::Excellent
        } else if score >= 3.5 {
            Self::Good
        } else if score >= 2.5 {
            Self::Acceptable
        } else {
            Self::Critical
        }
    }

    /// Short tier label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::Critical => "Critical",
        }
    }

    /// Long-form interpretation of an overall score in this tier
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "Outstanding overall quality. Keep the current practices in place \
                 and continue measuring to sustain the level."
            }
            Self::Good => {
                "Stable quality with room to improve. More automated testing and \
                 lower complexity would raise the score."
            }
            Self::Acceptable => {
                "The software partially meets its quality goals. Review the quality \
                 assurance and maintenance processes."
            }
            Self::Critical => {
                "Quality is low and urgent action is required: debugging, \
                 refactoring and a stronger test suite."
            }
        }
    }

    /// Display color for reports that carry color (hex)
    #[must_use]
    pub const fn hex_color(&self) -> &'static str {
        match self {
            Self::Excellent => "#1f7a0b",
            Self::Good => "#7bb72f",
            Self::Acceptable => "#f59e0b",
            Self::Critical => "#d9534f",
        }
    }

    /// Per-criterion recommendation sentence for this tier.
    ///
    /// The sentence varies only by tier; the criterion name is prepended by
    /// [`recommendation_for`].
    #[must_use]
    pub const fn advice(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent — keep the current practices in place.",
            Self::Good => "Good — schedule periodic reviews to keep improving.",
            Self::Acceptable => {
                "Acceptable — revisit the metrics, broaden coverage or simplify code."
            }
            Self::Critical => {
                "Critical — urgent refactoring plan and an expanded test suite needed."
            }
        }
    }
}

/// One per-criterion recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Criterion this applies to
    pub kind: MetricKind,
    /// The criterion's sub-score
    pub score: f64,
    /// Band of the sub-score
    pub tier: Tier,
    /// Rendered sentence; may contain `**inline emphasis**` markers
    pub text: String,
}

/// Build the recommendation for one criterion from its sub-score.
#[must_use]
pub fn recommendation_for(kind: MetricKind, score: f64) -> Recommendation {
    let tier = Tier::from_score(score);
    Recommendation {
        kind,
        score,
        tier,
        text: format!("**{}:** {}", kind.name(), tier.advice()),
    }
}

/// Automatic conclusion sentence for the composite score.
#[must_use]
pub fn conclusion_text(final_score: f64) -> &'static str {
    if final_score >= POSITIVE_CONCLUSION_THRESHOLD {
        "The software shows good overall quality. Keep a culture of continuous \
         measurement in place."
    } else {
        "The software needs structural improvements and more test coverage. \
         Review the quality assurance processes."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_boundaries_are_closed_above() {
        assert_eq!(Tier::from_score(4.5), Tier::Excellent);
        assert_eq!(Tier::from_score(3.5), Tier::Good);
        assert_eq!(Tier::from_score(2.5), Tier::Acceptable);
        assert_eq!(Tier::from_score(2.49), Tier::Critical);
        assert_eq!(Tier::from_score(5.0), Tier::Excellent);
        assert_eq!(Tier::from_score(0.0), Tier::Critical);
    }

    #[test]
    fn recommendation_carries_criterion_name_and_tier() {
        let rec = recommendation_for(MetricKind::TestCoverage, 4.0);
        assert_eq!(rec.tier, Tier::Good);
        assert!(rec.text.starts_with("**Test coverage:**"));
        assert!(rec.text.contains("Good"));
    }

    #[test]
    fn advice_varies_only_by_tier() {
        let a = recommendation_for(MetricKind::DefectDensity, 1.0);
        let b = recommendation_for(MetricKind::MaintainabilityIndex, 1.0);
        let a_tail = a.text.split(":** ").nth(1).unwrap();
        let b_tail = b.text.split(":** ").nth(1).unwrap();
        assert_eq!(a_tail, b_tail);
    }

    #[test]
    fn conclusion_flips_at_three_point_five() {
        assert!(conclusion_text(3.5).contains("good overall quality"));
        assert!(conclusion_text(3.49).contains("needs structural improvements"));
    }
}
