//! Core data model: raw metric inputs, derived sub-scores and the persisted
//! evaluation record.
//!
//! Raw inputs are accepted as numbers or numeric-like text. Coercion is
//! deliberately forgiving: anything that does not parse becomes the field's
//! default (0, or 1 for cyclomatic complexity, which is divided into rather
//! than scaled). Invalid input is never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four quality criteria, in display order.
///
/// The order here is a contract: charts, reports and recommendation lists all
/// render criteria in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Defects per KLOC (lower is better)
    DefectDensity,
    /// Test coverage percentage (higher is better)
    TestCoverage,
    /// Cyclomatic complexity (lower is better)
    CyclomaticComplexity,
    /// Maintainability index 0-100 (higher is better)
    MaintainabilityIndex,
}

impl MetricKind {
    /// All criteria in display order
    pub const ALL: [Self; 4] = [
        Self::DefectDensity,
        Self::TestCoverage,
        Self::CyclomaticComplexity,
        Self::MaintainabilityIndex,
    ];

    /// Short label used as a chart axis label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DefectDensity => "Defects",
            Self::TestCoverage => "Coverage",
            Self::CyclomaticComplexity => "Complexity",
            Self::MaintainabilityIndex => "Maintainability",
        }
    }

    /// Full human-readable criterion name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DefectDensity => "Defect density",
            Self::TestCoverage => "Test coverage",
            Self::CyclomaticComplexity => "Cyclomatic complexity",
            Self::MaintainabilityIndex => "Maintainability index",
        }
    }
}

/// Parse a numeric-like string the way a forgiving form field would.
///
/// Skips leading whitespace, then takes the longest leading prefix that reads
/// as a float (optional sign, digits, one decimal point, optional exponent).
/// Trailing junk is ignored: `"12.5 defects"` parses as `12.5`. Returns
/// `None` when no digits are found.
#[must_use]
pub fn parse_metric(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }

    // Exponent suffix only counts if at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digit_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digit_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Raw metric values for one evaluation. Transient, recreated per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricInputs {
    /// Defects per KLOC
    pub defect_density: f64,
    /// Test coverage percentage
    pub coverage_percent: f64,
    /// Cyclomatic complexity
    pub cyclomatic_complexity: f64,
    /// Maintainability index (0-100)
    pub maintainability_index: f64,
}

impl MetricInputs {
    /// Build inputs from already-numeric values.
    #[must_use]
    pub const fn new(
        defect_density: f64,
        coverage_percent: f64,
        cyclomatic_complexity: f64,
        maintainability_index: f64,
    ) -> Self {
        Self {
            defect_density,
            coverage_percent,
            cyclomatic_complexity,
            maintainability_index,
        }
    }

    /// Build inputs from optional text fields, applying the coercion rules.
    ///
    /// Missing or unparseable fields default to 0, except complexity which
    /// defaults to 1. A complexity of exactly 0 also coerces to 1: the
    /// formula's domain starts at 1, and an empty field and a zero field
    /// are treated identically.
    #[must_use]
    pub fn from_raw(
        defects: Option<&str>,
        coverage: Option<&str>,
        complexity: Option<&str>,
        maintainability: Option<&str>,
    ) -> Self {
        Self {
            defect_density: Self::coerce_metric(defects),
            coverage_percent: Self::coerce_metric(coverage),
            cyclomatic_complexity: Self::coerce_complexity(complexity),
            maintainability_index: Self::coerce_metric(maintainability),
        }
    }

    /// Coerce an optional text field to a metric value, defaulting to 0.
    #[must_use]
    pub fn coerce_metric(raw: Option<&str>) -> f64 {
        match raw.and_then(parse_metric) {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }

    /// Coerce the complexity field, defaulting to 1 for missing, unparseable
    /// or zero values.
    #[must_use]
    pub fn coerce_complexity(raw: Option<&str>) -> f64 {
        match raw.and_then(parse_metric) {
            Some(v) if v.is_finite() && v != 0.0 => v,
            _ => 1.0,
        }
    }

    /// Raw value for one criterion
    #[must_use]
    pub const fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::DefectDensity => self.defect_density,
            MetricKind::TestCoverage => self.coverage_percent,
            MetricKind::CyclomaticComplexity => self.cyclomatic_complexity,
            MetricKind::MaintainabilityIndex => self.maintainability_index,
        }
    }
}

impl Default for MetricInputs {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }
}

/// Normalized sub-scores, one per criterion, each in [0, 5] rounded to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub defects: f64,
    pub coverage: f64,
    pub complexity: f64,
    pub maintainability: f64,
}

impl SubScores {
    /// Sub-score for one criterion
    #[must_use]
    pub const fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::DefectDensity => self.defects,
            MetricKind::TestCoverage => self.coverage,
            MetricKind::CyclomaticComplexity => self.complexity,
            MetricKind::MaintainabilityIndex => self.maintainability,
        }
    }

    /// Sub-scores as an ordered 4-tuple matching [`MetricKind::ALL`]
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.defects,
            self.coverage,
            self.complexity,
            self.maintainability,
        ]
    }
}

/// Snapshot of one scoring run: inputs, derived scores and when it happened.
///
/// Immutable once produced. The store retains exactly one of these at a time;
/// each new evaluation overwrites the previous record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// When the evaluation ran
    pub evaluated_at: DateTime<Utc>,
    /// Raw inputs as coerced
    pub inputs: MetricInputs,
    /// Normalized sub-scores
    pub scores: SubScores,
    /// Weighted composite score in [0, 5]
    pub final_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_metric_plain_numbers() {
        assert_eq!(parse_metric("42"), Some(42.0));
        assert_eq!(parse_metric("3.25"), Some(3.25));
        assert_eq!(parse_metric("-7"), Some(-7.0));
        assert_eq!(parse_metric("+0.5"), Some(0.5));
        assert_eq!(parse_metric(".5"), Some(0.5));
    }

    #[test]
    fn parse_metric_ignores_trailing_junk() {
        assert_eq!(parse_metric("12.5 defects"), Some(12.5));
        assert_eq!(parse_metric("  80%"), Some(80.0));
        assert_eq!(parse_metric("1.2.3"), Some(1.2));
    }

    #[test]
    fn parse_metric_exponent() {
        assert_eq!(parse_metric("1e2"), Some(100.0));
        assert_eq!(parse_metric("1.5e-1"), Some(0.15));
        // bare exponent marker is trailing junk, not an exponent
        assert_eq!(parse_metric("3e"), Some(3.0));
        assert_eq!(parse_metric("3e+"), Some(3.0));
    }

    #[test]
    fn parse_metric_rejects_non_numeric() {
        assert_eq!(parse_metric(""), None);
        assert_eq!(parse_metric("abc"), None);
        assert_eq!(parse_metric("."), None);
        assert_eq!(parse_metric("-"), None);
        assert_eq!(parse_metric("e5"), None);
    }

    #[test]
    fn coerce_metric_defaults_to_zero() {
        assert_eq!(MetricInputs::coerce_metric(None), 0.0);
        assert_eq!(MetricInputs::coerce_metric(Some("")), 0.0);
        assert_eq!(MetricInputs::coerce_metric(Some("n/a")), 0.0);
        assert_eq!(MetricInputs::coerce_metric(Some("12")), 12.0);
    }

    #[test]
    fn coerce_complexity_defaults_to_one() {
        assert_eq!(MetricInputs::coerce_complexity(None), 1.0);
        assert_eq!(MetricInputs::coerce_complexity(Some("")), 1.0);
        assert_eq!(MetricInputs::coerce_complexity(Some("0")), 1.0);
        assert_eq!(MetricInputs::coerce_complexity(Some("-0")), 1.0);
        assert_eq!(MetricInputs::coerce_complexity(Some("7")), 7.0);
        // negatives pass through; the normalizer maps them to 0
        assert_eq!(MetricInputs::coerce_complexity(Some("-3")), -3.0);
    }

    #[test]
    fn metric_kind_order_is_stable() {
        let labels: Vec<_> = MetricKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["Defects", "Coverage", "Complexity", "Maintainability"]
        );
    }

    #[test]
    fn sub_scores_array_matches_kind_order() {
        let scores = SubScores {
            defects: 1.0,
            coverage: 2.0,
            complexity: 3.0,
            maintainability: 4.0,
        };
        let arr = scores.as_array();
        for (i, kind) in MetricKind::ALL.iter().enumerate() {
            assert_eq!(arr[i], scores.get(*kind));
        }
    }
}
