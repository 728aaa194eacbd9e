//! Normalization formulas.
//!
//! Each function maps one raw metric to a sub-score in [0, 5], rounded to two
//! decimals. All four are total: non-finite and negative inputs score 0.

use crate::model::MetricKind;

/// Upper bound of every sub-score and of the composite score.
pub const MAX_SCORE: f64 = 5.0;

/// Defect density at or above which the sub-score bottoms out at 0.
const DEFECT_CEILING: f64 = 10.0;

/// Complexity values are clamped here before normalization so that extreme
/// inputs cannot produce unbounded intermediates.
const COMPLEXITY_CAP: f64 = 40.0;

/// Complexity range that maps linearly onto the score scale: 1 scores 5,
/// 1 + span (= 20) scores 0.
const COMPLEXITY_SPAN: f64 = 19.0;

/// Round to two decimal places, half away from zero on the scaled value.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Defects per KLOC, lower is better. 0 scores 5, anything at or beyond 10
/// scores 0, linear in between.
#[must_use]
pub fn normalize_defect_density(v: f64) -> f64 {
    if !v.is_finite() || v < 0.0 {
        return 0.0;
    }
    let score = (MAX_SCORE * (1.0 - v / DEFECT_CEILING)).max(0.0);
    round2(score.min(MAX_SCORE))
}

/// Coverage percentage, higher is better. Linear; values above 100 clamp to 5.
#[must_use]
pub fn normalize_coverage(v: f64) -> f64 {
    if !v.is_finite() || v < 0.0 {
        return 0.0;
    }
    round2((v / 100.0 * MAX_SCORE).min(MAX_SCORE))
}

/// Cyclomatic complexity, lower is better. 1 scores 5, 20 scores 0, values
/// beyond 20 stay at 0. Inputs below 1 extrapolate linearly and clamp to 5.
#[must_use]
pub fn normalize_complexity(v: f64) -> f64 {
    if !v.is_finite() || v < 0.0 {
        return 0.0;
    }
    let clamped = v.min(COMPLEXITY_CAP);
    let score = (MAX_SCORE - ((clamped - 1.0) / COMPLEXITY_SPAN) * MAX_SCORE).max(0.0);
    round2(score.min(MAX_SCORE))
}

/// Maintainability index (0-100), higher is better. Same linear shape as
/// coverage.
#[must_use]
pub fn normalize_maintainability(v: f64) -> f64 {
    if !v.is_finite() || v < 0.0 {
        return 0.0;
    }
    round2((v / 100.0 * MAX_SCORE).min(MAX_SCORE))
}

/// Normalize one raw value for the given criterion.
#[must_use]
pub fn normalize(kind: MetricKind, v: f64) -> f64 {
    match kind {
        MetricKind::DefectDensity => normalize_defect_density(v),
        MetricKind::TestCoverage => normalize_coverage(v),
        MetricKind::CyclomaticComplexity => normalize_complexity(v),
        MetricKind::MaintainabilityIndex => normalize_maintainability(v),
    }
}
