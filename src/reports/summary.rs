//! Compact shell-friendly report.

use crate::scoring::{EvaluationView, Tier};

/// ANSI color for a tier, or empty when color is disabled.
const fn tier_color(tier: Tier, use_color: bool) -> &'static str {
    if !use_color {
        return "";
    }
    match tier {
        Tier::Excellent | Tier::Good => "\x1b[32m", // Green
        Tier::Acceptable => "\x1b[33m",             // Yellow
        Tier::Critical => "\x1b[31m",               // Red
    }
}

/// Format an evaluation as a compact text summary.
#[must_use]
pub fn render_summary(view: &EvaluationView, use_color: bool) -> String {
    let mut lines = Vec::new();
    let reset = if use_color { "\x1b[0m" } else { "" };
    let tier_color_code = tier_color(view.tier, use_color);

    // Header
    lines.push("Software Quality Evaluation".to_string());
    lines.push(format!(
        "Evaluated: {}",
        view.record.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());

    // Overall score
    lines.push(format!(
        "Final Score: {}{:.2} / 5 ({}){}",
        tier_color_code,
        view.final_score(),
        view.tier.label(),
        reset
    ));
    lines.push(format!("  {}", view.interpretation()));
    lines.push(String::new());

    // Sub-scores
    lines.push("Sub-scores:".to_string());
    for rec in &view.recommendations {
        let color = tier_color(rec.tier, use_color);
        lines.push(format!(
            "  {:<24} {}{:>5.2}{} / 5  [{}]",
            rec.kind.name(),
            color,
            rec.score,
            reset,
            rec.tier.label()
        ));
    }
    lines.push(String::new());

    // Recommendations
    lines.push("Recommendations:".to_string());
    for rec in &view.recommendations {
        lines.push(format!("  - {}", rec.text));
    }
    lines.push(String::new());

    lines.push(format!("Conclusion: {}", view.conclusion));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricInputs;
    use crate::scoring::Evaluator;
    use chrono::{DateTime, Utc};

    fn sample_view() -> EvaluationView {
        let ts: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Evaluator::new().evaluate_at(&MetricInputs::new(2.0, 80.0, 5.0, 90.0), ts)
    }

    #[test]
    fn summary_contains_scores_and_conclusion() {
        let out = render_summary(&sample_view(), false);
        assert!(out.contains("Final Score: 4.12 / 5 (Good)"));
        assert!(out.contains("Defect density"));
        assert!(out.contains("Conclusion:"));
    }

    #[test]
    fn summary_without_color_has_no_escapes() {
        let out = render_summary(&sample_view(), false);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn summary_with_color_resets() {
        let out = render_summary(&sample_view(), true);
        assert!(out.contains("\x1b[32m"));
        assert!(out.contains("\x1b[0m"));
    }
}
