//! Markdown report.

use crate::scoring::EvaluationView;

/// Format an evaluation as a Markdown document.
#[must_use]
pub fn render_markdown(view: &EvaluationView) -> String {
    let mut out = String::new();

    out.push_str("# Software Quality Evaluation\n\n");
    out.push_str(&format!(
        "_Evaluated {}_\n\n",
        view.record.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str(&format!(
        "**Final Score: {:.2} / 5 — {}**\n\n{}\n\n",
        view.final_score(),
        view.tier.label(),
        view.interpretation()
    ));

    out.push_str("| Criterion | Raw value | Sub-score | Tier |\n");
    out.push_str("|---|---:|---:|---|\n");
    for rec in &view.recommendations {
        out.push_str(&format!(
            "| {} | {} | {:.2} | {} |\n",
            rec.kind.name(),
            view.record.inputs.get(rec.kind),
            rec.score,
            rec.tier.label()
        ));
    }
    out.push('\n');

    out.push_str("## Recommendations\n\n");
    for rec in &view.recommendations {
        out.push_str(&format!("- {}\n", rec.text));
    }
    out.push('\n');

    out.push_str(&format!("> {}\n", view.conclusion));

    out
}
