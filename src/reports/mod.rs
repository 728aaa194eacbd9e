//! Report generation for evaluation results.
//!
//! Non-interactive renderings of an [`EvaluationView`]:
//! - Summary: compact shell-friendly output (optionally colored)
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//!
//! The interactive TUI rendering lives in [`crate::tui`].

mod json;
mod markdown;
mod summary;
mod types;

pub use json::render_json;
pub use markdown::render_markdown;
pub use summary::render_summary;
pub use types::ReportFormat;

use crate::error::{Result, ReportErrorKind, ScorecardError};
use crate::scoring::EvaluationView;

/// Render an evaluation in the given format.
///
/// `Auto` and `Tui` must be resolved by the caller before rendering; they are
/// display modes, not text formats.
pub fn render(view: &EvaluationView, format: ReportFormat, use_color: bool) -> Result<String> {
    match format {
        ReportFormat::Summary => Ok(render_summary(view, use_color)),
        ReportFormat::Json => render_json(view),
        ReportFormat::Markdown => Ok(render_markdown(view)),
        ReportFormat::Auto | ReportFormat::Tui => Err(ScorecardError::report(
            "rendering evaluation",
            ReportErrorKind::UnsupportedFormat(format.to_string()),
        )),
    }
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
    fn render_dispatches_text_formats() {
        let view = sample_view();
        assert!(render(&view, ReportFormat::Summary, false).is_ok());
        assert!(render(&view, ReportFormat::Json, false).is_ok());
        assert!(render(&view, ReportFormat::Markdown, false).is_ok());
    }

    #[test]
    fn render_rejects_display_modes() {
        let view = sample_view();
        assert!(render(&view, ReportFormat::Auto, false).is_err());
        assert!(render(&view, ReportFormat::Tui, false).is_err());
    }
}
