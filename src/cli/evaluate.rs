//! Evaluate command handler.
//!
//! Coerces the raw metric flags, runs the scoring engine, persists the
//! record and renders the result in the requested format.

use anyhow::Result;
use std::path::PathBuf;

use super::output::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::cli::exit_codes;
use crate::model::MetricInputs;
use crate::reports::{self, ReportFormat};
use crate::scoring::Evaluator;
use crate::store::{EvaluationStore, JsonFileStore};
use crate::tui::App;

/// Evaluate command configuration
pub struct EvaluateConfig {
    /// Defects per KLOC, as typed (numeric-like text accepted)
    pub defects: Option<String>,
    /// Test coverage percentage
    pub coverage: Option<String>,
    /// Cyclomatic complexity
    pub complexity: Option<String>,
    /// Maintainability index
    pub maintainability: Option<String>,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    /// Exit with a non-zero code when the final score is below this
    pub min_score: Option<f64>,
    /// Skip persisting the record
    pub no_store: bool,
    pub no_color: bool,
    /// Export destination handed to the TUI (from config)
    pub export_dir: Option<PathBuf>,
    /// Export filename template handed to the TUI (from config)
    pub export_template: Option<String>,
}

/// Run the evaluate command, returning the desired exit code.
pub fn run_evaluate(config: EvaluateConfig, store: &JsonFileStore) -> Result<i32> {
    let inputs = MetricInputs::from_raw(
        config.defects.as_deref(),
        config.coverage.as_deref(),
        config.complexity.as_deref(),
        config.maintainability.as_deref(),
    );
    let view = Evaluator::new().evaluate(&inputs);

    tracing::info!(
        "Evaluated quality: {:.2} / 5 ({})",
        view.final_score(),
        view.tier.label()
    );

    if !config.no_store {
        store.save(&view.record)?;
    }

    let target = OutputTarget::from_option(config.output_file);
    let format = auto_detect_format(config.output, &target);

    if format == ReportFormat::Tui {
        let app = App::with_view(Box::new(store.clone()), view.clone())
            .with_export_options(config.export_dir, config.export_template);
        crate::tui::run(app)?;
    } else {
        let use_color = should_use_color(config.no_color);
        let text = reports::render(&view, format, use_color)?;
        write_output(&text, &target, false)?;
    }

    if let Some(threshold) = config.min_score {
        if view.final_score() < threshold {
            tracing::error!(
                "Final score {:.2} is below minimum threshold {:.2}",
                view.final_score(),
                threshold
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(scores: [&str; 4]) -> EvaluateConfig {
        EvaluateConfig {
            defects: Some(scores[0].to_string()),
            coverage: Some(scores[1].to_string()),
            complexity: Some(scores[2].to_string()),
            maintainability: Some(scores[3].to_string()),
            output: ReportFormat::Summary,
            output_file: None,
            min_score: None,
            no_store: false,
            no_color: true,
            export_dir: None,
            export_template: None,
        }
    }

    #[test]
    fn evaluate_persists_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slot.json"));

        let code = run_evaluate(config_for(["2", "80", "5", "90"]), &store).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let record = store.load().unwrap().expect("record should be persisted");
        assert_eq!(record.final_score, 4.12);
    }

    #[test]
    fn evaluate_no_store_leaves_slot_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slot.json"));

        let mut config = config_for(["2", "80", "5", "90"]);
        config.no_store = true;
        run_evaluate(config, &store).unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn evaluate_min_score_gate() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slot.json"));

        let mut config = config_for(["9", "10", "25", "20"]);
        config.min_score = Some(3.0);
        let code = run_evaluate(config, &store).unwrap();
        assert_eq!(code, exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn evaluate_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slot.json"));
        let report_path = dir.path().join("report.json");

        let mut config = config_for(["0", "100", "1", "100"]);
        config.output = ReportFormat::Json;
        config.output_file = Some(report_path.clone());
        run_evaluate(config, &store).unwrap();

        let raw = std::fs::read_to_string(report_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["report"]["record"]["final_score"], 5.0);
    }
}
