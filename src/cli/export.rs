//! Export command handler.
//!
//! Serializes the persisted evaluation record to a timestamped JSON document.
//! The filename carries the evaluation's own timestamp, not the export time.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::exit_codes;
use crate::error::ScorecardError;
use crate::model::EvaluationRecord;
use crate::store::{EvaluationStore, JsonFileStore};

/// Default export filename template.
///
/// Placeholders: `{date}`, `{time}`.
pub const DEFAULT_EXPORT_TEMPLATE: &str = "quality_evaluation_{date}_{time}.json";

/// Expand an export template with the evaluation timestamp.
#[must_use]
pub fn export_filename(template: &str, evaluated_at: DateTime<Utc>) -> String {
    template
        .replace("{date}", &evaluated_at.format("%Y-%m-%d").to_string())
        .replace("{time}", &evaluated_at.format("%H_%M_%S").to_string())
}

/// Write a record to a timestamped JSON file and return its path.
pub fn export_record(
    record: &EvaluationRecord,
    dir: Option<&Path>,
    template: Option<&str>,
) -> crate::error::Result<PathBuf> {
    let filename = export_filename(
        template.unwrap_or(DEFAULT_EXPORT_TEMPLATE),
        record.evaluated_at,
    );
    let path = dir.map_or_else(|| PathBuf::from(&filename), |d| d.join(&filename));

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScorecardError::io(parent, e))?;
        }
    }

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json).map_err(|e| ScorecardError::io(&path, e))?;
    Ok(path)
}

/// Run the export command, returning the desired exit code.
pub fn run_export(
    dir: Option<PathBuf>,
    template: Option<String>,
    store: &JsonFileStore,
) -> Result<i32> {
    let Some(record) = store.load()? else {
        eprintln!("No evaluation to export.");
        return Ok(exit_codes::NO_RECORD);
    };

    let path = export_record(&record, dir.as_deref(), template.as_deref())?;
    println!("Exported to {}", path.display());
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricInputs;
    use crate::scoring::Evaluator;

    fn fixed_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T09:30:05Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn filename_carries_evaluation_timestamp() {
        let name = export_filename(DEFAULT_EXPORT_TEMPLATE, fixed_time());
        assert_eq!(name, "quality_evaluation_2024-06-01_09_30_05.json");
    }

    #[test]
    fn custom_template_placeholders_expand() {
        let name = export_filename("scores-{date}.json", fixed_time());
        assert_eq!(name, "scores-2024-06-01.json");
    }

    #[test]
    fn export_with_empty_slot_is_no_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slot.json"));

        let code = run_export(Some(dir.path().to_path_buf()), None, &store).unwrap();
        assert_eq!(code, exit_codes::NO_RECORD);
        // nothing written besides the (absent) slot
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_round_trips_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("slot.json"));
        let view =
            Evaluator::new().evaluate_at(&MetricInputs::new(2.0, 80.0, 5.0, 90.0), fixed_time());
        store.save(&view.record).unwrap();

        let path = export_record(&view.record, Some(dir.path()), None).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("quality_evaluation_2024-06-01"));

        let raw = fs::read_to_string(path).unwrap();
        let exported: EvaluationRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(exported, view.record);
    }
}
