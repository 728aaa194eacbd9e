//! Last command handler.
//!
//! Re-displays the persisted evaluation. An empty slot is an ordinary,
//! non-fatal outcome signalled through the exit code.

use anyhow::Result;
use std::path::PathBuf;

use super::output::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::cli::exit_codes;
use crate::reports::{self, ReportFormat};
use crate::scoring::EvaluationView;
use crate::store::{EvaluationStore, JsonFileStore};
use crate::tui::App;

/// Run the last command, returning the desired exit code.
pub fn run_last(
    output: ReportFormat,
    output_file: Option<PathBuf>,
    no_color: bool,
    export_dir: Option<PathBuf>,
    export_template: Option<String>,
    store: &JsonFileStore,
) -> Result<i32> {
    let Some(record) = store.load()? else {
        eprintln!("No saved evaluation yet.");
        return Ok(exit_codes::NO_RECORD);
    };

    let view = EvaluationView::from_record(record);
    let target = OutputTarget::from_option(output_file);
    let format = auto_detect_format(output, &target);

    if format == ReportFormat::Tui {
        let app = App::with_view(Box::new(store.clone()), view)
            .with_export_options(export_dir, export_template);
        crate::tui::run(app)?;
        return Ok(exit_codes::SUCCESS);
    }

    let text = reports::render(&view, format, should_use_color(no_color))?;
    write_output(&text, &target, false)?;
    Ok(exit_codes::SUCCESS)
}
