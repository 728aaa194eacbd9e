//! Application state for the TUI.
//!
//! The TUI is a single screen: an input form on the left, the current
//! evaluation (gauge, bar view, radar view, recommendations) on the right.
//! The app owns the store handle; the chart panes are rebuilt from the
//! current evaluation on every draw, so there is no chart state to dispose.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

use crate::cli::export_record;
use crate::config::TuiPreferences;
use crate::model::{MetricInputs, MetricKind};
use crate::scoring::{EvaluationView, Evaluator};
use crate::store::EvaluationStore;
use crate::tui::theme::toggle_theme;

/// Transient message shown in the status pane.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Field labels shown on the form, in [`MetricKind::ALL`] order.
pub const FIELD_LABELS: [&str; 4] = [
    "Defect density (per KLOC)",
    "Test coverage (%)",
    "Cyclomatic complexity",
    "Maintainability index (0-100)",
];

/// TUI application state.
pub struct App {
    store: Box<dyn EvaluationStore>,
    /// Raw form field contents, one per criterion
    pub fields: [String; 4],
    /// Index of the focused field
    pub focus: usize,
    /// Current evaluation, if any
    pub view: Option<EvaluationView>,
    /// Last status message
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
    pub mouse_enabled: bool,
    /// Theme used when no saved preference exists
    pub theme: String,
    /// Directory exports are written to (default: current directory)
    pub export_dir: Option<PathBuf>,
    /// Export filename template override
    pub export_template: Option<String>,
}

impl App {
    /// Create an app with an empty form.
    #[must_use]
    pub fn new(store: Box<dyn EvaluationStore>) -> Self {
        Self {
            store,
            fields: Default::default(),
            focus: 0,
            view: None,
            status: None,
            show_help: false,
            should_quit: false,
            tick: 0,
            mouse_enabled: true,
            theme: "dark".to_string(),
            export_dir: None,
            export_template: None,
        }
    }

    /// Create an app pre-loaded with an evaluation (form filled from its
    /// inputs).
    #[must_use]
    pub fn with_view(store: Box<dyn EvaluationStore>, view: EvaluationView) -> Self {
        let mut app = Self::new(store);
        app.fields = fields_from_inputs(&view.record.inputs);
        app.view = Some(view);
        app
    }

    /// Configure export destination and filename template.
    #[must_use]
    pub fn with_export_options(
        mut self,
        dir: Option<PathBuf>,
        template: Option<String>,
    ) -> Self {
        self.export_dir = dir;
        self.export_template = template;
        self
    }

    /// Enable or disable mouse capture.
    #[must_use]
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Set the fallback theme used when no saved preference exists.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    /// Handle a key event and update state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % 4,
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + 3) % 4,
            KeyCode::Enter => self.evaluate(),
            KeyCode::Backspace => {
                self.fields[self.focus].pop();
            }
            KeyCode::Char('c') => self.clear_form(),
            KeyCode::Char('l') => self.load_last(),
            KeyCode::Char('x') => self.export(),
            KeyCode::Char('t') => self.switch_theme(),
            KeyCode::Char(ch) if is_input_char(ch) => self.fields[self.focus].push(ch),
            _ => {}
        }
    }

    /// Run the scoring engine on the current form contents and persist the
    /// record.
    pub fn evaluate(&mut self) {
        let inputs = MetricInputs::from_raw(
            Some(self.fields[0].as_str()),
            Some(self.fields[1].as_str()),
            Some(self.fields[2].as_str()),
            Some(self.fields[3].as_str()),
        );
        let view = Evaluator::new().evaluate(&inputs);

        match self.store.save(&view.record) {
            Ok(()) => self.set_status(
                format!(
                    "Evaluated: {:.2} / 5 ({})",
                    view.final_score(),
                    view.tier.label()
                ),
                false,
            ),
            Err(e) => self.set_status(format!("Evaluated, but saving failed: {e}"), true),
        }
        self.view = Some(view);
    }

    /// Reset the form and displayed output. The persisted record is kept.
    pub fn clear_form(&mut self) {
        self.fields = Default::default();
        self.focus = 0;
        self.view = None;
        self.set_status("Inputs cleared; saved evaluation kept.", false);
    }

    /// Re-display the persisted evaluation, filling the form from its inputs.
    pub fn load_last(&mut self) {
        match self.store.load() {
            Ok(Some(record)) => {
                self.fields = fields_from_inputs(&record.inputs);
                let stamp = record.evaluated_at.format("%Y-%m-%d %H:%M UTC");
                self.set_status(format!("Loaded evaluation from {stamp}."), false);
                self.view = Some(EvaluationView::from_record(record));
            }
            Ok(None) => self.set_status("No saved evaluation yet.", false),
            Err(e) => self.set_status(format!("Loading failed: {e}"), true),
        }
    }

    /// Export the persisted record to a timestamped JSON file.
    pub fn export(&mut self) {
        match self.store.load() {
            Ok(Some(record)) => {
                match export_record(
                    &record,
                    self.export_dir.as_deref(),
                    self.export_template.as_deref(),
                ) {
                    Ok(path) => self.set_status(format!("Exported to {}", path.display()), false),
                    Err(e) => self.set_status(format!("Export failed: {e}"), true),
                }
            }
            Ok(None) => self.set_status("No evaluation to export.", false),
            Err(e) => self.set_status(format!("Export failed: {e}"), true),
        }
    }

    fn switch_theme(&mut self) {
        let theme = toggle_theme();
        let prefs = TuiPreferences {
            theme: theme.name().to_string(),
        };
        if let Err(e) = prefs.save() {
            tracing::debug!("Could not persist theme preference: {e}");
        }
        self.set_status(format!("Theme: {}", theme.name()), false);
    }

    /// Label of the field at `index`
    #[must_use]
    pub fn field_label(index: usize) -> &'static str {
        FIELD_LABELS.get(index).copied().unwrap_or_default()
    }
}

/// Characters accepted into an input field.
const fn is_input_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e')
}

/// Render raw inputs back into editable field text.
fn fields_from_inputs(inputs: &MetricInputs) -> [String; 4] {
    let mut fields: [String; 4] = Default::default();
    for (field, kind) in fields.iter_mut().zip(MetricKind::ALL) {
        *field = format!("{}", inputs.get(kind));
    }
    fields
}
