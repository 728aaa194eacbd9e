//! Interactive TUI using ratatui.
//!
//! A single-screen application: metric form on the left, the current
//! evaluation on the right as a score gauge, a bar view, a radar view and
//! the recommendation panel. Key commands cover the whole workflow:
//! evaluate, clear, load-last, export, theme toggle.

mod app;
mod events;
pub mod theme;
mod ui;
pub(crate) mod widgets;

pub use app::{App, StatusMessage, FIELD_LABELS};
pub use events::{Event, EventHandler};
pub use theme::{colors, set_theme, toggle_theme, ColorScheme, Theme};
pub use ui::run;
