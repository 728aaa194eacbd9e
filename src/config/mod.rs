//! Configuration module for quality-scorecard.
//!
//! Provides:
//! - Type-safe configuration structures
//! - YAML config file loading and discovery
//! - Validation for configurable values
//!
//! Scoring weights and banding thresholds are fixed properties of the
//! scoring model and deliberately absent here; configuration covers output
//! defaults, the store location and TUI preferences only.
//!
//! # Configuration file
//!
//! Place a `.quality-scorecard.yaml` in your project root or
//! `~/.config/quality-scorecard/`:
//!
//! ```yaml
//! output:
//!   format: summary
//!   no_color: false
//! store:
//!   path: /tmp/my-evaluations/last.json
//! tui:
//!   theme: dark
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, OutputConfig, StoreConfig, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents all options settable in `.quality-scorecard.yaml` config files;
/// usable by editors for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
