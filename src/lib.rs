//! **An educational software quality scorecard.**
//!
//! `quality-scorecard` converts four software-quality metrics — defect
//! density, test coverage, cyclomatic complexity and maintainability index —
//! into normalized sub-scores on a 0-5 scale, a weighted composite score, a
//! qualitative tier and concrete recommendations. It powers a command-line
//! interface with an interactive TUI and a Rust library for programmatic use.
//!
//! ## Key features
//!
//! - **Forgiving input**: metrics are accepted as numbers or numeric-like
//!   text; invalid or missing values coerce to safe defaults instead of
//!   erroring.
//! - **Deterministic scoring**: four pure normalization formulas, a
//!   fixed-weight composite and closed-above banding thresholds.
//! - **Visualization**: an interactive terminal UI with a bar view and a
//!   radar view of the four sub-scores.
//! - **Single-slot persistence**: the last evaluation is kept locally and
//!   can be re-displayed or exported as a timestamped JSON document.
//!
//! ## Core concepts & modules
//!
//! - **[`model`]**: raw [`MetricInputs`], derived [`SubScores`] and the
//!   persisted [`EvaluationRecord`].
//! - **[`scoring`]**: the scoring engine — normalization, weighting, banding
//!   and the [`Evaluator`] producing an [`EvaluationView`].
//! - **[`store`]**: the single-slot [`EvaluationStore`] repository with its
//!   JSON-file backend.
//! - **[`reports`]**: summary, JSON and Markdown renderings.
//! - **[`tui`]**: the interactive terminal UI.
//! - **[`cli`]**: command handlers and exit codes.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Example
//!
//! ```
//! use quality_scorecard::model::MetricInputs;
//! use quality_scorecard::scoring::Evaluator;
//!
//! let inputs = MetricInputs::from_raw(Some("2"), Some("80"), Some("5"), Some("90"));
//! let view = Evaluator::new().evaluate(&inputs);
//!
//! assert_eq!(view.final_score(), 4.12);
//! println!("{} — {}", view.tier.label(), view.interpretation());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;
pub mod scoring;
pub mod store;
pub mod tui;

pub use error::{Result, ScorecardError};
pub use model::{EvaluationRecord, MetricInputs, MetricKind, SubScores};
pub use scoring::{EvaluationView, Evaluator, Tier};
pub use store::{EvaluationStore, JsonFileStore};
