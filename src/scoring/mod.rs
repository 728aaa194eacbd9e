//! Quality scoring engine.
//!
//! Converts four raw metrics into normalized sub-scores on a 0-5 scale, a
//! weighted composite score, a qualitative tier and per-criterion
//! recommendation text.
//!
//! # Usage
//!
//! ```
//! use quality_scorecard::model::MetricInputs;
//! use quality_scorecard::scoring::{Evaluator, Tier};
//!
//! let inputs = MetricInputs::new(2.0, 80.0, 5.0, 90.0);
//! let view = Evaluator::new().evaluate(&inputs);
//!
//! assert_eq!(view.record.scores.defects, 4.0);
//! assert_eq!(view.tier, Tier::Good);
//! for rec in &view.recommendations {
//!     println!("{}", rec.text);
//! }
//! ```

mod banding;
mod evaluator;
mod normalize;
mod weights;

pub use banding::{conclusion_text, recommendation_for, Recommendation, Tier};
pub use evaluator::{EvaluationView, Evaluator};
pub use normalize::{
    normalize, normalize_complexity, normalize_coverage, normalize_defect_density,
    normalize_maintainability, round2, MAX_SCORE,
};
pub use weights::ScoringWeights;
