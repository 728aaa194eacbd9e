//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! business logic for a specific subcommand and returns the desired process
//! exit code; the caller is responsible for `std::process::exit`.

mod evaluate;
mod export;
mod last;
mod output;

pub use evaluate::{run_evaluate, EvaluateConfig};
pub use export::{export_record, run_export, DEFAULT_EXPORT_TEMPLATE};
pub use last::run_last;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Final score fell below the `--min-score` threshold
    pub const BELOW_THRESHOLD: i32 = 1;
    /// No persisted evaluation was available (export/last)
    pub const NO_RECORD: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_THRESHOLD, 1);
        assert_eq!(exit_codes::NO_RECORD, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
