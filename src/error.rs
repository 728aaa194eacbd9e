//! Unified error types for quality-scorecard.
//!
//! Invalid metric input is never an error in this tool (it coerces to a
//! default, see [`crate::model::MetricInputs`]); the variants here cover the
//! failures that can actually surface: storage, report generation, IO and
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quality-scorecard operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScorecardError {
    /// Errors touching the single-slot evaluation store
    #[error("Evaluation store failure: {context}")]
    Store {
        context: String,
        #[source]
        source: StoreErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific store error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreErrorKind {
    #[error("Record serialization failed: {0}")]
    Serialize(String),

    #[error("No writable store location could be resolved")]
    UnresolvedLocation,

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for quality-scorecard operations
pub type Result<T> = std::result::Result<T, ScorecardError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ScorecardError {
    /// Create a store error with context
    pub fn store(context: impl Into<String>, source: StoreErrorKind) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ScorecardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerialization(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, creating
/// a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ScorecardError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ScorecardError, new_ctx: &str) -> ScorecardError {
    match err {
        ScorecardError::Store {
            context: existing,
            source,
        } => ScorecardError::Store {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ScorecardError::Report {
            context: existing,
            source,
        } => ScorecardError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ScorecardError::Io {
            path,
            message,
            source,
        } => ScorecardError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ScorecardError::Config(msg) => ScorecardError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
