//! Single-slot persistence for the last evaluation.
//!
//! The store keeps exactly one [`EvaluationRecord`]: each save overwrites the
//! previous one, and an empty slot is the ordinary "no evaluation yet" state,
//! not an error. The trait keeps the scoring engine independent of any
//! particular storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, Result, ScorecardError, StoreErrorKind};
use crate::model::EvaluationRecord;

/// Single-slot repository for the last evaluation.
pub trait EvaluationStore {
    /// Read the persisted record, if any.
    fn load(&self) -> Result<Option<EvaluationRecord>>;

    /// Persist a record, overwriting any previous one.
    fn save(&self, record: &EvaluationRecord) -> Result<()>;

    /// Empty the slot. A no-op when the slot is already empty.
    fn clear(&self) -> Result<()>;
}

/// JSON-file backend storing the record at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory
    /// (e.g. `~/.local/share/quality-scorecard/last-evaluation.json`).
    pub fn at_default_location() -> Result<Self> {
        let dir = dirs::data_dir().ok_or_else(|| {
            ScorecardError::store(
                "resolving default store path",
                StoreErrorKind::UnresolvedLocation,
            )
        })?;
        Ok(Self::new(
            dir.join("quality-scorecard").join("last-evaluation.json"),
        ))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EvaluationStore for JsonFileStore {
    fn load(&self) -> Result<Option<EvaluationRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| ScorecardError::io(&self.path, e))?;

        // A record that fails to parse is recoverable: fall back to the
        // empty-slot state instead of propagating the parse failure.
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(
                    "Persisted evaluation at {} is corrupted ({e}); treating as empty",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, record: &EvaluationRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScorecardError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(record).map_err(|e| {
            ScorecardError::store(
                "serializing evaluation record",
                StoreErrorKind::Serialize(e.to_string()),
            )
        })?;
        fs::write(&self.path, json).map_err(|e| {
            ScorecardError::store(
                format!("writing {}", self.path.display()),
                StoreErrorKind::WriteFailed(e.to_string()),
            )
        })?;
        tracing::debug!("Evaluation persisted to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("clearing evaluation slot")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_kept() {
        let store = JsonFileStore::new("/tmp/qs-test/slot.json");
        assert_eq!(store.path(), Path::new("/tmp/qs-test/slot.json"));
    }

    #[test]
    fn missing_file_is_empty_slot() {
        let store = JsonFileStore::new("/nonexistent/quality-scorecard/slot.json");
        assert!(store.load().unwrap().is_none());
    }
}
