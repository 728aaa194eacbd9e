//! Configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reports::ReportFormat;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration loadable from a config file, with CLI flags
/// taking precedence over file values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (default format, colors, export)
    pub output: OutputConfig,
    /// Evaluation store configuration
    pub store: StoreConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create an `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format when no `--output` flag is given
    pub format: ReportFormat,
    /// Disable colored output (also respects `NO_COLOR` env)
    pub no_color: bool,
    /// Directory exported records are written to (default: current directory)
    pub export_dir: Option<PathBuf>,
    /// Export filename template
    ///
    /// Placeholders: `{date}`, `{time}`. Default:
    /// `quality_evaluation_{date}_{time}.json`
    pub export_template: Option<String>,
}

// ============================================================================
// Store Configuration
// ============================================================================

/// Evaluation store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StoreConfig {
    /// Override the store file path (default: platform data directory)
    pub path: Option<PathBuf>,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark" or "light"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted separately from the config file)
// ============================================================================

/// User preferences the TUI persists across sessions (theme toggling).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark" or "light"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quality-scorecard").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, ReportFormat::Auto);
        assert!(!config.output.no_color);
        assert!(config.store.path.is_none());
        assert_eq!(config.tui.theme, "dark");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("output:\n  no_color: true\n").unwrap();
        assert!(config.output.no_color);
        assert_eq!(config.tui.theme, "dark");
    }
}
