//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use std::path::{Path, PathBuf};

use super::types::AppConfig;
use super::validation::Validatable;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".quality-scorecard.yaml",
    ".quality-scorecard.yml",
    "quality-scorecard.yaml",
    "quality-scorecard.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/quality-scorecard/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(git_root) = find_git_root() {
        if let Some(path) = find_config_in_dir(&git_root) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("quality-scorecard")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
    /// File parsed but contains invalid values
    Invalid(super::validation::ConfigError),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
            Self::Invalid(e) => write!(f, "Invalid config value: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(e) => Some(e),
            Self::NotFound(_) => None,
        }
    }
}

/// Load and validate a config file from an explicit path.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(ConfigFileError::Io)?;
    let config: AppConfig = serde_yaml::from_str(&raw).map_err(ConfigFileError::Parse)?;
    config.validate().map_err(ConfigFileError::Invalid)?;
    Ok(config)
}

/// Load a discovered config file, or fall back to defaults.
///
/// Returns the config and the path it was loaded from (if any). A config
/// file that fails to load logs a warning and falls back to defaults rather
/// than aborting the run.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {e}", path.display());
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}

/// Generate an example config file with defaults and comments.
#[must_use]
pub fn generate_example_config() -> String {
    r"# quality-scorecard configuration
# Place as .quality-scorecard.yaml in your project root
# or in ~/.config/quality-scorecard/

output:
  # Default report format: auto, tui, summary, json, markdown
  format: auto
  # Disable colored output
  no_color: false
  # Directory exported records are written to (default: current directory)
  # export_dir: ./exports
  # Export filename template; placeholders: {date}, {time}
  # export_template: 'quality_evaluation_{date}_{time}.json'

# store:
#   # Override the store file path (default: platform data directory)
#   path: /tmp/quality-scorecard/last-evaluation.json

tui:
  # Theme: dark or light
  theme: dark
  mouse_enabled: true
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_config_parses_and_validates() {
        let config: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_explicit_file_is_not_found() {
        let err = load_config_file(Path::new("/nonexistent/qs.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }
}
