//! Configuration validation.

use thiserror::Error;

use super::types::{AppConfig, OutputConfig, StoreConfig, TuiConfig};

/// Placeholders allowed in the export filename template.
const TEMPLATE_PLACEHOLDERS: &[&str] = &["date", "time"];

/// Validation error for configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Unknown export template placeholder: {{{0}}} (valid: {{date}}, {{time}})")]
    UnknownPlaceholder(String),

    #[error("Export template must not be empty")]
    EmptyTemplate,

    #[error("Store path must not be empty")]
    EmptyStorePath,

    #[error("Unknown TUI theme: {0} (valid: dark, light)")]
    UnknownTheme(String),
}

/// Trait for validatable configuration sections.
pub trait Validatable {
    /// Check the section for invalid values.
    fn validate(&self) -> Result<(), ConfigError>;
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(template) = &self.export_template {
            validate_template(template)?;
        }
        Ok(())
    }
}

impl Validatable for StoreConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyStorePath);
            }
        }
        Ok(())
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.theme.as_str() {
            "dark" | "light" => Ok(()),
            other => Err(ConfigError::UnknownTheme(other.to_string())),
        }
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()?;
        self.store.validate()?;
        self.tui.validate()?;
        Ok(())
    }
}

/// Check an export template for unknown `{placeholder}` tokens.
fn validate_template(template: &str) -> Result<(), ConfigError> {
    if template.trim().is_empty() {
        return Err(ConfigError::EmptyTemplate);
    }

    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if !TEMPLATE_PLACEHOLDERS.contains(&name) {
                    return Err(ConfigError::UnknownPlaceholder(name.to_string()));
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert_eq!(AppConfig::default().validate(), Ok(()));
    }

    #[test]
    fn valid_template_accepted() {
        let mut config = OutputConfig::default();
        config.export_template = Some("eval_{date}_{time}.json".to_string());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn unknown_placeholder_rejected() {
        let mut config = OutputConfig::default();
        config.export_template = Some("eval_{hostname}.json".to_string());
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownPlaceholder("hostname".to_string()))
        );
    }

    #[test]
    fn empty_template_rejected() {
        let mut config = OutputConfig::default();
        config.export_template = Some("  ".to_string());
        assert_eq!(config.validate(), Err(ConfigError::EmptyTemplate));
    }

    #[test]
    fn unknown_theme_rejected() {
        let mut config = TuiConfig::default();
        config.theme = "solarized".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownTheme(_))
        ));
    }
}
