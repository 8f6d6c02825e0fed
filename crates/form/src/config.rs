//! Form configuration

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::{Validate, ValidationError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct FormConfig {
    #[validate]
    pub notifications: NotificationConfig,
    pub form: FormSettings,
    #[validate]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long the auth-state toast stays up
    #[validate(range(min = 100, max = 60000))]
    pub auth_change_ms: u64,
    /// How long submission outcome toasts stay up
    #[validate(range(min = 100, max = 60000))]
    pub outcome_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Emit the auth toast once when the form is created
    pub announce_initial_state: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    #[validate(custom = "validate_log_level")]
    pub log_level: String,
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_log_level"))
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auth_change_ms: 3000,
            outcome_ms: 4000,
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            announce_initial_state: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl NotificationConfig {
    pub fn auth_change_duration(&self) -> Duration {
        Duration::from_millis(self.auth_change_ms)
    }

    pub fn outcome_duration(&self) -> Duration {
        Duration::from_millis(self.outcome_ms)
    }
}

impl FormConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults: {}", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FormConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.notifications.auth_change_duration(), Duration::from_millis(3000));
        assert!(config.form.announce_initial_state);
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FormConfig::from_toml(
            r#"
[notifications]
outcome_ms = 1500
"#,
        )
        .unwrap();
        assert_eq!(config.notifications.outcome_ms, 1500);
        assert_eq!(config.notifications.auth_change_ms, 3000);
        assert!(config.form.announce_initial_state);
    }

    #[test]
    fn test_out_of_range_duration_rejected() {
        let result = FormConfig::from_toml(
            r#"
[notifications]
auth_change_ms = 10
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result = FormConfig::from_toml(
            r#"
[logging]
log_level = "chatty"
"#,
        );
        assert!(result.is_err());
    }
}
