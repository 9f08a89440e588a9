//! Screen configuration: theme selection and logging

use crate::logging::LoggingConfig;
use crate::theme::{Theme, ThemePreset};
use serde::Deserialize;
use std::env;
use thiserror::Error;

pub const THEME_VAR: &str = "SIGNUP_THEME";
pub const LOG_LEVEL_VAR: &str = "SIGNUP_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "SIGNUP_LOG_JSON";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Configuration parsing error: {message}")]
    ParseError { message: String },

    #[error("Logging initialisation failed: {message}")]
    Logging { message: String },
}

/// Settings for the signup screens
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Preset palette
    pub theme: ThemePreset,
    /// Full palette; overrides `theme` when set
    pub custom_theme: Option<Theme>,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreset::Registration,
            custom_theme: None,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl FormConfig {
    /// Defaults overridden by `SIGNUP_THEME`, `SIGNUP_LOG_LEVEL` and `SIGNUP_LOG_JSON`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(theme) = env::var(THEME_VAR) {
            config.theme = theme.parse().map_err(|value| ConfigError::InvalidValue {
                field: THEME_VAR.to_string(),
                value,
                expected: "registration or email".to_string(),
            })?;
        }

        if let Ok(level) = env::var(LOG_LEVEL_VAR) {
            config.log_level = level.trim().to_lowercase();
        }

        if let Ok(json) = env::var(LOG_JSON_VAR) {
            config.json_logs = match json.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: LOG_JSON_VAR.to_string(),
                        value: json.clone(),
                        expected: "true or false".to_string(),
                    })
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log_level".to_string(),
                value: self.log_level.clone(),
                expected: LOG_LEVELS.join(", "),
            });
        }
        Ok(())
    }

    /// The palette the screens should render with
    pub fn theme(&self) -> Theme {
        self.custom_theme
            .clone()
            .unwrap_or_else(|| self.theme.theme())
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::default()
            .with_level(&self.log_level)
            .with_json_format(self.json_logs)
    }
}
