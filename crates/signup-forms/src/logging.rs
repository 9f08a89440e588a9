//! Structured logging setup for hosts embedding the signup screens

use crate::config::ConfigError;
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level filter (e.g. "info", "debug")
    pub level: String,
    /// JSON lines instead of text
    pub json_format: bool,
    /// Multi-line text output; ignored when `json_format` is set
    pub pretty_print: bool,
    /// Full filter directive such as "signup_forms=debug,signup_validation=info";
    /// takes precedence over `level`
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_print: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            pretty_print: true,
            env_filter: Some("signup_forms=debug,signup_validation=debug".to_string()),
        }
    }

    /// Errors only
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            json_format: false,
            pretty_print: false,
            env_filter: None,
        }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// The directive handed to `EnvFilter` when `RUST_LOG` is unset
    pub fn directive(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.level)
    }
}

/// Install a global subscriber. `RUST_LOG` wins over the configured directive.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.directive()))
        .map_err(|e| ConfigError::Logging {
            message: e.to_string(),
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json_format {
        registry
            .with(Layer::new().with_writer(io::stdout).json())
            .try_init()
    } else if config.pretty_print {
        registry
            .with(Layer::new().with_writer(io::stdout).pretty())
            .try_init()
    } else {
        registry
            .with(Layer::new().with_writer(io::stdout))
            .try_init()
    };

    result.map_err(|e| ConfigError::Logging {
        message: e.to_string(),
    })?;

    tracing::info!(
        target: "signup_forms::logging",
        "logging initialized (level: {}, format: {})",
        config.level,
        if config.json_format { "JSON" } else { "text" }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let dev = LoggingConfig::development();
        assert!(dev.pretty_print);
        assert_eq!(
            dev.directive(),
            "signup_forms=debug,signup_validation=debug"
        );

        let test = LoggingConfig::test();
        assert_eq!(test.level, "error");
        assert_eq!(test.directive(), "error");
    }

    #[test]
    fn test_builders() {
        let config = LoggingConfig::default()
            .with_level("warn")
            .with_json_format(true)
            .with_env_filter("signup_forms=trace");

        assert_eq!(config.level, "warn");
        assert!(config.json_format);
        assert_eq!(config.directive(), "signup_forms=trace");
    }

    #[test]
    fn test_second_init_fails() {
        // The first call may lose to another test's subscriber; the second never succeeds.
        let _ = init_logging(&LoggingConfig::test());
        let result = init_logging(&LoggingConfig::test());
        assert!(matches!(result, Err(ConfigError::Logging { .. })));
    }
}
