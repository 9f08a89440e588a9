//! Required field validator

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use serde_json::Value;

/// Validator that ensures a field is not empty
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    /// Custom error message
    pub message: Option<String>,
    /// Treat whitespace-only text as empty (default: true)
    pub trim_whitespace: bool,
}

impl RequiredValidator {
    /// Create a new required validator with default message
    pub fn new() -> Self {
        Self {
            message: None,
            trim_whitespace: true,
        }
    }

    /// Create a required validator with custom message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            trim_whitespace: true,
        }
    }

    /// Whether whitespace-only text counts as empty
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    fn is_empty(&self, value: &str) -> bool {
        if self.trim_whitespace {
            value.trim().is_empty()
        } else {
            value.is_empty()
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for RequiredValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if self.is_empty(value) {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} es requerido", field));

            Err(ValidationError::with_code(field, message, "required"))
        } else {
            Ok(())
        }
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({
            "message": self.message,
            "trim_whitespace": self.trim_whitespace,
        }))
    }
}
