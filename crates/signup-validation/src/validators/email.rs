//! Email format validator

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Local part of an address, without the leading-dot and double-dot checks
/// that the regex engine cannot express.
static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("address pattern compiles")
});

/// Validator for the `local@domain.tld` address shape.
///
/// This is a syntactic check only; no DNS lookup is performed.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    /// Custom error message
    pub message: Option<String>,
}

impl EmailValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check the address shape
    pub fn is_valid_address(email: &str) -> bool {
        let Some((local, _domain)) = email.split_once('@') else {
            return false;
        };

        if local.starts_with('.') || local.contains("..") {
            return false;
        }

        ADDRESS.is_match(email)
    }
}

impl ValidationRule for EmailValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if Self::is_valid_address(value) {
            return Ok(());
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("{} debe ser un email válido", field));

        Err(ValidationError::with_code(field, message, "invalid_email"))
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }

    fn parameters(&self) -> Option<Value> {
        self.message
            .as_ref()
            .map(|message| serde_json::json!({ "message": message }))
    }
}
