//! Length-based validator for text fields

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use serde_json::Value;

/// Validator for text length constraints.
///
/// Length is counted in Unicode scalar values, so `"José"` has length 4.
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    /// Minimum length (inclusive)
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    pub max: Option<usize>,
    /// Message reported when the text is shorter than `min`
    pub min_message: Option<String>,
    /// Message reported when the text is longer than `max`
    pub max_message: Option<String>,
}

impl LengthValidator {
    /// Create a new length validator with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set length range (min and max)
    pub fn range(mut self, min: usize, max: usize) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Custom message for the minimum bound
    pub fn min_message(mut self, message: impl Into<String>) -> Self {
        self.min_message = Some(message.into());
        self
    }

    /// Custom message for the maximum bound
    pub fn max_message(mut self, message: impl Into<String>) -> Self {
        self.max_message = Some(message.into());
        self
    }
}

impl ValidationRule for LengthValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        let length = value.chars().count();

        if let Some(min) = self.min {
            if length < min {
                let message = self.min_message.clone().unwrap_or_else(|| {
                    format!("{} debe tener al menos {} caracteres", field, min)
                });
                return Err(ValidationError::with_code(field, message, "length_min")
                    .with_context(serde_json::json!({ "min": min, "actual": length })));
            }
        }

        if let Some(max) = self.max {
            if length > max {
                let message = self.max_message.clone().unwrap_or_else(|| {
                    format!("{} no puede tener más de {} caracteres", field, max)
                });
                return Err(ValidationError::with_code(field, message, "length_max")
                    .with_context(serde_json::json!({ "max": max, "actual": length })));
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }

    fn parameters(&self) -> Option<Value> {
        let mut params = serde_json::Map::new();

        if let Some(min) = self.min {
            params.insert("min".to_string(), Value::from(min));
        }
        if let Some(max) = self.max {
            params.insert("max".to_string(), Value::from(max));
        }

        if params.is_empty() {
            None
        } else {
            Some(Value::Object(params))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_are_inclusive() {
        let validator = LengthValidator::new().range(2, 50);

        assert!(validator.validate("Jo", "name").is_ok());
        assert!(validator.validate(&"a".repeat(50), "name").is_ok());

        let short = validator.validate("J", "name").unwrap_err();
        assert_eq!(short.code, "length_min");
        let long = validator.validate(&"a".repeat(51), "name").unwrap_err();
        assert_eq!(long.code, "length_max");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let validator = LengthValidator::new().max(4);
        assert!(validator.validate("José", "name").is_ok());
        assert!(validator.validate("Ñañé", "name").is_ok());
    }

    #[test]
    fn test_custom_messages() {
        let validator = LengthValidator::new()
            .min(8)
            .min_message("La contraseña debe tener al menos 8 caracteres");

        let error = validator.validate("abc", "password").unwrap_err();
        assert_eq!(error.message, "La contraseña debe tener al menos 8 caracteres");
        assert_eq!(error.context, Some(serde_json::json!({ "min": 8, "actual": 3 })));
    }

    #[test]
    fn test_parameters() {
        assert!(LengthValidator::new().parameters().is_none());
        assert_eq!(
            LengthValidator::new().range(2, 50).parameters(),
            Some(serde_json::json!({ "min": 2, "max": 50 }))
        );
    }
}
