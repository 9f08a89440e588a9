//! Core validation traits

use crate::error::{RuleResult, ValidationErrors, ValidationResult};
use serde_json::Value;
use std::collections::HashMap;

/// A single check applied to the text of one field.
///
/// Rules are pure and total: they never touch I/O and never panic, whatever
/// the input. They run synchronously on every keystroke.
pub trait ValidationRule: Send + Sync {
    /// Validate the text of `field`
    fn validate(&self, value: &str, field: &str) -> RuleResult;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;

    /// Get validation rule parameters/configuration as JSON
    fn parameters(&self) -> Option<Value> {
        None
    }
}

/// Trait for validating individual fields
pub trait ValidateField: Send + Sync {
    /// Validate a single field value
    fn validate_field(&self, field: &str, value: &str) -> ValidationResult<()>;
}

/// Validation of a whole form, field by field.
///
/// Fields are independent: there is no request-level pass that looks at two
/// fields at once.
pub trait Validate: ValidateField {
    /// Validate every field of `data`
    fn validate(&self, data: &HashMap<String, String>) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();

        for (field, value) in data {
            if let Err(field_errors) = self.validate_field(field, value) {
                errors.merge(field_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl<T> Validate for T where T: ValidateField {}
