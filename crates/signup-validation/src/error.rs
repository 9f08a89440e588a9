//! Rule failures and their per-field collection

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Result of a single rule: either it holds or it reports one error.
pub type RuleResult = Result<(), ValidationError>;

/// One broken rule on one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    /// Text shown to the user
    pub message: String,
    /// Stable identifier of the broken rule, e.g. `length_min`
    pub code: String,
    /// Rule parameters and the offending measurement, when relevant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl ValidationError {
    pub const GENERIC_CODE: &'static str = "invalid";

    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_code(field, message, Self::GENERIC_CODE)
    }

    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
            code: code.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Failures keyed by field name.
///
/// Fields iterate in name order. Within a field, errors keep the order the
/// rules reported them, so the first one is the highest-priority failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[serde(transparent)]
pub struct ValidationErrors {
    by_field: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_error(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.push(error);
        errors
    }

    pub fn push(&mut self, error: ValidationError) {
        self.by_field
            .entry(error.field.clone())
            .or_default()
            .push(error);
    }

    /// Append `errors` under `field`, regardless of their own `field` values
    pub fn extend_field(&mut self, field: impl Into<String>, errors: Vec<ValidationError>) {
        if errors.is_empty() {
            return;
        }
        self.by_field.entry(field.into()).or_default().extend(errors);
    }

    pub fn push_message(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationError::new(field, message));
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, errors) in other.by_field {
            self.extend_field(field, errors);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn error_count(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.by_field.contains_key(field)
    }

    pub fn field_errors(&self, field: &str) -> &[ValidationError] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.field_errors(field)
            .first()
            .map(|error| error.message.as_str())
    }

    pub fn fields(&self) -> Vec<&str> {
        self.by_field.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.by_field.values().flatten()
    }

    /// `{ "valid": false, "fields": { <field>: [<message>, ...] } }`
    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .by_field
            .iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| serde_json::Value::from(e.message.clone()))
                    .collect();
                (field.clone(), serde_json::Value::Array(messages))
            })
            .collect();

        serde_json::json!({
            "valid": self.is_empty(),
            "fields": fields,
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        match iter.next() {
            None => f.write_str("no errors"),
            Some(first) => {
                write!(f, "{}", first)?;
                for error in iter {
                    write!(f, "; {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::from_error(error)
    }
}
