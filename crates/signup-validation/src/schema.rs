//! Declarative single-field schemas.
//!
//! A [`FieldSchema`] is an ordered list of rules plus the text transforms
//! applied before the rules run and after they all pass. Evaluation stops at
//! the first failing rule, so rule order is message priority.

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::traits::{ValidateField, ValidationRule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Text transform applied by a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Trim,
    Lowercase,
}

impl Transform {
    pub fn apply(self, text: &str) -> String {
        match self {
            Transform::Trim => text.trim().to_string(),
            Transform::Lowercase => text.to_lowercase(),
        }
    }
}

/// `{ valid, message }` for one field, recomputed on every input change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl From<&Result<String, ValidationError>> for FieldOutcome {
    fn from(result: &Result<String, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(error) => Self::invalid(error.message.clone()),
        }
    }
}

/// Ordered validation rules for one named field
#[derive(Clone)]
pub struct FieldSchema {
    field: String,
    before: Vec<Transform>,
    rules: Vec<Arc<dyn ValidationRule>>,
    after: Vec<Transform>,
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("field", &self.field)
            .field("before", &self.before)
            .field("rules", &self.rule_names())
            .field("after", &self.after)
            .finish()
    }
}

impl FieldSchema {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            before: Vec::new(),
            rules: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Transform the input before any rule sees it
    pub fn preprocess(mut self, transform: Transform) -> Self {
        self.before.push(transform);
        self
    }

    /// Append a rule; earlier rules take priority
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule + 'static,
    {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Transform the accepted value into its canonical form
    pub fn normalize(mut self, transform: Transform) -> Self {
        self.after.push(transform);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.rule_name()).collect()
    }

    fn prepared(&self, text: &str) -> String {
        self.before
            .iter()
            .fold(text.to_string(), |acc, transform| transform.apply(&acc))
    }

    /// Apply the rules in order; the first failure wins.
    ///
    /// On success returns the canonical value.
    pub fn parse(&self, text: &str) -> Result<String, ValidationError> {
        let prepared = self.prepared(text);

        for rule in &self.rules {
            rule.validate(&prepared, &self.field)?;
        }

        Ok(self
            .after
            .iter()
            .fold(prepared, |acc, transform| transform.apply(&acc)))
    }

    /// `{ valid, message }` for the text, carrying the highest-priority message
    pub fn check(&self, text: &str) -> FieldOutcome {
        FieldOutcome::from(&self.parse(text))
    }

    pub fn is_valid(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }

    /// Every failing rule's error, in priority order
    pub fn collect_errors(&self, text: &str) -> Vec<ValidationError> {
        let prepared = self.prepared(text);

        self.rules
            .iter()
            .filter_map(|rule| rule.validate(&prepared, &self.field).err())
            .collect()
    }
}

impl ValidateField for FieldSchema {
    fn validate_field(&self, field: &str, value: &str) -> ValidationResult<()> {
        if field != self.field {
            return Ok(());
        }

        let errors = self.collect_errors(value);
        if errors.is_empty() {
            Ok(())
        } else {
            let mut collected = ValidationErrors::new();
            collected.extend_field(field, errors);
            Err(collected)
        }
    }
}
