//! Multi-field rule sets and the registration schema

use crate::error::{ValidationErrors, ValidationResult};
use crate::schema::FieldSchema;
use crate::schemas::{email_schema, name_schema, password_schema};
use crate::traits::ValidateField;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Independent field schemas validated together.
///
/// There are no cross-field rules: each field is checked on its own and the
/// set is valid iff every field is.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    fields: Vec<FieldSchema>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field schema, replacing any schema already registered for the field
    pub fn field(mut self, schema: FieldSchema) -> Self {
        self.fields.retain(|existing| existing.field() != schema.field());
        self.fields.push(schema);
        self
    }

    pub fn get_field_schema(&self, field: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|schema| schema.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field names in registration order
    pub fn get_validated_fields(&self) -> Vec<&str> {
        self.fields.iter().map(FieldSchema::field).collect()
    }

    /// Parse every registered field in one pass.
    ///
    /// A field missing from `data` is parsed as empty text. Each failing field
    /// reports only its highest-priority error. On success returns the
    /// canonical value of every field.
    pub fn parse(&self, data: &HashMap<String, String>) -> ValidationResult<HashMap<String, String>> {
        let mut errors = ValidationErrors::new();
        let mut values = HashMap::with_capacity(self.fields.len());

        for schema in &self.fields {
            let raw = data.get(schema.field()).map(String::as_str).unwrap_or("");
            match schema.parse(raw) {
                Ok(value) => {
                    values.insert(schema.field().to_string(), value);
                }
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            debug!(fields = ?errors.fields(), "rule set rejected input");
            Err(errors)
        }
    }

    /// True iff every registered field accepts its value in `data`
    pub fn is_valid(&self, data: &HashMap<String, String>) -> bool {
        self.parse(data).is_ok()
    }
}

impl ValidateField for Rules {
    fn validate_field(&self, field: &str, value: &str) -> ValidationResult<()> {
        match self.get_field_schema(field) {
            Some(schema) => schema.validate_field(field, value),
            // No rules defined for this field - consider it valid
            None => Ok(()),
        }
    }
}

/// Builder for the signup rule combinations
#[derive(Debug, Default)]
pub struct RulesBuilder {
    rules: Rules,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Rules {
        self.rules
    }

    /// Add the full-name rules for `field`
    pub fn name(mut self, field: impl Into<String>) -> Self {
        self.rules = self.rules.field(name_schema(field));
        self
    }

    /// Add the email rules for `field`
    pub fn email(mut self, field: impl Into<String>) -> Self {
        self.rules = self.rules.field(email_schema(field));
        self
    }

    /// Add the password rules for `field`
    pub fn password(mut self, field: impl Into<String>) -> Self {
        self.rules = self.rules.field(password_schema(field));
        self
    }

    /// Add an arbitrary field schema
    pub fn schema(mut self, schema: FieldSchema) -> Self {
        self.rules = self.rules.field(schema);
        self
    }
}

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

/// Canonical values of an accepted registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// The registration form schema: name, email and password, each independent
#[derive(Debug, Clone)]
pub struct RegistrationSchema {
    rules: Rules,
}

impl RegistrationSchema {
    pub fn new() -> Self {
        Self {
            rules: RulesBuilder::new()
                .name(NAME_FIELD)
                .email(EMAIL_FIELD)
                .password(PASSWORD_FIELD)
                .build(),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Re-apply all three rules in a single pass
    pub fn parse(&self, name: &str, email: &str, password: &str) -> ValidationResult<RegistrationData> {
        let data = HashMap::from([
            (NAME_FIELD.to_string(), name.to_string()),
            (EMAIL_FIELD.to_string(), email.to_string()),
            (PASSWORD_FIELD.to_string(), password.to_string()),
        ]);

        let mut values = self.rules.parse(&data)?;
        let mut take = |field: &str| values.remove(field).unwrap_or_default();

        Ok(RegistrationData {
            name: take(NAME_FIELD),
            email: take(EMAIL_FIELD),
            password: take(PASSWORD_FIELD),
        })
    }
}

impl Default for RegistrationSchema {
    fn default() -> Self {
        Self::new()
    }
}
