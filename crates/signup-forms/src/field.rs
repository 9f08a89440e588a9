//! The per-field validation state machine.
//!
//! One [`ValidatedField`] implementation serves every input: it holds the raw
//! text, applies its [`FieldSchema`] on each change and exposes
//! `{valid, message}` plus the focus flag. The name, email and password inputs
//! differ only in the schema they are built with.

use crate::theme::Theme;
use crate::view::{BorderStyle, FeedbackStyle, FieldVisualState};
use serde::Serialize;
use signup_validation::{FieldOutcome, FieldSchema};
use tracing::debug;

/// Serializable view of a field for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub field: String,
    pub value: String,
    pub focused: bool,
    pub valid: bool,
    /// Error text, present only while the field is invalid and non-empty
    pub message: Option<String>,
    /// Confirmation text, present only while the field is valid
    pub success: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidatedField {
    schema: FieldSchema,
    success_message: Option<String>,
    value: String,
    focused: bool,
    error: Option<String>,
    valid: bool,
}

impl ValidatedField {
    pub fn new(schema: FieldSchema) -> Self {
        Self {
            schema,
            success_message: None,
            value: String::new(),
            focused: false,
            error: None,
            valid: false,
        }
    }

    /// Text shown under the field while it is valid
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    /// Store new text and re-apply the rule from scratch.
    ///
    /// Blank text clears any error without reporting "required": the user has
    /// not typed anything yet.
    pub fn on_change(&mut self, text: impl Into<String>) -> FieldOutcome {
        self.value = text.into();

        let outcome = if self.value.is_empty() {
            FieldOutcome::default()
        } else {
            self.schema.check(&self.value)
        };

        self.valid = outcome.valid;
        self.error = outcome.message.clone();

        debug!(
            field = self.schema.field(),
            valid = self.valid,
            error = self.error.as_deref(),
            "field changed"
        );

        outcome
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Return to the pristine, empty state
    pub fn reset(&mut self) {
        self.value.clear();
        self.focused = false;
        self.error = None;
        self.valid = false;
    }

    pub fn field(&self) -> &str {
        self.schema.field()
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        if self.valid {
            self.success_message.as_deref()
        } else {
            None
        }
    }

    pub fn outcome(&self) -> FieldOutcome {
        FieldOutcome {
            valid: self.valid,
            message: self.error.clone(),
        }
    }

    /// Canonical value of the current text, if it is valid
    pub fn canonical_value(&self) -> Option<String> {
        if self.valid {
            self.schema.parse(&self.value).ok()
        } else {
            None
        }
    }

    pub fn visual_state(&self) -> FieldVisualState {
        FieldVisualState {
            focused: self.focused,
            has_error: self.error.is_some(),
            valid: self.valid,
        }
    }

    pub fn border(&self, theme: &Theme) -> BorderStyle {
        BorderStyle::derive(self.visual_state(), theme)
    }

    pub fn feedback(&self) -> FeedbackStyle {
        FeedbackStyle::derive(self.visual_state())
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            field: self.field().to_string(),
            value: self.value.clone(),
            focused: self.focused,
            valid: self.valid,
            message: self.error.clone(),
            success: self.success_message().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_validation::messages;
    use signup_validation::{email_schema, name_schema};

    fn name_field() -> ValidatedField {
        ValidatedField::new(name_schema("name")).with_success_message(messages::name::VALID)
    }

    #[test]
    fn test_starts_pristine() {
        let field = name_field();

        assert_eq!(field.value(), "");
        assert!(!field.is_valid());
        assert!(!field.is_focused());
        assert_eq!(field.error(), None);
        assert_eq!(field.success_message(), None);
    }

    #[test]
    fn test_change_applies_rule() {
        let mut field = name_field();

        let outcome = field.on_change("J");
        assert!(!outcome.valid);
        assert_eq!(field.error(), Some(messages::name::TOO_SHORT));

        let outcome = field.on_change("Jo");
        assert!(outcome.valid);
        assert_eq!(field.error(), None);
        assert_eq!(field.success_message(), Some("✓ Nombre válido"));
    }

    #[test]
    fn test_blank_text_has_no_message() {
        let mut field = name_field();
        field.on_change("J");

        let outcome = field.on_change("");
        assert_eq!(outcome, FieldOutcome::default());
        assert_eq!(field.error(), None);
        assert!(!field.is_valid());
    }

    #[test]
    fn test_whitespace_only_reports_required() {
        let mut field = name_field();
        field.on_change("   ");
        assert_eq!(field.error(), Some(messages::name::REQUIRED));
    }

    #[test]
    fn test_focus_does_not_revalidate() {
        let mut field = name_field();
        field.on_change("J");
        field.focus();

        assert!(field.is_focused());
        assert_eq!(field.error(), Some(messages::name::TOO_SHORT));

        field.blur();
        assert!(!field.is_focused());
    }

    #[test]
    fn test_reset() {
        let mut field = name_field();
        field.focus();
        field.on_change("Ana");
        field.reset();

        assert_eq!(field.snapshot(), name_field().snapshot());
    }

    #[test]
    fn test_canonical_value() {
        let mut field = ValidatedField::new(email_schema("email"));
        field.on_change("Ana@Correo.COM");
        assert_eq!(field.canonical_value().as_deref(), Some("ana@correo.com"));

        field.on_change("ana@");
        assert_eq!(field.canonical_value(), None);
    }

    #[test]
    fn test_border_follows_state() {
        let theme = Theme::registration();
        let mut field = name_field();
        assert_eq!(field.border(&theme).color, theme.default);

        field.on_change("J");
        assert_eq!(field.border(&theme).color, theme.error);

        field.focus();
        assert_eq!(field.border(&theme).color, theme.focus);

        field.blur();
        field.on_change("Jo");
        assert_eq!(field.border(&theme).color, theme.success);
        assert!(field.feedback().visible);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut field = name_field();
        field.on_change("Jo");

        let json = serde_json::to_value(field.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "name",
                "value": "Jo",
                "focused": false,
                "valid": true,
                "message": null,
                "success": "✓ Nombre válido",
            })
        );
    }
}
