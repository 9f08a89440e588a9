//! The standalone email validation screen

use crate::error::SubmitError;
use crate::field::{FieldSnapshot, ValidatedField};
use crate::notice::Notice;
use crate::theme::Theme;
use crate::view::{BorderStyle, FeedbackStyle};
use serde::Serialize;
use signup_validation::rules::EMAIL_FIELD;
use signup_validation::{email_schema, messages, FieldOutcome, ValidationErrors};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct EmailSnapshot {
    pub email: FieldSnapshot,
    pub can_confirm: bool,
    pub validated_email: Option<String>,
}

/// A single email field with a confirm action
#[derive(Debug, Clone)]
pub struct EmailValidationForm {
    email: ValidatedField,
    theme: Theme,
    validated_email: Option<String>,
}

impl EmailValidationForm {
    pub fn new() -> Self {
        Self::with_theme(Theme::email())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            email: ValidatedField::new(email_schema(EMAIL_FIELD))
                .with_success_message(messages::email::VALID),
            theme,
            validated_email: None,
        }
    }

    pub fn on_change(&mut self, text: impl Into<String>) -> FieldOutcome {
        self.email.on_change(text)
    }

    pub fn focus(&mut self) {
        self.email.focus();
    }

    pub fn blur(&mut self) {
        self.email.blur();
    }

    pub fn field(&self) -> &ValidatedField {
        &self.email
    }

    pub fn can_confirm(&self) -> bool {
        self.email.is_valid()
    }

    /// The last confirmed address, in canonical form
    pub fn validated_email(&self) -> Option<&str> {
        self.validated_email.as_deref()
    }

    pub fn border(&self) -> BorderStyle {
        self.email.border(&self.theme)
    }

    pub fn feedback(&self) -> FeedbackStyle {
        self.email.feedback()
    }

    /// Confirm the current address.
    ///
    /// The screen can be confirmed again after further edits; each success
    /// replaces the recorded address.
    pub fn confirm(&mut self) -> Result<Notice, SubmitError> {
        match self.email.schema().parse(self.email.value()) {
            Ok(email) => {
                info!(email = %email, "email confirmed");
                let notice = Notice::email_validated(&email);
                self.validated_email = Some(email);
                Ok(notice)
            }
            Err(error) => {
                warn!(code = %error.code, "email confirmation rejected");
                Err(SubmitError::Invalid {
                    errors: ValidationErrors::from_error(error),
                    notice: Notice::email_failure(),
                })
            }
        }
    }

    pub fn snapshot(&self) -> EmailSnapshot {
        EmailSnapshot {
            email: self.email.snapshot(),
            can_confirm: self.can_confirm(),
            validated_email: self.validated_email.clone(),
        }
    }
}

impl Default for EmailValidationForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_a_at_b_dot_com() {
        let mut form = EmailValidationForm::new();

        let outcome = form.on_change("a@b.com");
        assert!(outcome.valid);
        assert!(form.can_confirm());

        let notice = form.confirm().unwrap();
        assert_eq!(notice.title, "¡Éxito!");
        assert_eq!(form.validated_email(), Some("a@b.com"));
    }

    #[test]
    fn test_confirm_records_canonical_form() {
        let mut form = EmailValidationForm::new();
        form.on_change("Ana@Correo.ES");
        form.confirm().unwrap();

        assert_eq!(form.validated_email(), Some("ana@correo.es"));
    }

    #[test]
    fn test_invalid_email_cannot_be_confirmed() {
        let mut form = EmailValidationForm::new();
        form.on_change("ana@correo");

        assert!(!form.can_confirm());
        assert_eq!(form.field().error(), Some(messages::email::INVALID_FORMAT));

        let error = form.confirm().unwrap_err();
        assert_eq!(error.notice(), Some(&Notice::email_failure()));
        assert_eq!(form.validated_email(), None);
    }

    #[test]
    fn test_empty_email_reports_required_on_confirm() {
        let mut form = EmailValidationForm::new();
        let error = form.confirm().unwrap_err();

        assert_eq!(
            error.validation_errors().and_then(|e| e.first_message(EMAIL_FIELD)),
            Some(messages::email::REQUIRED)
        );
    }

    #[test]
    fn test_uses_email_theme() {
        let form = EmailValidationForm::new();
        assert_eq!(form.border().color, Theme::email().default);
        assert!(!form.feedback().visible);
    }

    #[test]
    fn test_snapshot() {
        let mut form = EmailValidationForm::new();
        form.on_change("a@b.com");
        form.confirm().unwrap();

        let json = serde_json::to_value(form.snapshot()).unwrap();
        assert_eq!(json["can_confirm"], true);
        assert_eq!(json["validated_email"], "a@b.com");
        assert_eq!(json["email"]["success"], "✓ Email válido");
    }
}
