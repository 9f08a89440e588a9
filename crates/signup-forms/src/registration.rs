//! The registration form: name, email and password

use crate::error::{FormError, SubmitError};
use crate::field::{FieldSnapshot, ValidatedField};
use crate::notice::Notice;
use crate::password::{PasswordInput, PasswordSnapshot};
use crate::theme::Theme;
use crate::view::{BorderStyle, StrengthBar};
use chrono::{DateTime, Utc};
use serde::Serialize;
use signup_validation::rules::{EMAIL_FIELD, NAME_FIELD, PASSWORD_FIELD};
use signup_validation::{email_schema, messages, name_schema, FieldOutcome, RegistrationSchema};
use tracing::{info, warn};

/// The inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Password,
}

/// Values accepted by a successful submit, frozen for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationSnapshot {
    pub name: FieldSnapshot,
    pub email: FieldSnapshot,
    pub password: PasswordSnapshot,
    pub can_submit: bool,
    pub submission: Option<Submission>,
}

/// Three independent fields gated by one aggregate validity flag
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    name: ValidatedField,
    email: ValidatedField,
    password: PasswordInput,
    schema: RegistrationSchema,
    theme: Theme,
    submission: Option<Submission>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::with_theme(Theme::registration())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            name: ValidatedField::new(name_schema(NAME_FIELD))
                .with_success_message(messages::name::VALID),
            email: ValidatedField::new(email_schema(EMAIL_FIELD))
                .with_success_message(messages::email::VALID),
            password: PasswordInput::new(PASSWORD_FIELD),
            schema: RegistrationSchema::new(),
            theme,
            submission: None,
        }
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.submission.is_some() {
            Err(FormError::Submitted)
        } else {
            Ok(())
        }
    }

    pub fn set_name(&mut self, text: impl Into<String>) -> Result<FieldOutcome, FormError> {
        self.ensure_editable()?;
        Ok(self.name.on_change(text))
    }

    pub fn set_email(&mut self, text: impl Into<String>) -> Result<FieldOutcome, FormError> {
        self.ensure_editable()?;
        Ok(self.email.on_change(text))
    }

    pub fn set_password(&mut self, text: impl Into<String>) -> Result<FieldOutcome, FormError> {
        self.ensure_editable()?;
        Ok(self.password.on_change(text))
    }

    pub fn focus(&mut self, field: FieldId) {
        match field {
            FieldId::Name => self.name.focus(),
            FieldId::Email => self.email.focus(),
            FieldId::Password => self.password.focus(),
        }
    }

    pub fn blur(&mut self, field: FieldId) {
        match field {
            FieldId::Name => self.name.blur(),
            FieldId::Email => self.email.blur(),
            FieldId::Password => self.password.blur(),
        }
    }

    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password.toggle_visibility()
    }

    pub fn name(&self) -> &ValidatedField {
        &self.name
    }

    pub fn email(&self) -> &ValidatedField {
        &self.email
    }

    pub fn password(&self) -> &PasswordInput {
        &self.password
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn border(&self, field: FieldId) -> BorderStyle {
        let field = match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => self.password.field(),
        };
        field.border(&self.theme)
    }

    pub fn strength_bar(&self) -> StrengthBar {
        self.password.strength_bar(&self.theme)
    }

    /// Logical AND of the three field validity flags
    pub fn is_form_valid(&self) -> bool {
        self.name.is_valid() && self.email.is_valid() && self.password.is_valid()
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Re-apply all three rules in one pass and freeze the values on success.
    ///
    /// This runs even when [`is_form_valid`](Self::is_form_valid) is false, so
    /// a forced submit still gets the generic failure notice.
    pub fn submit(&mut self) -> Result<Notice, SubmitError> {
        if self.submission.is_some() {
            return Err(SubmitError::AlreadySubmitted);
        }

        let data = match self
            .schema
            .parse(self.name.value(), self.email.value(), self.password.value())
        {
            Ok(data) => data,
            Err(errors) => {
                warn!(fields = ?errors.fields(), "registration submit rejected");
                return Err(SubmitError::Invalid {
                    errors,
                    notice: Notice::registration_failure(),
                });
            }
        };

        let notice = Notice::registration_success(&data.name, &data.email);
        info!(email = %data.email, "registration submitted");

        self.submission = Some(Submission {
            name: data.name,
            email: data.email,
            submitted_at: Utc::now(),
        });

        Ok(notice)
    }

    pub fn snapshot(&self) -> RegistrationSnapshot {
        RegistrationSnapshot {
            name: self.name.snapshot(),
            email: self.email.snapshot(),
            password: self.password.snapshot(),
            can_submit: self.is_form_valid() && !self.is_submitted(),
            submission: self.submission.clone(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
