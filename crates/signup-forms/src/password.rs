//! Password input: a validated field plus strength feedback and a checklist

use crate::field::{FieldSnapshot, ValidatedField};
use crate::theme::Theme;
use crate::view::StrengthBar;
use serde::Serialize;
use signup_validation::{
    messages, password_schema, FieldOutcome, PasswordRequirements, PasswordStrength,
};

#[derive(Debug, Clone, Serialize)]
pub struct PasswordSnapshot {
    #[serde(flatten)]
    pub field: FieldSnapshot,
    pub masked: bool,
    pub strength: Option<PasswordStrength>,
    /// Present only while the checklist panel is shown
    pub requirements: Option<PasswordRequirements>,
}

/// The password field of the registration form.
///
/// The requirement checklist opens on focus and closes once the password is
/// valid or cleared. While it is open, the error line is suppressed since the
/// checklist already shows what is missing.
#[derive(Debug, Clone)]
pub struct PasswordInput {
    field: ValidatedField,
    masked: bool,
    requirements_open: bool,
}

impl PasswordInput {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field: ValidatedField::new(password_schema(field_name))
                .with_success_message(messages::password::VALID),
            masked: true,
            requirements_open: false,
        }
    }

    pub fn on_change(&mut self, text: impl Into<String>) -> FieldOutcome {
        let outcome = self.field.on_change(text);
        if self.field.value().is_empty() || outcome.valid {
            self.requirements_open = false;
        }
        outcome
    }

    pub fn focus(&mut self) {
        self.field.focus();
        self.requirements_open = true;
    }

    pub fn blur(&mut self) {
        self.field.blur();
    }

    pub fn reset(&mut self) {
        self.field.reset();
        self.masked = true;
        self.requirements_open = false;
    }

    /// Flip between masked and plain text; returns whether the text is now masked
    pub fn toggle_visibility(&mut self) -> bool {
        self.masked = !self.masked;
        self.masked
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn field(&self) -> &ValidatedField {
        &self.field
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    pub fn requirements_visible(&self) -> bool {
        self.requirements_open && !self.field.is_valid()
    }

    /// The error line, hidden while the checklist is open
    pub fn visible_error(&self) -> Option<&str> {
        if self.requirements_open {
            None
        } else {
            self.field.error()
        }
    }

    /// Strength of the current text; independent of [`is_valid`](Self::is_valid)
    pub fn strength(&self) -> Option<PasswordStrength> {
        PasswordStrength::evaluate(self.field.value())
    }

    pub fn requirements(&self) -> PasswordRequirements {
        PasswordRequirements::check(self.field.value())
    }

    pub fn strength_bar(&self, theme: &Theme) -> StrengthBar {
        StrengthBar::derive(self.strength().as_ref(), theme)
    }

    pub fn snapshot(&self) -> PasswordSnapshot {
        let mut field = self.field.snapshot();
        field.message = self.visible_error().map(str::to_string);

        PasswordSnapshot {
            field,
            masked: self.masked,
            strength: self.strength(),
            requirements: self.requirements_visible().then(|| self.requirements()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_validation::StrengthTier;

    #[test]
    fn test_checklist_opens_on_focus_and_closes_when_valid() {
        let mut input = PasswordInput::new("password");
        assert!(!input.requirements_visible());

        input.focus();
        assert!(input.requirements_visible());

        input.on_change("abcdefgh");
        assert!(input.requirements_visible());
        assert_eq!(input.visible_error(), None);

        input.on_change("Abcdefgh1!");
        assert!(!input.requirements_visible());
        assert!(input.is_valid());
    }

    #[test]
    fn test_checklist_closes_when_cleared() {
        let mut input = PasswordInput::new("password");
        input.focus();
        input.on_change("abc");
        input.on_change("");

        assert!(!input.requirements_visible());
        assert_eq!(input.strength(), None);
    }

    #[test]
    fn test_error_shows_once_checklist_closed() {
        let mut input = PasswordInput::new("password");
        input.focus();
        input.on_change("Abcdefgh1!");
        input.blur();
        input.on_change("Abcdefgh1");

        assert_eq!(input.visible_error(), Some(messages::password::SPECIAL));
    }

    #[test]
    fn test_strength_is_independent_of_validity() {
        let mut input = PasswordInput::new("password");

        input.on_change("abcdefgh");
        assert!(!input.is_valid());
        let strength = input.strength().unwrap();
        assert_eq!(strength.score, 25);
        assert_eq!(strength.tier, StrengthTier::Weak);

        input.on_change("Abcdefgh1!");
        assert!(input.is_valid());
        assert_eq!(input.strength().map(|s| s.tier), Some(StrengthTier::Medium));
        assert_eq!(input.field().success_message(), Some("✓ Contraseña fuerte"));
    }

    #[test]
    fn test_strength_bar() {
        let theme = Theme::registration();
        let mut input = PasswordInput::new("password");
        assert_eq!(input.strength_bar(&theme).percent, 0);

        input.on_change("Abcdefghij1!");
        let bar = input.strength_bar(&theme);
        assert_eq!(bar.percent, 100);
        assert_eq!(bar.color, theme.strong);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut input = PasswordInput::new("password");
        assert!(input.is_masked());
        assert!(!input.toggle_visibility());
        assert!(input.toggle_visibility());

        input.toggle_visibility();
        input.reset();
        assert!(input.is_masked());
    }

    #[test]
    fn test_snapshot() {
        let mut input = PasswordInput::new("password");
        input.focus();
        input.on_change("abc1");

        let snapshot = input.snapshot();
        assert_eq!(snapshot.field.message, None);
        let requirements = snapshot.requirements.unwrap();
        assert!(requirements.digit);
        assert!(!requirements.uppercase);

        let json = serde_json::to_value(input.snapshot()).unwrap();
        assert_eq!(json["field"], "password");
        assert_eq!(json["masked"], true);
        assert_eq!(json["strength"]["tier"], "weak");
    }
}
