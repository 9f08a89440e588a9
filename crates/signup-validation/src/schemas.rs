//! The name, email and password schemas used by the signup screens

use crate::messages;
use crate::schema::{FieldSchema, Transform};
use crate::validators::{EmailValidator, LengthValidator, PatternValidator, RequiredValidator};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Full name: trimmed, 2 to 50 characters, letters and spaces only.
///
/// Priority: required, too short, too long, invalid characters.
pub fn name_schema(field: impl Into<String>) -> FieldSchema {
    FieldSchema::new(field)
        .preprocess(Transform::Trim)
        .rule(RequiredValidator::with_message(messages::name::REQUIRED))
        .rule(
            LengthValidator::new()
                .range(NAME_MIN_LENGTH, NAME_MAX_LENGTH)
                .min_message(messages::name::TOO_SHORT)
                .max_message(messages::name::TOO_LONG),
        )
        .rule(PatternValidator::letters_and_spaces().message(messages::name::INVALID_CHARACTERS))
}

/// Email: checked as typed, canonicalised to trimmed lowercase once valid
pub fn email_schema(field: impl Into<String>) -> FieldSchema {
    FieldSchema::new(field)
        .rule(RequiredValidator::with_message(messages::email::REQUIRED).trim_whitespace(false))
        .rule(EmailValidator::new().message(messages::email::INVALID_FORMAT))
        .normalize(Transform::Lowercase)
        .normalize(Transform::Trim)
}

/// Password: at least 8 characters with lowercase, uppercase, digit and special.
///
/// The text is never trimmed. Priority: required, min length, lowercase,
/// uppercase, digit, special.
pub fn password_schema(field: impl Into<String>) -> FieldSchema {
    FieldSchema::new(field)
        .rule(RequiredValidator::with_message(messages::password::REQUIRED).trim_whitespace(false))
        .rule(
            LengthValidator::new()
                .min(PASSWORD_MIN_LENGTH)
                .min_message(messages::password::TOO_SHORT),
        )
        .rule(PatternValidator::contains_lowercase().message(messages::password::LOWERCASE))
        .rule(PatternValidator::contains_uppercase().message(messages::password::UPPERCASE))
        .rule(PatternValidator::contains_digit().message(messages::password::DIGIT))
        .rule(PatternValidator::contains_special().message(messages::password::SPECIAL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(schema: &FieldSchema, text: &str) -> Option<String> {
        schema.check(text).message
    }

    #[test]
    fn test_name_boundaries() {
        let schema = name_schema("name");

        assert!(schema.is_valid("Jo"));
        assert_eq!(message(&schema, "J").as_deref(), Some(messages::name::TOO_SHORT));
        assert!(schema.is_valid(&"a".repeat(50)));
        assert_eq!(
            message(&schema, &"a".repeat(51)).as_deref(),
            Some(messages::name::TOO_LONG)
        );
    }

    #[test]
    fn test_name_priority_order() {
        let schema = name_schema("name");

        assert_eq!(message(&schema, "").as_deref(), Some(messages::name::REQUIRED));
        assert_eq!(message(&schema, "    ").as_deref(), Some(messages::name::REQUIRED));
        // too short outranks invalid characters
        assert_eq!(message(&schema, "1").as_deref(), Some(messages::name::TOO_SHORT));
        assert_eq!(
            message(&schema, "Juan 2").as_deref(),
            Some(messages::name::INVALID_CHARACTERS)
        );
    }

    #[test]
    fn test_name_is_trimmed() {
        let schema = name_schema("name");

        assert_eq!(schema.parse("  Juan Pérez ").as_deref(), Ok("Juan Pérez"));
        assert_eq!(message(&schema, " J ").as_deref(), Some(messages::name::TOO_SHORT));
    }

    #[test]
    fn test_email_normalisation() {
        let schema = email_schema("email");

        assert_eq!(schema.parse("a@b.com").as_deref(), Ok("a@b.com"));
        assert_eq!(schema.parse("Ana.Lopez@Correo.ES").as_deref(), Ok("ana.lopez@correo.es"));
    }

    #[test]
    fn test_email_messages() {
        let schema = email_schema("email");

        assert_eq!(message(&schema, "").as_deref(), Some(messages::email::REQUIRED));
        assert_eq!(
            message(&schema, "   ").as_deref(),
            Some(messages::email::INVALID_FORMAT)
        );
        assert_eq!(
            message(&schema, "ana@").as_deref(),
            Some(messages::email::INVALID_FORMAT)
        );
    }

    #[test]
    fn test_password_priority_order() {
        let schema = password_schema("password");

        let cases = [
            ("", messages::password::REQUIRED),
            ("Ab1!", messages::password::TOO_SHORT),
            ("ABCDEFGH1!", messages::password::LOWERCASE),
            ("abcdefgh", messages::password::UPPERCASE),
            ("Abcdefgh!", messages::password::DIGIT),
            ("Abcdefgh1", messages::password::SPECIAL),
        ];

        for (password, expected) in cases {
            assert_eq!(
                message(&schema, password).as_deref(),
                Some(expected),
                "password {password:?}"
            );
        }

        assert!(schema.is_valid("Abcdefgh1!"));
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let schema = password_schema("password");

        assert_eq!(schema.parse(" Abcdef1! ").as_deref(), Ok(" Abcdef1! "));
        assert_eq!(
            message(&schema, "        ").as_deref(),
            Some(messages::password::LOWERCASE)
        );
    }

    #[test]
    fn test_password_collects_every_unmet_condition() {
        let codes: Vec<String> = password_schema("password")
            .collect_errors("abc")
            .into_iter()
            .map(|e| e.message)
            .collect();

        assert_eq!(
            codes,
            vec![
                messages::password::TOO_SHORT,
                messages::password::UPPERCASE,
                messages::password::DIGIT,
                messages::password::SPECIAL,
            ]
        );
    }
}
