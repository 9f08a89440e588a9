//! Password strength scoring and the requirement checklist.
//!
//! The strength score is a display heuristic and is independent
//! of [`password_schema`](crate::schemas::password_schema): a password can
//! pass the rule and still score "medium" (`Abcdefgh1!` scores 75), or score
//! 70 while failing it (twelve mixed-case letters with no digit). Both
//! computations are kept and shown side by side.

use crate::messages;
use crate::schemas::PASSWORD_MIN_LENGTH;
use crate::validators::pattern::{has_digit, has_lowercase, has_special, has_uppercase};
use serde::{Deserialize, Serialize};
use std::fmt;

const LONG_PASSWORD_LENGTH: usize = 12;

const LENGTH_POINTS: u8 = 25;
const LONG_LENGTH_POINTS: u8 = 25;
const MIXED_CASE_POINTS: u8 = 20;
const DIGIT_POINTS: u8 = 15;
const SPECIAL_POINTS: u8 = 15;

const MEDIUM_THRESHOLD: u8 = 50;
const STRONG_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Classify a 0-100 score
    pub fn from_score(score: u8) -> Self {
        if score < MEDIUM_THRESHOLD {
            StrengthTier::Weak
        } else if score < STRONG_THRESHOLD {
            StrengthTier::Medium
        } else {
            StrengthTier::Strong
        }
    }

    /// Fixed display colour of the tier, as `#RRGGBB`
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Weak => "#EF4444",
            StrengthTier::Medium => "#F59E0B",
            StrengthTier::Strong => "#10B981",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => messages::strength::WEAK,
            StrengthTier::Medium => messages::strength::MEDIUM,
            StrengthTier::Strong => messages::strength::STRONG,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        write!(f, "{}", name)
    }
}

/// Score and tier of a non-empty password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub tier: StrengthTier,
    /// 0 to 100, also used as the strength bar percentage
    pub score: u8,
}

impl PasswordStrength {
    /// Score the password; `None` for empty text, whose strength is not shown.
    ///
    /// Points are additive and not gated on rule validity:
    /// 25 for at least 8 characters, 25 more for at least 12, 20 for both
    /// cases, 15 for a digit, 15 for a special character.
    pub fn evaluate(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }

        let length = password.chars().count();
        let mut score = 0;

        if length >= PASSWORD_MIN_LENGTH {
            score += LENGTH_POINTS;
        }
        if length >= LONG_PASSWORD_LENGTH {
            score += LONG_LENGTH_POINTS;
        }
        if has_lowercase(password) && has_uppercase(password) {
            score += MIXED_CASE_POINTS;
        }
        if has_digit(password) {
            score += DIGIT_POINTS;
        }
        if has_special(password) {
            score += SPECIAL_POINTS;
        }

        Some(Self {
            tier: StrengthTier::from_score(score),
            score,
        })
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

/// One line of the requirement checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub label: &'static str,
    pub met: bool,
}

/// The five hard password conditions, reported individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordRequirements {
    pub const TITLE: &'static str = messages::requirements::TITLE;

    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= PASSWORD_MIN_LENGTH,
            lowercase: has_lowercase(password),
            uppercase: has_uppercase(password),
            digit: has_digit(password),
            special: has_special(password),
        }
    }

    /// True iff the password rule would accept the text
    pub fn all_met(&self) -> bool {
        self.min_length && self.lowercase && self.uppercase && self.digit && self.special
    }

    /// Checklist lines in display order
    pub fn items(&self) -> [Requirement; 5] {
        [
            Requirement {
                label: messages::requirements::MIN_LENGTH,
                met: self.min_length,
            },
            Requirement {
                label: messages::requirements::LOWERCASE,
                met: self.lowercase,
            },
            Requirement {
                label: messages::requirements::UPPERCASE,
                met: self.uppercase,
            },
            Requirement {
                label: messages::requirements::DIGIT,
                met: self.digit,
            },
            Requirement {
                label: messages::requirements::SPECIAL,
                met: self.special,
            },
        ]
    }

    pub fn met_count(&self) -> usize {
        self.items().iter().filter(|item| item.met).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::password_schema;

    fn score(password: &str) -> u8 {
        PasswordStrength::evaluate(password).map(|s| s.score).unwrap_or_default()
    }

    #[test]
    fn test_empty_password_is_not_scored() {
        assert_eq!(PasswordStrength::evaluate(""), None);
    }

    #[test]
    fn test_length_only() {
        let strength = PasswordStrength::evaluate("abcdefgh").unwrap();
        assert_eq!(strength.score, 25);
        assert_eq!(strength.tier, StrengthTier::Weak);
    }

    #[test]
    fn test_valid_password_can_be_medium() {
        let strength = PasswordStrength::evaluate("Abcdefgh1!").unwrap();
        assert_eq!(strength.score, 75);
        assert_eq!(strength.tier, StrengthTier::Medium);
        assert!(password_schema("password").is_valid("Abcdefgh1!"));
    }

    #[test]
    fn test_invalid_password_can_be_medium() {
        let strength = PasswordStrength::evaluate("Abcdefghijkl").unwrap();
        assert_eq!(strength.score, 70);
        assert_eq!(strength.tier, StrengthTier::Medium);
        assert!(!password_schema("password").is_valid("Abcdefghijkl"));
    }

    #[test]
    fn test_maximum_score() {
        let strength = PasswordStrength::evaluate("Abcdefghij1!").unwrap();
        assert_eq!(strength.score, 100);
        assert_eq!(strength.tier, StrengthTier::Strong);
        assert_eq!(strength.label(), "Contraseña fuerte");
    }

    #[test]
    fn test_short_passwords_still_score_character_classes() {
        assert_eq!(score("aB"), 20);
        assert_eq!(score("1"), 15);
        assert_eq!(score("#"), 15);
        assert_eq!(score("aB1#"), 50);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(49), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(50), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(79), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(80), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(100), StrengthTier::Strong);
    }

    #[test]
    fn test_tier_colors_and_names() {
        assert_eq!(StrengthTier::Weak.color(), "#EF4444");
        assert_eq!(StrengthTier::Medium.color(), "#F59E0B");
        assert_eq!(StrengthTier::Strong.color(), "#10B981");
        assert_eq!(StrengthTier::Medium.to_string(), "medium");
    }

    #[test]
    fn test_requirements_checklist() {
        let requirements = PasswordRequirements::check("abc1");

        assert!(!requirements.min_length);
        assert!(requirements.lowercase);
        assert!(!requirements.uppercase);
        assert!(requirements.digit);
        assert!(!requirements.special);
        assert_eq!(requirements.met_count(), 2);
        assert!(!requirements.all_met());

        let items = requirements.items();
        assert_eq!(items[0].label, "• Al menos 8 caracteres");
        assert!(items[3].met);
    }

    #[test]
    fn test_requirements_agree_with_rule() {
        for password in ["Abcdefgh1!", "abcdefgh", "ABCDEFG1!", "Abcdefgh1", " Ab1!xyz "] {
            assert_eq!(
                PasswordRequirements::check(password).all_met(),
                password_schema("password").is_valid(password),
                "password {password:?}"
            );
        }
    }
}
