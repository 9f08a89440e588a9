//! Pattern-based validators using regular expressions

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde_json::Value;

/// Characters accepted as "special" by the password rule and the strength scorer.
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&#";

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("letters pattern compiles"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
static SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@$!%*?&#]").expect("special pattern compiles"));

/// Validator for regular expression patterns
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    /// `^(?:pattern)$`, built on first full-match use
    anchored: OnceCell<Option<Regex>>,
    /// Custom error message
    pub message: Option<String>,
    /// Whether the whole text must match (default) or any substring may
    pub full_match: bool,
}

impl PatternValidator {
    /// Create a new pattern validator
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Create a validator from an existing Regex
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            pattern: regex,
            anchored: OnceCell::new(),
            message: None,
            full_match: true,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set whether to match the full text or just find a match
    pub fn full_match(mut self, full_match: bool) -> Self {
        self.full_match = full_match;
        self
    }

    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check the text against the pattern
    pub fn matches(&self, text: &str) -> bool {
        if self.full_match {
            let anchored = self
                .anchored
                .get_or_init(|| Regex::new(&format!("^(?:{})$", self.pattern.as_str())).ok());
            match anchored {
                Some(anchored) => anchored.is_match(text),
                // Anchored form over the size limit
                None => self
                    .pattern
                    .find(text)
                    .is_some_and(|m| m.start() == 0 && m.end() == text.len()),
            }
        } else {
            self.pattern.is_match(text)
        }
    }
}

impl ValidationRule for PatternValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if self.matches(value) {
            return Ok(());
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("{} no tiene el formato requerido", field));

        Err(ValidationError::with_code(field, message, "pattern_mismatch"))
    }

    fn rule_name(&self) -> &'static str {
        "pattern"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({
            "pattern": self.pattern.as_str(),
            "full_match": self.full_match,
        }))
    }
}

/// Patterns used by the signup field rules
impl PatternValidator {
    /// Letters (ASCII plus the Spanish accented vowels and ñ) and whitespace only
    pub fn letters_and_spaces() -> Self {
        Self::from_regex(LETTERS_AND_SPACES.clone())
    }

    /// At least one ASCII lowercase letter anywhere in the text
    pub fn contains_lowercase() -> Self {
        Self::from_regex(LOWERCASE.clone()).full_match(false)
    }

    /// At least one ASCII uppercase letter anywhere in the text
    pub fn contains_uppercase() -> Self {
        Self::from_regex(UPPERCASE.clone()).full_match(false)
    }

    /// At least one ASCII digit anywhere in the text
    pub fn contains_digit() -> Self {
        Self::from_regex(DIGIT.clone()).full_match(false)
    }

    /// At least one character of [`SPECIAL_CHARACTERS`]
    pub fn contains_special() -> Self {
        Self::from_regex(SPECIAL.clone()).full_match(false)
    }
}

pub(crate) fn has_lowercase(text: &str) -> bool {
    LOWERCASE.is_match(text)
}

pub(crate) fn has_uppercase(text: &str) -> bool {
    UPPERCASE.is_match(text)
}

pub(crate) fn has_digit(text: &str) -> bool {
    DIGIT.is_match(text)
}

pub(crate) fn has_special(text: &str) -> bool {
    SPECIAL.is_match(text)
}
