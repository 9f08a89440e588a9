//! Colours and themes for the signup screens.
//!
//! The registration and email screens differ only in palette, so both are
//! the same components driven by a different [`Theme`].

use serde::{Deserialize, Serialize};
use signup_validation::StrengthTier;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("colour '{0}' must start with '#'")]
    MissingHash(String),
    #[error("colour '{0}' must have exactly 6 hex digits")]
    InvalidLength(String),
    #[error("colour '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// An opaque sRGB colour written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidLength(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidDigit(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Tailwind palette entries used by the screens
pub const GRAY_400: Color = Color::rgb(0x9C, 0xA3, 0xAF);
pub const GRAY_500: Color = Color::rgb(0x6B, 0x72, 0x80);
pub const RED_500: Color = Color::rgb(0xEF, 0x44, 0x44);
pub const GREEN_500: Color = Color::rgb(0x10, 0xB9, 0x81);
pub const AMBER_500: Color = Color::rgb(0xF5, 0x9E, 0x0B);
pub const BLUE_500: Color = Color::rgb(0x3B, 0x82, 0xF6);

/// Named theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Registration,
    Email,
}

impl ThemePreset {
    pub fn theme(self) -> Theme {
        match self {
            ThemePreset::Registration => Theme::registration(),
            ThemePreset::Email => Theme::email(),
        }
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "registration" | "auth" => Ok(ThemePreset::Registration),
            "email" => Ok(ThemePreset::Email),
            other => Err(other.to_string()),
        }
    }
}

/// Colours for every field state and strength tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub default: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub focus: Color,
    pub weak: Color,
    pub medium: Color,
    pub strong: Color,
}

impl Theme {
    /// Palette of the registration screen
    pub fn registration() -> Self {
        Self {
            default: GRAY_400,
            error: RED_500,
            success: GREEN_500,
            warning: AMBER_500,
            focus: BLUE_500,
            weak: RED_500,
            medium: AMBER_500,
            strong: GREEN_500,
        }
    }

    /// Palette of the standalone email screen; only the idle border differs
    pub fn email() -> Self {
        Self {
            default: GRAY_500,
            ..Self::registration()
        }
    }

    pub fn tier_color(&self, tier: StrengthTier) -> Color {
        match tier {
            StrengthTier::Weak => self.weak,
            StrengthTier::Medium => self.medium,
            StrengthTier::Strong => self.strong,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::registration()
    }
}
