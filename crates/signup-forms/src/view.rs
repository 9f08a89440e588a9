//! Derived, cosmetic view state.
//!
//! Everything here is a pure projection of a field's `{focused, error, valid}`
//! triple (or of a strength score) onto colours and animation targets. None of
//! it feeds back into validation.

use crate::theme::{Color, Theme};
use serde::Serialize;
use signup_validation::PasswordStrength;

pub const BORDER_WIDTH: u8 = 2;
pub const TRANSITION_MS: u32 = 300;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_STIFFNESS: f32 = 150.0;
/// Vertical offset of hidden feedback, in points
pub const FEEDBACK_HIDDEN_OFFSET: f32 = -10.0;

/// The state a field's visuals depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisualState {
    pub focused: bool,
    pub has_error: bool,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderStyle {
    pub color: Color,
    pub width: u8,
}

impl BorderStyle {
    /// Focus wins over error, error over success, success over idle
    pub fn derive(state: FieldVisualState, theme: &Theme) -> Self {
        let color = if state.focused {
            theme.focus
        } else if state.has_error {
            theme.error
        } else if state.valid {
            theme.success
        } else {
            theme.default
        };

        Self {
            color,
            width: BORDER_WIDTH,
        }
    }
}

/// Target values for the feedback line animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedbackStyle {
    pub visible: bool,
    pub opacity: f32,
    pub translate_y: f32,
}

impl FeedbackStyle {
    /// Feedback shows whenever there is something to say: an error or a success
    pub fn derive(state: FieldVisualState) -> Self {
        let visible = state.has_error || state.valid;
        Self {
            visible,
            opacity: if visible { 1.0 } else { 0.0 },
            translate_y: if visible { 0.0 } else { FEEDBACK_HIDDEN_OFFSET },
        }
    }
}

/// Width and colour of the password strength bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthBar {
    /// Filled width as a percentage of the track
    pub percent: u8,
    pub color: Color,
    pub label: Option<&'static str>,
}

impl StrengthBar {
    pub fn derive(strength: Option<&PasswordStrength>, theme: &Theme) -> Self {
        match strength {
            Some(strength) => Self {
                percent: strength.score,
                color: theme.tier_color(strength.tier),
                label: Some(strength.label()),
            },
            None => Self {
                percent: 0,
                color: theme.default,
                label: None,
            },
        }
    }
}
