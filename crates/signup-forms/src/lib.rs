//! # signup-forms
//!
//! Interactive state for the signup screens built on `signup-validation`.
//!
//! Each input re-validates on every change. The registration form ANDs the
//! three field flags into one submit gate, and the email screen confirms a
//! single address. Presentation state (border colour, feedback visibility,
//! strength bar) is derived from field state and a [`Theme`], never stored.

pub mod config;
pub mod email_form;
pub mod error;
pub mod field;
pub mod logging;
pub mod notice;
pub mod password;
pub mod registration;
pub mod theme;
pub mod view;

pub use config::{ConfigError, FormConfig};
pub use email_form::{EmailSnapshot, EmailValidationForm};
pub use error::{FormError, SubmitError};
pub use field::{FieldSnapshot, ValidatedField};
pub use logging::{init_logging, LoggingConfig};
pub use notice::Notice;
pub use password::{PasswordInput, PasswordSnapshot};
pub use registration::{FieldId, RegistrationForm, RegistrationSnapshot, Submission};
pub use theme::{Color, ColorError, Theme, ThemePreset};
pub use view::{BorderStyle, FeedbackStyle, FieldVisualState, StrengthBar};

pub use signup_validation;
