//! Built-in validators used by the signup field schemas

pub mod email;
pub mod length;
pub mod pattern;
pub mod required;

pub use email::EmailValidator;
pub use length::LengthValidator;
pub use pattern::{PatternValidator, SPECIAL_CHARACTERS};
pub use required::RequiredValidator;
