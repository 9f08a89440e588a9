//! # signup-validation
//!
//! Field rules for the signup screens: declarative schemas for name, email and
//! password, the registration aggregate, and the password strength scorer.
//! Every rule is a pure, synchronous, total function of the field text.

pub mod error;
pub mod messages;
pub mod rules;
pub mod schema;
pub mod schemas;
pub mod strength;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use error::{RuleResult, ValidationError, ValidationErrors, ValidationResult};
pub use rules::{RegistrationData, RegistrationSchema, Rules, RulesBuilder};
pub use schema::{FieldOutcome, FieldSchema, Transform};
pub use schemas::{email_schema, name_schema, password_schema};
pub use strength::{PasswordRequirements, PasswordStrength, Requirement, StrengthTier};
pub use traits::{Validate, ValidateField, ValidationRule};

pub use validators::{
    EmailValidator, LengthValidator, PatternValidator, RequiredValidator, SPECIAL_CHARACTERS,
};
