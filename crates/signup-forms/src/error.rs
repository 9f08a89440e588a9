//! Form interaction errors

use crate::notice::Notice;
use signup_validation::ValidationErrors;
use thiserror::Error;

/// Rejected edit of a form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form was already submitted; its values are frozen")]
    Submitted,
}

/// Rejected submit attempt
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// At least one field failed its rule. `notice` is the generic message
    /// shown to the user; `errors` keeps the per-field detail for logging.
    #[error("submission rejected: {errors}")]
    Invalid {
        errors: ValidationErrors,
        notice: Notice,
    },
    #[error("form was already submitted")]
    AlreadySubmitted,
}

impl SubmitError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Invalid { errors, .. } => Some(errors),
            SubmitError::AlreadySubmitted => None,
        }
    }

    /// The notice to display, if the attempt warrants one
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            SubmitError::Invalid { notice, .. } => Some(notice),
            SubmitError::AlreadySubmitted => None,
        }
    }
}
