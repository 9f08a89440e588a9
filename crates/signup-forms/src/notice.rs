//! Success and failure notices shown after a submit attempt

use serde::Serialize;

pub const REGISTRATION_SUCCESS_TITLE: &str = "🎉 ¡Registro Exitoso!";
pub const REGISTRATION_SUCCESS_ACTION: &str = "Continuar";
pub const REGISTRATION_FAILURE_TITLE: &str = "Error de validación";
pub const REGISTRATION_FAILURE_MESSAGE: &str = "Por favor verifica que todos los campos sean correctos";

pub const EMAIL_SUCCESS_TITLE: &str = "¡Éxito!";
pub const EMAIL_VALIDATED: &str = "¡Email validado correctamente!";
pub const EMAIL_FAILURE_TITLE: &str = "Error";
pub const GENERIC_ERROR: &str = "Ocurrió un error. Por favor intenta nuevamente.";

pub const OK_ACTION: &str = "OK";

/// A modal notice: title, body and the single dismiss action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            action: action.into(),
        }
    }

    pub fn registration_success(name: &str, email: &str) -> Self {
        Self::new(
            REGISTRATION_SUCCESS_TITLE,
            format!(
                "Bienvenido {}!\n\nTu cuenta ha sido creada con el email:\n{}",
                name, email
            ),
            REGISTRATION_SUCCESS_ACTION,
        )
    }

    /// Never names the failing field
    pub fn registration_failure() -> Self {
        Self::new(REGISTRATION_FAILURE_TITLE, REGISTRATION_FAILURE_MESSAGE, OK_ACTION)
    }

    pub fn email_validated(email: &str) -> Self {
        Self::new(
            EMAIL_SUCCESS_TITLE,
            format!("{}\n\nEmail: {}", EMAIL_VALIDATED, email),
            OK_ACTION,
        )
    }

    pub fn email_failure() -> Self {
        Self::new(EMAIL_FAILURE_TITLE, GENERIC_ERROR, OK_ACTION)
    }
}
