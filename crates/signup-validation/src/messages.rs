//! User-facing Spanish strings shown by the signup screens

/// Rule messages for the name field
pub mod name {
    pub const REQUIRED: &str = "El nombre es requerido";
    pub const TOO_SHORT: &str = "El nombre debe tener al menos 2 caracteres";
    pub const TOO_LONG: &str = "El nombre no puede tener más de 50 caracteres";
    pub const INVALID_CHARACTERS: &str = "El nombre solo puede contener letras y espacios";
    pub const VALID: &str = "✓ Nombre válido";
}

/// Rule messages for the email field
pub mod email {
    pub const REQUIRED: &str = "El email es requerido";
    pub const INVALID_FORMAT: &str = "Formato de email inválido";
    pub const VALID: &str = "✓ Email válido";
}

/// Rule messages for the password field
pub mod password {
    pub const REQUIRED: &str = "La contraseña es requerida";
    pub const TOO_SHORT: &str = "La contraseña debe tener al menos 8 caracteres";
    pub const LOWERCASE: &str = "Debe contener al menos una letra minúscula";
    pub const UPPERCASE: &str = "Debe contener al menos una letra mayúscula";
    pub const DIGIT: &str = "Debe contener al menos un número";
    pub const SPECIAL: &str = "Debe contener al menos un carácter especial (@$!%*?&#)";
    pub const VALID: &str = "✓ Contraseña fuerte";
}

/// Labels for the three strength tiers
pub mod strength {
    pub const WEAK: &str = "Contraseña débil";
    pub const MEDIUM: &str = "Contraseña media";
    pub const STRONG: &str = "Contraseña fuerte";
}

/// Password requirement checklist
pub mod requirements {
    pub const TITLE: &str = "La contraseña debe contener:";
    pub const MIN_LENGTH: &str = "• Al menos 8 caracteres";
    pub const LOWERCASE: &str = "• Una letra minúscula";
    pub const UPPERCASE: &str = "• Una letra mayúscula";
    pub const DIGIT: &str = "• Un número";
    pub const SPECIAL: &str = "• Un carácter especial (@$!%*?&#)";
}
