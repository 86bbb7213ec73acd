//! Application Configuration
//!
//! Configuration for the registration application layer.

/// Shown when the backend fails without a usable detail
pub const GENERIC_ERROR_MESSAGE: &str = "Error en el registro. Por favor, intenta de nuevo.";

pub const SUCCESS_MESSAGE: &str = "¡Registro exitoso! Ya puedes iniciar sesión.";

/// Registration application configuration
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Fallback error text
    pub generic_error_message: String,
    /// Notice shown after a successful registration
    pub success_message: String,
    /// Where to go once registered
    pub login_path: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            generic_error_message: GENERIC_ERROR_MESSAGE.to_string(),
            success_message: SUCCESS_MESSAGE.to_string(),
            login_path: "/login".to_string(),
        }
    }
}
