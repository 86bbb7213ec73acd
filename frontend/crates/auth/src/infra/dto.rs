//! Auth DTOs
//!
//! Request and response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Answer of `POST /auth/login`
#[derive(Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

fn default_valid() -> bool {
    true
}

/// Answer of `GET /auth/validate-token`
#[derive(Debug, Deserialize)]
pub struct ValidateTokenResponse {
    #[serde(default = "default_valid")]
    pub valid: bool,
}
