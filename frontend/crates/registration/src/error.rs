//! Registration Error Types
//!
//! Registration-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::ApiError;
use thiserror::Error;

use crate::domain::value_object::field::Field;

/// Registration-specific result type alias
pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A text value was written to a checkbox field
    #[error("Field {0} does not hold text")]
    NotATextField(Field),

    /// The backend refused the registration
    #[error("Registration rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never got an answer (timeout, transport, bad body)
    #[error("Registration request failed: {0}")]
    Api(#[source] ApiError),
}

impl From<ApiError> for RegistrationError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, detail } => RegistrationError::Rejected { status, detail },
            other => RegistrationError::Api(other),
        }
    }
}

impl RegistrationError {
    /// Message sent by the backend, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            RegistrationError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::NotATextField(_) => ErrorKind::BadRequest,
            RegistrationError::Rejected { status, .. } => ErrorKind::from_status_code(*status),
            RegistrationError::Api(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Text for the user: the backend detail when present, `fallback` otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            RegistrationError::Rejected { status, detail } if *status >= 500 => {
                tracing::error!(status = *status, detail = ?detail, "Registration server error");
            }
            RegistrationError::Rejected { status, detail } => {
                tracing::warn!(status = *status, detail = ?detail, "Registration rejected");
            }
            RegistrationError::Api(e) => {
                tracing::error!(error = %e, "Registration request failed");
            }
            RegistrationError::NotATextField(_) => {
                tracing::debug!(error = %self, "Registration error");
            }
        }
    }
}
