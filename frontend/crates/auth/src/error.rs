//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::ApiError;
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential is stored
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The backend answered with a non-2xx status
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// Credential file could not be written or removed
    #[error("Credential storage error: {0}")]
    Storage(#[from] StorageError),

    /// No usable answer (timeout, transport, bad body)
    #[error("Auth request failed: {0}")]
    Api(#[source] ApiError),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, detail } => AuthError::Rejected { status, detail },
            other => AuthError::Api(other),
        }
    }
}

impl AuthError {
    /// 401/403 from the backend, or no credential at all
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::Rejected { status: 401 | 403, .. }
        )
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotAuthenticated => ErrorKind::Unauthorized,
            AuthError::Rejected { status, .. } => ErrorKind::from_status_code(*status),
            AuthError::Storage(_) => ErrorKind::InternalServerError,
            AuthError::Api(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = match self.detail() {
            Some(detail) => detail.to_string(),
            None => self.to_string(),
        };
        AppError::new(self.kind(), message)
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Credential storage error");
            }
            AuthError::Api(e) => {
                tracing::error!(error = %e, "Auth request failed");
            }
            AuthError::Rejected { status, detail } if *status >= 500 => {
                tracing::error!(status = *status, detail = ?detail, "Auth server error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
