//! Error conversions - From implementations for common error types

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::new(ErrorKind::BadGateway, format!("Unexpected response body: {}", err))
                .with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// reqwest conversions (feature-gated)
// ============================================================================

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AppError::request_timeout("The server took too long to respond")
                .with_action("Please try again")
                .with_source(err);
        }
        if let Some(status) = err.status() {
            let kind = ErrorKind::from_status_code(status.as_u16());
            return AppError::new(kind, kind.as_str()).with_source(err);
        }
        if err.is_connect() || err.is_request() {
            return AppError::service_unavailable("Could not reach the server")
                .with_action("Check your connection and try again")
                .with_source(err);
        }
        if err.is_decode() {
            return AppError::new(ErrorKind::BadGateway, "Unexpected response from the server")
                .with_source(err);
        }
        AppError::internal("HTTP request failed").with_source(err)
    }
}
