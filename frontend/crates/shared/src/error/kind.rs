//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum. Kinds mirror the HTTP status classes the
//! recruitment backend answers with, plus the transport failures the client
//! can run into on its own.

/// Error classification
///
/// Every crate-level error maps onto one of these kinds so the UI layer can
/// decide how to present it without knowing where it came from.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status_code(404);
/// assert_eq!(kind, ErrorKind::NotFound);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - the request was rejected as malformed
    BadRequest,
    /// 401 - credentials missing or no longer valid
    Unauthorized,
    /// 403 - authenticated but not allowed
    Forbidden,
    /// 404 - resource does not exist
    NotFound,
    /// 408 - the request (or the client-side timeout) expired
    RequestTimeout,
    /// 409 - conflicts with existing state (e.g. email already registered)
    Conflict,
    /// 422 - payload understood but failed server-side validation
    UnprocessableEntity,
    /// 429 - rate limited
    TooManyRequests,
    /// 500 - unexpected failure
    InternalServerError,
    /// 502 - the backend answered with something unusable
    BadGateway,
    /// 503 - the backend could not be reached
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code equivalent of this kind
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Classify a status code returned by the backend
    ///
    /// Unknown 4xx codes collapse to [`ErrorKind::BadRequest`], unknown 5xx
    /// and anything outside the error range to
    /// [`ErrorKind::InternalServerError`].
    pub const fn from_status_code(status: u16) -> Self {
        match status {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            502 => ErrorKind::BadGateway,
            503 | 504 => ErrorKind::ServiceUnavailable,
            400..=499 => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Whether the failure means the stored credential is not usable
    #[inline]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized | ErrorKind::Forbidden)
    }

    /// 5xx-class errors; these are worth logging at error level
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx-class errors
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_code() {
        assert_eq!(ErrorKind::from_status_code(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status_code(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status_code(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status_code(504), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_status_code(418), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status_code(599), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::from_status_code(302), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_status_code_round_trip_for_known_kinds() {
        for kind in [
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
            ErrorKind::UnprocessableEntity,
            ErrorKind::ServiceUnavailable,
        ] {
            assert_eq!(ErrorKind::from_status_code(kind.status_code()), kind);
        }
    }

    #[test]
    fn test_auth_failure() {
        assert!(ErrorKind::Unauthorized.is_auth_failure());
        assert!(ErrorKind::Forbidden.is_auth_failure());
        assert!(!ErrorKind::ServiceUnavailable.is_auth_failure());
    }

    #[test]
    fn test_error_classes() {
        assert!(ErrorKind::BadGateway.is_server_error());
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(ErrorKind::Conflict.is_client_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
    }

    #[test]
    fn test_display_is_reason_phrase() {
        assert_eq!(ErrorKind::UnprocessableEntity.to_string(), "Unprocessable Entity");
        assert_eq!(ErrorKind::from_status_code(409).to_string(), "Conflict");
    }
}
