//! HTTP API Client
//!
//! Thin JSON wrapper over `reqwest` shared by the auth, user and
//! registration services.
//!
//! ## Behaviour
//! - Every request carries the configured timeout
//! - Non-2xx responses become [`ApiError::Status`] with the `detail` field of
//!   the error body when the backend sends one
//! - Bearer tokens are attached per request, never stored here
//! - [`ApiClient::get_optional_json`] accepts an empty 2xx body

use std::time::Duration;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default backend location for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL every request path is joined onto
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("tf-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Same as default but with a short timeout
    pub fn development() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            ..Default::default()
        }
    }
}

/// Errors produced while talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-2xx status
    #[error("Server responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Body(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

impl ApiError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable detail sent by the backend
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// 401 or 403
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidUrl(_) => ErrorKind::InternalServerError,
            ApiError::Status { status, .. } => ErrorKind::from_status_code(*status),
            ApiError::Timeout(_) => ErrorKind::RequestTimeout,
            ApiError::Decode(_) | ApiError::Body(_) => ErrorKind::BadGateway,
            ApiError::Transport(_) => ErrorKind::ServiceUnavailable,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, detail } => {
                let kind = ErrorKind::from_status_code(status);
                let message = detail.unwrap_or_else(|| kind.as_str().to_string());
                AppError::new(kind, message)
            }
            ApiError::Timeout(e) | ApiError::Decode(e) | ApiError::Transport(e) => {
                AppError::from(e)
            }
            ApiError::Body(e) => AppError::from(e),
            ApiError::InvalidUrl(message) => AppError::internal(message),
        }
    }
}

/// JSON API client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &HttpConfig) -> ApiResult<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        // Url::join replaces the last segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    /// Start a request, optionally authenticated with a bearer token
    pub fn request(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
    ) -> ApiResult<RequestBuilder> {
        let mut request = self.http.request(method, self.url(path)?);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    /// Send a request and turn non-2xx statuses into [`ApiError::Status`]
    pub async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::debug!(
            status = status.as_u16(),
            detail = ?detail,
            "API request rejected"
        );

        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    pub async fn get_json<T>(&self, path: &str, bearer: Option<&str>) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::GET, path, bearer)?).await?;
        Ok(response.json::<T>().await?)
    }

    /// GET a JSON body that the server may leave empty
    ///
    /// Returns `None` for an empty or whitespace-only 2xx body.
    pub async fn get_optional_json<T>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::GET, path, bearer)?).await?;
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&body).map(Some).map_err(ApiError::Body)
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, bearer)?.json(body);
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST a JSON body and ignore whatever the server answers on success
    pub async fn post_json_discard<B>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, bearer)?.json(body);
        self.send(request).await?;
        Ok(())
    }
}

/// Pull a displayable message out of an error body
///
/// Understands `{"detail": "..."}` and the validation-error shape
/// `{"detail": [{"msg": "..."}, ...]}`; messages of the latter are joined.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
