//! HTTP Auth and User Services
//!
//! Talk to the backend through [`ApiClient`]; the access token lives in a
//! [`CredentialStore`].

use std::sync::Arc;

use platform::http::ApiClient;
use platform::storage::CredentialStore;
use tokio::sync::watch;

use crate::domain::entity::current_user::CurrentUser;
use crate::domain::service::{AuthService, UserService};
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{LoginRequest, LoginResponse, ValidateTokenResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const VALIDATE_TOKEN_PATH: &str = "/auth/validate-token";
pub const CURRENT_USER_PATH: &str = "/users/me";

/// Auth service backed by the REST API
pub struct HttpAuthService {
    client: ApiClient,
    store: Arc<dyn CredentialStore>,
    login_state: watch::Sender<bool>,
}

impl HttpAuthService {
    /// The login-state signal starts at the cached state of `store`
    pub fn new(client: ApiClient, store: Arc<dyn CredentialStore>) -> Self {
        let login_state = watch::Sender::new(store.has_credential());
        Self {
            client,
            store,
            login_state,
        }
    }
}

impl AuthService for HttpAuthService {
    fn is_authenticated(&self) -> bool {
        self.store.has_credential()
    }

    async fn validate_token(&self) -> AuthResult<bool> {
        let Some(token) = self.store.load() else {
            tracing::debug!("No stored token to validate");
            return Ok(false);
        };

        let result = self
            .client
            .get_optional_json::<ValidateTokenResponse>(VALIDATE_TOKEN_PATH, Some(token.as_str()))
            .await;

        match result {
            // A 2xx without a body still means the token was accepted
            Ok(body) => Ok(body.is_none_or(|body| body.valid)),
            Err(e) if e.is_unauthorized() => {
                tracing::debug!(status = ?e.status(), "Token rejected");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn login(&self, email: &str, password: &str) -> AuthResult<()> {
        let request = LoginRequest { email, password };
        let response: LoginResponse = self.client.post_json(LOGIN_PATH, &request, None).await?;

        self.store.save(&response.access_token)?;
        self.login_state.send_replace(true);

        tracing::info!(email = %email, "Logged in");
        Ok(())
    }

    fn logout(&self) -> AuthResult<()> {
        self.store.clear()?;
        self.login_state.send_replace(false);

        tracing::info!("Logged out");
        Ok(())
    }

    fn login_state(&self) -> watch::Receiver<bool> {
        self.login_state.subscribe()
    }
}

/// User service backed by the REST API
pub struct HttpUserService {
    client: ApiClient,
    store: Arc<dyn CredentialStore>,
}

impl HttpUserService {
    pub fn new(client: ApiClient, store: Arc<dyn CredentialStore>) -> Self {
        Self { client, store }
    }
}

impl UserService for HttpUserService {
    async fn current_user(&self) -> AuthResult<CurrentUser> {
        let token = self.store.load().ok_or(AuthError::NotAuthenticated)?;
        let user = self
            .client
            .get_json::<CurrentUser>(CURRENT_USER_PATH, Some(token.as_str()))
            .await?;
        Ok(user)
    }
}
