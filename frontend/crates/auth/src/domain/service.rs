//! Service Traits
//!
//! Interfaces to the auth and user backends. Implementations are in the
//! infrastructure layer.

use tokio::sync::watch;

use crate::domain::entity::current_user::CurrentUser;
use crate::error::AuthResult;

/// Auth service trait
#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    /// Whether a credential is stored locally; says nothing about its validity
    fn is_authenticated(&self) -> bool;

    /// Ask the backend whether the stored token is still accepted
    async fn validate_token(&self) -> AuthResult<bool>;

    /// Exchange credentials for a token and store it
    async fn login(&self, email: &str, password: &str) -> AuthResult<()>;

    /// Forget the stored token. Local only
    fn logout(&self) -> AuthResult<()>;

    /// Login-state signal; starts at the cached state
    fn login_state(&self) -> watch::Receiver<bool>;
}

/// User service trait
#[trait_variant::make(UserService: Send)]
pub trait LocalUserService {
    /// Profile of the logged-in user
    async fn current_user(&self) -> AuthResult<CurrentUser>;
}
