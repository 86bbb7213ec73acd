//! Auth Guard
//!
//! Decides whether a protected route may be entered.
//!
//! ## Flow
//! 1. No stored credential: deny, redirect to login, no remote call
//! 2. Otherwise validate the token remotely (the only suspension point)
//!    - valid: allow
//!    - invalid: deny, redirect to login
//!    - any error: deny, redirect to login
//!
//! Each navigation runs its own evaluation; nothing is cached or retried.

use std::future::Future;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::service::AuthService;
use crate::domain::value_object::{
    guard_state::{DenyReason, GuardDecision, GuardState},
    route::Route,
};
use crate::error::AuthResult;

/// Run the guard decision
///
/// `validate` is only called when `cached_authenticated` is true.
pub async fn evaluate<F, Fut>(
    cached_authenticated: bool,
    validate: F,
    login_route: Route,
) -> GuardDecision
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = AuthResult<bool>>,
{
    let state = GuardState::Unchecked.on_cache(cached_authenticated);
    if state.is_terminal() {
        tracing::warn!(redirect_to = %login_route, "Not authenticated, redirecting to login");
        return GuardDecision::Deny {
            reason: DenyReason::NoCredential,
            redirect_to: login_route,
        };
    }

    let result = validate().await;
    let state = state.on_validation(result.as_ref().ok().copied());

    match (state, result) {
        (GuardState::Allowed, _) => GuardDecision::Allow,
        (_, Err(e)) => {
            tracing::warn!(
                error = %e,
                redirect_to = %login_route,
                "Token validation failed, redirecting to login"
            );
            GuardDecision::Deny {
                reason: DenyReason::ValidationFailed,
                redirect_to: login_route,
            }
        }
        (_, Ok(_)) => {
            tracing::warn!(redirect_to = %login_route, "Invalid token, redirecting to login");
            GuardDecision::Deny {
                reason: DenyReason::InvalidToken,
                redirect_to: login_route,
            }
        }
    }
}

/// Guard for routes that need a valid session
pub struct AuthGuard<A>
where
    A: AuthService,
{
    auth: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> Clone for AuthGuard<A>
where
    A: AuthService,
{
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            config: self.config.clone(),
        }
    }
}

impl<A> AuthGuard<A>
where
    A: AuthService + Send + Sync,
{
    pub fn new(auth: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { auth, config }
    }

    pub async fn check(&self) -> GuardDecision {
        evaluate(
            self.auth.is_authenticated(),
            || self.auth.validate_token(),
            self.config.login_route,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::application::testing::{MockAuth, Validation};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_cache_false_denies_without_validation() {
        let calls = AtomicUsize::new(0);
        let decision = evaluate(
            false,
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            },
            Route::Login,
        )
        .await;

        assert_eq!(
            decision,
            GuardDecision::Deny {
                reason: DenyReason::NoCredential,
                redirect_to: Route::Login,
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_token_allows() {
        let decision = evaluate(true, || async { Ok(true) }, Route::Login).await;
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_invalid_token_denies() {
        let decision = evaluate(true, || async { Ok(false) }, Route::Login).await;
        assert_eq!(
            decision,
            GuardDecision::Deny {
                reason: DenyReason::InvalidToken,
                redirect_to: Route::Login,
            }
        );
    }

    #[tokio::test]
    async fn test_validation_error_denies() {
        let decision = evaluate(
            true,
            || async {
                Err(AuthError::Rejected {
                    status: 500,
                    detail: None,
                })
            },
            Route::Login,
        )
        .await;
        assert_eq!(
            decision,
            GuardDecision::Deny {
                reason: DenyReason::ValidationFailed,
                redirect_to: Route::Login,
            }
        );
    }

    #[tokio::test]
    async fn test_auth_guard_uses_service() {
        let auth = Arc::new(MockAuth::new(false, Validation::Valid));
        let guard = AuthGuard::new(auth.clone(), Arc::new(AuthConfig::default()));
        assert!(!guard.check().await.is_allowed());
        assert_eq!(auth.validate_calls(), 0);

        let auth = Arc::new(MockAuth::new(true, Validation::Valid));
        let guard = AuthGuard::new(auth.clone(), Arc::new(AuthConfig::default()));
        assert!(guard.check().await.is_allowed());
        assert_eq!(auth.validate_calls(), 1);

        // every check is a fresh evaluation
        guard.check().await;
        assert_eq!(auth.validate_calls(), 2);
    }

    #[tokio::test]
    async fn test_auth_guard_fails_closed() {
        for validation in [Validation::Invalid, Validation::Fail] {
            let auth = Arc::new(MockAuth::new(true, validation));
            let guard = AuthGuard::new(auth.clone(), Arc::new(AuthConfig::default()));
            assert_eq!(guard.check().await.redirect(), Some(Route::Login));
            assert_eq!(auth.validate_calls(), 1);
        }
    }
}
