//! Admin Guard
//!
//! Runs the auth guard, then requires the admin role. Authentication
//! failures redirect to login; a non-admin user goes to the forbidden route.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::guard::AuthGuard;
use crate::domain::service::{AuthService, UserService};
use crate::domain::value_object::guard_state::{DenyReason, GuardDecision};

pub struct AdminGuard<A, U>
where
    A: AuthService,
    U: UserService,
{
    auth_guard: AuthGuard<A>,
    users: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<A, U> AdminGuard<A, U>
where
    A: AuthService + Send + Sync,
    U: UserService + Send + Sync,
{
    pub fn new(auth: Arc<A>, users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            auth_guard: AuthGuard::new(auth, config.clone()),
            users,
            config,
        }
    }

    pub async fn check(&self) -> GuardDecision {
        let decision = self.auth_guard.check().await;
        if !decision.is_allowed() {
            return decision;
        }

        match self.users.current_user().await {
            Ok(user) if user.is_admin() => GuardDecision::Allow,
            Ok(user) => {
                tracing::warn!(
                    user_id = user.id,
                    role = %user.role,
                    redirect_to = %self.config.forbidden_route,
                    "Admin route denied"
                );
                GuardDecision::Deny {
                    reason: DenyReason::Forbidden,
                    redirect_to: self.config.forbidden_route,
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    redirect_to = %self.config.login_route,
                    "Failed to load user, redirecting to login"
                );
                GuardDecision::Deny {
                    reason: DenyReason::ValidationFailed,
                    redirect_to: self.config.login_route,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MockAuth, MockUsers, Validation};
    use crate::domain::value_object::{route::Route, user_role::UserRole};

    fn build_guard(
        auth: MockAuth,
        users: MockUsers,
    ) -> (AdminGuard<MockAuth, MockUsers>, Arc<MockUsers>) {
        let users = Arc::new(users);
        let guard = AdminGuard::new(
            Arc::new(auth),
            users.clone(),
            Arc::new(AuthConfig::default()),
        );
        (guard, users)
    }

    #[tokio::test]
    async fn test_admin_allowed() {
        let (guard, _) = build_guard(
            MockAuth::new(true, Validation::Valid),
            MockUsers::with_role(UserRole::Admin),
        );
        assert_eq!(guard.check().await, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_non_admin_goes_to_landing() {
        for role in [UserRole::Applicant, UserRole::Organization] {
            let (guard, _) = build_guard(
                MockAuth::new(true, Validation::Valid),
                MockUsers::with_role(role),
            );
            assert_eq!(
                guard.check().await,
                GuardDecision::Deny {
                    reason: DenyReason::Forbidden,
                    redirect_to: Route::Landing,
                }
            );
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_skips_user_fetch() {
        let (guard, users) = build_guard(
            MockAuth::new(false, Validation::Valid),
            MockUsers::with_role(UserRole::Admin),
        );
        assert_eq!(guard.check().await.redirect(), Some(Route::Login));
        assert_eq!(users.calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_user_fetch_denies() {
        let (guard, users) = build_guard(
            MockAuth::new(true, Validation::Valid),
            MockUsers::failing(),
        );
        assert_eq!(guard.check().await.redirect(), Some(Route::Login));
        assert_eq!(users.calls(), 1);
    }
}
