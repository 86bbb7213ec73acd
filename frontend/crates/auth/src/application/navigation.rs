//! Navigation
//!
//! Resolves a path, runs the guard of the target route and reports whether
//! the route renders or the client is sent elsewhere.

use std::sync::Arc;

use derive_more::Display;

use crate::application::admin_guard::AdminGuard;
use crate::application::config::AuthConfig;
use crate::application::guard::AuthGuard;
use crate::domain::service::{AuthService, UserService};
use crate::domain::value_object::{
    guard_state::GuardDecision,
    route::{GuardKind, Route},
};

/// Outcome of a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Navigation {
    #[display("render {_0}")]
    Render(Route),
    #[display("redirect {_0}")]
    Redirect(Route),
}

impl Navigation {
    /// Route that ends up on screen
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => *route,
        }
    }
}

pub struct Navigator<A, U>
where
    A: AuthService,
    U: UserService,
{
    auth_guard: AuthGuard<A>,
    admin_guard: AdminGuard<A, U>,
}

impl<A, U> Navigator<A, U>
where
    A: AuthService + Send + Sync,
    U: UserService + Send + Sync,
{
    pub fn new(auth: Arc<A>, users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            auth_guard: AuthGuard::new(auth.clone(), config.clone()),
            admin_guard: AdminGuard::new(auth, users, config),
        }
    }

    pub async fn navigate(&self, path: &str) -> Navigation {
        let resolution = Route::resolve(path);
        let route = resolution.route;

        let decision = match route.guard() {
            GuardKind::Public => GuardDecision::Allow,
            GuardKind::Authenticated => self.auth_guard.check().await,
            GuardKind::Admin => self.admin_guard.check().await,
        };

        let navigation = match decision.redirect() {
            Some(target) => Navigation::Redirect(target),
            None if resolution.rewritten => Navigation::Redirect(route),
            None => Navigation::Render(route),
        };

        tracing::info!(path = %path, outcome = %navigation, "Navigation");
        navigation
    }
}
