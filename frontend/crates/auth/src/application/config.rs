//! Application Configuration
//!
//! Configuration for the auth application layer.

use crate::domain::value_object::route::Route;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Redirect target when authentication is missing or rejected
    pub login_route: Route,
    /// Redirect target when the role does not allow the route
    pub forbidden_route: Route,
    /// Revalidate the stored token when the session view starts
    pub validate_on_start: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_route: Route::Login,
            forbidden_route: Route::Landing,
            validate_on_start: true,
        }
    }
}

impl AuthConfig {
    /// Trust the cached state at start-up instead of asking the backend
    pub fn development() -> Self {
        Self {
            validate_on_start: false,
            ..Default::default()
        }
    }
}
