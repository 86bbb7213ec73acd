//! Route Table
//!
//! Client routes, their guards, and path resolution.
//!
//! ## Resolution
//! - Query string, fragment and trailing slashes are ignored
//! - `/my-user` is a legacy alias of `/mi-perfil`
//! - Anything unknown falls back to the landing page

use derive_more::Display;

/// Legacy path kept as an alias of [`Route::Profile`]
pub const LEGACY_PROFILE_PATH: &str = "/my-user";

/// Access check attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardKind {
    Public,
    /// Valid session required
    Authenticated,
    /// Valid session and admin role required
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Route {
    #[display("/")]
    Landing,
    #[display("/login")]
    Login,
    #[display("/register")]
    Register,
    #[display("/user-config")]
    UserConfig,
    #[display("/mi-perfil")]
    Profile,
    #[display("/admin-dashboard")]
    AdminDashboard,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Landing,
        Route::Login,
        Route::Register,
        Route::UserConfig,
        Route::Profile,
        Route::AdminDashboard,
    ];

    #[inline]
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::UserConfig => "/user-config",
            Route::Profile => "/mi-perfil",
            Route::AdminDashboard => "/admin-dashboard",
        }
    }

    #[inline]
    pub const fn guard(&self) -> GuardKind {
        match self {
            Route::Profile => GuardKind::Authenticated,
            Route::AdminDashboard => GuardKind::Admin,
            _ => GuardKind::Public,
        }
    }

    /// Exact match on a normalized path
    pub fn from_path(path: &str) -> Option<Self> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Resolve any path to a route, following the alias and the fallback
    pub fn resolve(path: &str) -> Resolution {
        let normalized = normalize_path(path);

        if let Some(route) = Route::from_path(&normalized) {
            return Resolution {
                route,
                rewritten: false,
            };
        }

        let route = if normalized == LEGACY_PROFILE_PATH {
            Route::Profile
        } else {
            tracing::debug!(path = %path, "Unknown path, falling back to landing");
            Route::Landing
        };

        Resolution {
            route,
            rewritten: true,
        }
    }
}

/// Outcome of [`Route::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    /// The path was rewritten by the alias or the fallback
    pub rewritten: bool,
}

fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}
