//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Current user, routes, guard states, service traits
//! - `application/` - Guards, navigation, session view
//! - `infra/` - HTTP implementations of the services
//!
//! ## Features
//! - Auth guard: cached credential check, then remote token validation
//! - Admin guard: auth guard plus role check
//! - Route table with legacy alias and landing fallback
//! - Session view following the login-state signal
//!
//! ## Security Model
//! - Fail-closed: any validation error denies navigation
//! - Tokens and passwords are redacted from debug output

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::http::{HttpAuthService, HttpUserService};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::infra::dto::*;
}

pub mod guards {
    pub use crate::application::admin_guard::*;
    pub use crate::application::guard::*;
}
