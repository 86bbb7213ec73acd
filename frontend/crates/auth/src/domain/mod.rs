//! Domain Layer
//!
//! Contains entities, value objects, and service traits.

pub mod entity;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::current_user::CurrentUser;
pub use service::{AuthService, LocalAuthService, LocalUserService, UserService};
pub use value_object::{
    guard_state::{DenyReason, GuardDecision, GuardState},
    route::{GuardKind, Resolution, Route},
    user_role::UserRole,
};
