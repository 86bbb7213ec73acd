//! Application Layer
//!
//! Guards, navigation and the session view.

pub mod admin_guard;
pub mod config;
pub mod guard;
pub mod navigation;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use admin_guard::AdminGuard;
pub use config::AuthConfig;
pub use guard::{AuthGuard, evaluate};
pub use navigation::{Navigation, Navigator};
pub use session::{SessionSnapshot, SessionView};
