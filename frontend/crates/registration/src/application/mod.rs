//! Application Layer
//!
//! Form controller and configuration.

pub mod config;
pub mod controller;

// Re-exports
pub use config::RegistrationConfig;
pub use controller::{RegistrationFormController, SubmitOutcome};
